use micro_apis::domain::repositories::ShortLinkRepository;
use micro_apis::infrastructure::persistence::PgShortLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_if_absent_assigns_sequential_codes(pool: PgPool) {
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    let first = repo.insert_if_absent("https://example.com").await.unwrap();
    let second = repo.insert_if_absent("https://rust-lang.org").await.unwrap();

    assert!(first.is_new());
    assert!(second.is_new());

    let first = first.into_inner();
    let second = second.into_inner();
    assert_eq!(second.short_code, first.short_code + 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_if_absent_returns_existing(pool: PgPool) {
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    let created = repo.insert_if_absent("https://example.com").await.unwrap();
    let again = repo.insert_if_absent("https://example.com").await.unwrap();

    assert!(!again.is_new());
    assert_eq!(again.into_inner().short_code, created.into_inner().short_code);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_code_and_url(pool: PgPool) {
    let repo = PgShortLinkRepository::new(Arc::new(pool));

    let link = repo
        .insert_if_absent("https://example.com/a")
        .await
        .unwrap()
        .into_inner();

    let by_code = repo.find_by_code(link.short_code).await.unwrap().unwrap();
    assert_eq!(by_code.original_url, "https://example.com/a");

    let by_url = repo.find_by_url("https://example.com/a").await.unwrap().unwrap();
    assert_eq!(by_url.short_code, link.short_code);

    assert!(repo.find_by_code(link.short_code + 100).await.unwrap().is_none());
    assert!(repo.ping().await.is_ok());
}
