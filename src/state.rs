use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{ExerciseService, ShortLinkService, TimestampService};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{ExerciseRepository, ShortLinkRepository, UserRepository};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{
    MemoryExerciseRepository, MemoryShortLinkRepository, MemoryUserRepository,
    PgExerciseRepository, PgShortLinkRepository, PgUserRepository,
};

/// Storage handles shared by the services.
#[derive(Clone)]
pub struct Repositories {
    pub backend: StorageBackend,
    pub short_links: Arc<dyn ShortLinkRepository>,
    pub users: Arc<dyn UserRepository>,
    pub exercises: Arc<dyn ExerciseRepository>,
}

impl Repositories {
    pub fn memory() -> Self {
        Self {
            backend: StorageBackend::Memory,
            short_links: Arc::new(MemoryShortLinkRepository::new()),
            users: Arc::new(MemoryUserRepository::new()),
            exercises: Arc::new(MemoryExerciseRepository::new()),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        let pool = Arc::new(pool);
        Self {
            backend: StorageBackend::Postgres,
            short_links: Arc::new(PgShortLinkRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool.clone())),
            exercises: Arc::new(PgExerciseRepository::new(pool)),
        }
    }
}

/// Runtime switches that affect request handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOptions {
    /// Trust `X-Forwarded-For` / `X-Real-IP` for the client address.
    pub behind_proxy: bool,
    /// Send distinct 4xx codes instead of `200 OK` for client errors.
    pub error_status_codes: bool,
}

impl From<&Config> for HttpOptions {
    fn from(config: &Config) -> Self {
        Self {
            behind_proxy: config.behind_proxy,
            error_status_codes: config.error_status_codes,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub timestamp_service: Arc<TimestampService>,
    pub short_link_service: Arc<ShortLinkService>,
    pub exercise_service: Arc<ExerciseService>,
    pub cache: Arc<dyn CacheService>,
    pub storage: StorageBackend,
    pub options: HttpOptions,
}

impl AppState {
    pub fn new(repositories: Repositories, cache: Arc<dyn CacheService>, options: HttpOptions) -> Self {
        Self {
            timestamp_service: Arc::new(TimestampService::default()),
            short_link_service: Arc::new(ShortLinkService::new(
                repositories.short_links,
                cache.clone(),
            )),
            exercise_service: Arc::new(ExerciseService::new(
                repositories.users,
                repositories.exercises,
            )),
            cache,
            storage: repositories.backend,
            options,
        }
    }
}
