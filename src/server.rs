//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, database connections, cache setup, and the
//! Axum server lifecycle.

use crate::config::{Config, StorageBackend};
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::routes::app_router;
use crate::state::{AppState, HttpOptions, Repositories};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Repositories (in-memory, or PostgreSQL with migrations applied)
/// - Redis cache with PostgreSQL storage (or NullCache fallback)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails after all retries
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repositories = match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Repositories::memory()
        }
        StorageBackend::Postgres => {
            let pool = connect_postgres(&config).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            Repositories::postgres(pool)
        }
    };

    let cache = connect_cache(&config).await;

    let state = AppState::new(repositories, cache, HttpOptions::from(&config));
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects to PostgreSQL, retrying with jittered exponential backoff.
async fn connect_postgres(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("STORAGE=postgres requires DATABASE_URL")?;

    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(10))
        .map(jitter)
        .take(config.db_connect_retries);

    Retry::spawn(strategy, || async {
        PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .connect(database_url)
            .await
            .inspect_err(|e| tracing::warn!("Database connection attempt failed: {}", e))
    })
    .await
    .context("Failed to connect to PostgreSQL")
}

async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = config.cache_url() else {
        if config.redis_url.is_some() {
            tracing::info!("Cache disabled with in-memory storage (NullCache)");
        } else {
            tracing::info!("Cache disabled (NullCache)");
        }
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
