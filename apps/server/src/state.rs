//! Shared application state

use crate::{
    config::{Config, DatabaseConfig, StoreBackend},
    db::{InMemorySubjectStore, PostgresSubjectStore, SubjectStore},
    services::CatalogService,
    Error, Result,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct AppStateOptions {
    /// Overrides `database.backend` from the configuration.
    pub backend: Option<StoreBackend>,
}

impl AppStateOptions {
    /// In-process store, no database required (useful for tests).
    pub fn in_memory() -> Self {
        Self {
            backend: Some(StoreBackend::Memory),
        }
    }
}

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn SubjectStore>,
    pub catalog_service: Arc<CatalogService>,
}

impl AppState {
    /// Initialize the application state
    pub async fn new(config: Config) -> Result<Self> {
        Self::new_with_options(config, AppStateOptions::default()).await
    }

    pub async fn new_with_options(config: Config, options: AppStateOptions) -> Result<Self> {
        tracing::info!("Initializing application state...");

        let backend = options.backend.unwrap_or(config.database.backend);
        let store: Arc<dyn SubjectStore> = match backend {
            StoreBackend::Postgres => {
                let pool = create_db_pool(&config.database).await?;

                if config.database.run_migrations {
                    tracing::info!("Running database migrations...");
                    sqlx::migrate!("./migrations").run(&pool).await?;
                }

                Arc::new(PostgresSubjectStore::new(pool))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory subject store; data is lost on restart");
                Arc::new(InMemorySubjectStore::new())
            }
        };

        tracing::info!(backend = ?backend, "Application state initialized successfully");
        Ok(Self::with_store(config, store))
    }

    /// Build state around an already constructed store.
    pub fn with_store(config: Config, store: Arc<dyn SubjectStore>) -> Self {
        let catalog_service = Arc::new(CatalogService::new(store.clone()));
        Self {
            config: Arc::new(config),
            store,
            catalog_service,
        }
    }

    /// Close the store. Call once the server has stopped accepting requests.
    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}

async fn create_db_pool(config: &DatabaseConfig) -> Result<PgPool> {
    tracing::info!("Creating database connection pool...");

    let statement_timeout = config.statement_timeout_seconds;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .min_connections(config.pool_min_size)
        .max_connections(config.pool_max_size)
        .acquire_timeout(std::time::Duration::from_secs(config.pool_timeout_seconds))
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                sqlx::query(&format!("SET statement_timeout = '{}s'", statement_timeout))
                    .execute(&mut *conn)
                    .await?;
                Ok(())
            })
        })
        .connect(&config.url)
        .await
        .map_err(Error::Database)?;

    tracing::info!(
        "Database pool created (min: {}, max: {})",
        config.pool_min_size,
        config.pool_max_size
    );

    Ok(pool)
}
