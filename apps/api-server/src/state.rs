//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::{CommentRepository, PostRepository};
use postboard_infra::database::DatabaseConfig;
use postboard_infra::{InMemoryCommentRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use postboard_infra::database::{self, DbConn};
#[cfg(feature = "postgres")]
use postboard_infra::{PostgresCommentRepository, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    /// Which backend the stores run on, reported by the health check.
    pub storage: &'static str,
    #[cfg(feature = "postgres")]
    pub db: Option<DbConn>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Falls back to the in-memory stores when no database is configured or
    /// it cannot be reached.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match Self::connect(config).await {
                    Ok(state) => return state,
                    Err(e) => {
                        tracing::error!(
                            "Failed to prepare database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!(
                    "No database configured. Running without database (in-memory mode)."
                );
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            if db_config.is_some() {
                tracing::warn!("Database configured but postgres feature is disabled");
            }
            tracing::info!("Running without postgres feature - using in-memory stores");
        }

        Self::in_memory()
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &DatabaseConfig) -> Result<Self, migration::DbErr> {
        use migration::MigratorTrait;

        let conn = database::connect(config).await?;

        if config.auto_migrate {
            migration::Migrator::up(&conn, None).await?;
            tracing::info!("Database migrations applied");
        }

        tracing::info!("Application state initialized (postgres)");

        Ok(Self {
            posts: Arc::new(PostgresPostRepository::new(conn.clone())),
            comments: Arc::new(PostgresCommentRepository::new(conn.clone())),
            storage: "postgres",
            db: Some(conn),
        })
    }

    /// State backed by empty in-memory stores.
    pub fn in_memory() -> Self {
        tracing::info!("Application state initialized (memory)");
        Self::with_stores(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryCommentRepository::new()),
        )
    }

    /// State over arbitrary store implementations.
    pub fn with_stores(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            storage: "memory",
            #[cfg(feature = "postgres")]
            db: None,
        }
    }
}
