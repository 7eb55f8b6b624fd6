//! Application configuration loaded from environment variables.

use std::env;

use postboard_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = Self::database_url(&var).map(|url| DatabaseConfig {
            url,
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: var("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            auto_migrate: var("DB_AUTO_MIGRATE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        });

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
        }
    }

    /// `DATABASE_URL` wins; otherwise assemble one from the discrete `DB_*` parts.
    /// With `APP_ENV=test`, `TEST_DB_HOST` replaces `DB_HOST`.
    fn database_url(var: &impl Fn(&str) -> Option<String>) -> Option<String> {
        if let Some(url) = var("DATABASE_URL") {
            return Some(url);
        }

        let host_key = if var("APP_ENV").as_deref() == Some("test") {
            "TEST_DB_HOST"
        } else {
            "DB_HOST"
        };

        let user = var("DB_USER")?;
        let password = var("DB_PASSWORD")?;
        let host = var(host_key)?;
        let name = var("DB_NAME")?;
        let port = var("DB_PORT").unwrap_or_else(|| "5432".to_string());

        Some(format!("postgres://{user}:{password}@{host}:{port}/{name}"))
    }
}
