#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Run pending migrations before serving.
    pub auto_migrate: bool,
}

/// Open the connection pool described by `config`.
#[cfg(feature = "postgres")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    let url = redact_url(&config.url);
    tracing::info!(%url, "Connecting to database...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    match Database::connect(opts).await {
        Ok(conn) => {
            tracing::info!(%url, pool = config.max_connections, "Database connected");
            Ok(conn)
        }
        Err(e) => {
            tracing::error!(%url, error = %e, "Database connection error");
            Err(e)
        }
    }
}

/// Mask the password of a connection URL so it can be logged.
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };

    match credentials.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::redact_url;

    #[test]
    fn test_redact_url_hides_password() {
        assert_eq!(
            redact_url("postgres://blog:s3cret@db:5432/blog"),
            "postgres://blog:***@db:5432/blog"
        );
    }

    #[test]
    fn test_redact_url_without_credentials_is_unchanged() {
        assert_eq!(redact_url("postgres://db/blog"), "postgres://db/blog");
        assert_eq!(redact_url("not a url"), "not a url");
    }
}
