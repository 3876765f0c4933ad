use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors raised by the store layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Opens and prepares the PostgreSQL pool backing the API
pub struct DatabaseManager;

impl DatabaseManager {
    /// Connect using the configured URL or host/user/password/name parts
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let connection_string = Self::build_connection_string(config)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&connection_string)
            .await?;

        info!(
            "Created database pool for {} on {}:{}",
            config.name, config.host, config.port
        );
        Ok(pool)
    }

    /// Apply the embedded schema and catalog migrations
    pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations").run(pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    fn build_connection_string(config: &DatabaseConfig) -> Result<String, DatabaseError> {
        if let Some(url) = &config.url {
            let parsed = url::Url::parse(url).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
            return Ok(parsed.into());
        }

        if config.host.trim().is_empty() {
            return Err(DatabaseError::ConfigMissing("DB_HOST"));
        }
        if config.user.trim().is_empty() {
            return Err(DatabaseError::ConfigMissing("DB_USER"));
        }
        if config.name.trim().is_empty() {
            return Err(DatabaseError::ConfigMissing("DB_NAME"));
        }

        let mut url = url::Url::parse("postgres://localhost")
            .map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        url.set_host(Some(&config.host))
            .map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        url.set_port(Some(config.port))
            .map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        url.set_username(&config.user)
            .map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        if !config.password.is_empty() {
            url.set_password(Some(&config.password))
                .map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        }
        url.set_path(&format!("/{}", config.name));
        Ok(url.into())
    }
}
