//! Database settings and startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal refuses to serve any page until the schema is current: both the
//! presence guard and the supplier API assume the suppliers table's
//! one-row-per-user constraint is already in place, so migrations run before
//! the listener binds. Connection settings come from the environment once at
//! startup and are carried as a value from then on.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum DbConfigError {
    #[error("DATABASE_URL is not set")]
    MissingUrl,
}

/// Connection settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct DbSettings {
    url: String,
    max_connections: u32,
}

impl DbSettings {
    /// Read `DATABASE_URL` (required) and `DB_MAX_CONNECTIONS` (optional)
    /// from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`DbConfigError::MissingUrl`] when `DATABASE_URL` is unset.
    pub fn from_env() -> Result<Self, DbConfigError> {
        let url = std::env::var("DATABASE_URL").map_err(|_| DbConfigError::MissingUrl)?;
        let max_connections = max_connections_from(std::env::var("DB_MAX_CONNECTIONS").ok());
        Ok(Self { url, max_connections })
    }

    /// Connect the shared pool and run migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migrations fail.
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.url)
            .await?;

        sqlx::migrate!("src/db/migrations").run(&pool).await?;

        Ok(pool)
    }
}

/// Parse a pool-size override, falling back to the default on unset or
/// unparseable values.
fn max_connections_from(raw: Option<String>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}
