//! Database pool and migration management.
//!
//! Pools are opened lazily: constructing one never touches the network, so
//! the service comes up even while the database is still down. The first
//! real connection is made by whichever caller first acquires from the
//! pool, in practice the readiness probe or a migration run.

use sqlx::{
    migrate::Migrator,
    mysql::MySqlPoolOptions,
    sqlite::SqlitePoolOptions,
    MySqlPool, SqlitePool,
};
use thiserror::Error;

use panchito_core::settings::Settings;

/// Embedded migration set. The directory is empty for now: no domain
/// schema exists yet, only the migration bookkeeping itself.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to open database pool: {0}")]
    Open(#[source] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("unsupported database URL scheme (expected mysql:// or sqlite:)")]
    UnsupportedScheme,
}

/// Connection pool over the configured backend.
///
/// MySQL serves the deployed profiles; SQLite backs the in-memory database
/// the testing profile pins.
#[derive(Debug, Clone)]
pub enum Db {
    MySql(MySqlPool),
    Sqlite(SqlitePool),
}

impl Db {
    /// Open a lazy pool for the resolved database URL, dispatching on the
    /// URL scheme.
    pub fn connect_lazy(settings: &Settings) -> Result<Self, DatabaseError> {
        let url = settings.database_url.as_str();
        if url.starts_with("mysql://") {
            let pool = MySqlPoolOptions::new()
                .max_connections(settings.db_max_connections)
                .acquire_timeout(settings.db_acquire_timeout())
                .connect_lazy(url)
                .map_err(DatabaseError::Open)?;
            Ok(Self::MySql(pool))
        } else if url.starts_with("sqlite:") {
            let pool = SqlitePoolOptions::new()
                .max_connections(settings.db_max_connections)
                .acquire_timeout(settings.db_acquire_timeout())
                .connect_lazy(url)
                .map_err(DatabaseError::Open)?;
            Ok(Self::Sqlite(pool))
        } else {
            Err(DatabaseError::UnsupportedScheme)
        }
    }

    /// Round-trip a trivial query to verify the database is reachable.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            Self::MySql(pool) => {
                sqlx::query("SELECT 1").fetch_one(pool).await?;
            }
            Self::Sqlite(pool) => {
                sqlx::query("SELECT 1").fetch_one(pool).await?;
            }
        }
        Ok(())
    }

    /// Apply pending migrations to the connected database.
    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        match self {
            Self::MySql(pool) => MIGRATOR.run(pool).await?,
            Self::Sqlite(pool) => MIGRATOR.run(pool).await?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchito_core::settings::Profile;

    fn in_memory_settings() -> Settings {
        Settings::from_env(Profile::Testing).expect("testing settings resolve")
    }

    // Building a pool spawns maintenance tasks, so even the lazy
    // constructor needs a runtime.
    #[tokio::test]
    async fn scheme_dispatch_picks_the_backend() {
        let mut settings = in_memory_settings();
        assert!(matches!(Db::connect_lazy(&settings), Ok(Db::Sqlite(_))));

        settings.database_url = "mysql://root:password@db:3306/example".to_string();
        assert!(matches!(Db::connect_lazy(&settings), Ok(Db::MySql(_))));
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        let mut settings = in_memory_settings();
        settings.database_url = "postgres://db/example".to_string();
        assert!(matches!(
            Db::connect_lazy(&settings),
            Err(DatabaseError::UnsupportedScheme)
        ));
    }

    #[tokio::test]
    async fn ping_round_trips_in_memory() {
        let db = Db::connect_lazy(&in_memory_settings()).unwrap();
        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn migrations_run_cleanly_on_an_empty_set() {
        let db = Db::connect_lazy(&in_memory_settings()).unwrap();
        db.run_migrations().await.unwrap();
        // Re-running is a no-op rather than an error.
        db.run_migrations().await.unwrap();
    }
}
