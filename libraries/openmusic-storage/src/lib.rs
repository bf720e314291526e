//! OpenMusic Storage
//!
//! `SQLite` implementation of the OpenMusic store traits.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each resource type owns its queries (`albums`,
//!   `songs`, `playlists`, `collaborations`, `users`)
//! - **Explicit Pool**: the pool is created once and handed to
//!   [`SqliteCatalog`] at construction; nothing reaches for a global
//! - **Affected Rows**: every write checks `rows_affected()` so "nothing
//!   matched" is reported as `NotFound` rather than silent success
//!
//! # Example
//!
//! ```rust,no_run
//! use openmusic_core::AlbumStore;
//! use openmusic_storage::{create_pool, run_migrations, SqliteCatalog};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://openmusic.db").await?;
//! run_migrations(&pool).await?;
//!
//! let catalog = SqliteCatalog::new(pool);
//! let _album = catalog.get_album("album-Qbax5Oy7L8WKf74l".into()).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod rows;

// Vertical slices
pub mod albums;
pub mod collaborations;
pub mod playlists;
pub mod songs;
pub mod users;

pub use context::SqliteCatalog;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://openmusic.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "creating sqlite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("sqlite pool ready");

    Ok(pool)
}
