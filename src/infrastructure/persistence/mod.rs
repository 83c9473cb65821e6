//! Storage implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage and retrieval on PostgreSQL
//! - [`PgClickRepository`] - Click recording and paging on PostgreSQL
//! - [`InMemoryStore`] - Both traits over process memory

pub mod memory_store;
pub mod pg_click_repository;
pub mod pg_link_repository;

pub use memory_store::InMemoryStore;
pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Opens a PostgreSQL pool tuned by the `DB_*` settings.
///
/// # Errors
///
/// Returns an error if no connection can be established within
/// `db_connect_timeout`.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
}
