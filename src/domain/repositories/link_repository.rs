//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link with `is_deleted = false` and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code (or id) already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_link(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Persists several links atomically, preserving input order.
    ///
    /// Either every link is stored or none is.
    ///
    /// # Errors
    ///
    /// Same as [`LinkRepository::insert_link`], for any element.
    async fn insert_links(&self, new_links: Vec<NewLink>) -> Result<Vec<Link>, AppError>;

    /// Finds a non-deleted link by its exact short code.
    ///
    /// `Ok(None)` is a normal outcome, not an error.
    async fn find_active_link(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by short code regardless of its deletion flag.
    async fn find_any_link(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Marks the link as deleted.
    async fn soft_delete(&self, link: &Link) -> Result<(), AppError>;

    /// Runs a trivial query against the store.
    ///
    /// Never fails: any error is reported as `false`.
    async fn ping(&self) -> bool;
}
