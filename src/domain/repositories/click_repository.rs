//! Repository trait for click records.

use crate::domain::entities::{ClickRecord, Link};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the click log.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records a click for `link` with the given client descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a link
    /// row that no longer exists.
    async fn insert_click(&self, link: &Link, client_descriptor: &str) -> Result<(), AppError>;

    /// Returns at most `limit` clicks for `link`, newest first, after skipping `offset`.
    async fn paginate_clicks(
        &self,
        link: &Link,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ClickRecord>, AppError>;
}
