//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored short link.
///
/// Rows are never physically removed through the service; deletion flips
/// `is_deleted`. The `short_code` is unique across all rows, deleted ones included.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: Uuid,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: Uuid,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        is_deleted: bool,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            is_deleted,
        }
    }

    /// Returns true if the link can be resolved.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

/// Input data for creating a new link.
///
/// Identifier and short code are generated by the caller so that a collision
/// can be retried with fresh values.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub id: Uuid,
    pub original_url: String,
    pub short_code: String,
}
