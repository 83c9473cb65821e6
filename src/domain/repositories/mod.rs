//! Repository trait definitions for the domain layer.
//!
//! These traits are the seam between the link service and the store. Each
//! method is one atomic unit of work against the store.
//!
//! # Implementations
//!
//! - PostgreSQL: `crate::infrastructure::persistence::{PgLinkRepository, PgClickRepository}`
//! - In-memory: `crate::infrastructure::persistence::InMemoryStore` (implements both)
//! - Mocks: generated by `mockall` under `cfg(test)`

pub mod click_repository;
pub mod link_repository;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
