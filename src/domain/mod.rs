//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the infrastructure or API layers;
//! the service in [`crate::application`] consumes these traits and the
//! implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
