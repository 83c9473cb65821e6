//! Application layer: business logic on top of the repository traits.
//!
//! - [`services::link_service::LinkService`] - shorten, resolve, delete, click status, health

pub mod services;
