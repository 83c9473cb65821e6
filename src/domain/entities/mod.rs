//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping, soft-deletable
//! - [`ClickRecord`] - A resolution of a link, recorded once per hit
//! - [`ClientData`] - Requester metadata captured at resolution time
//!
//! Creation inputs live in separate structs (`NewLink`) so that storage-assigned
//! fields such as `created_at` never have to be faked by callers.

pub mod click;
pub mod link;

pub use click::{ClickRecord, ClientData};
pub use link::{Link, NewLink};
