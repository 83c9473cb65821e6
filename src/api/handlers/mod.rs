//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod delete;
pub mod ping;
pub mod resolve;
pub mod shorten;
pub mod status;

pub use delete::delete_link_handler;
pub use ping::ping_handler;
pub use resolve::resolve_handler;
pub use shorten::{batch_shorten_handler, shorten_handler};
pub use status::status_handler;
