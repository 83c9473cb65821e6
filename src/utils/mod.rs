//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Opaque random short code generation

pub mod code_generator;
