//! Configuration module for the sandbox0 target system
//!
//! Provides types and parsing for `targets.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
