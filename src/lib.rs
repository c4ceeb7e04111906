//! Sandbox0 - declarative build-target descriptors and an orbital sandbox
//!
//! This library provides functionality to:
//! - Declare build targets (editor, game, client, server) as inert
//!   descriptor records constructed from a host context
//! - Register target factories in an explicit table and load them from
//!   `targets.toml`
//! - Validate completed descriptors on the host side (module inventory,
//!   platform support, version tags)
//! - Run the project's N-body orbital sandbox with fixed-timestep physics

pub mod cli;
pub mod config;
pub mod host;
pub mod sim;
pub mod target;
