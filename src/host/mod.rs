//! Build-host surface: the consumer of target descriptors.
//!
//! The host reads a completed descriptor's field surface and decides whether
//! it can be built: unknown modules, incompatible version tags, or an
//! unsupported target type for a platform are all rejected here, never by
//! the descriptor itself.

pub mod discovery;
pub mod validate;

pub use discovery::*;
pub use validate::*;
