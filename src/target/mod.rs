//! Build-target descriptor module.
//!
//! A target descriptor declares the static parameters the build host needs
//! to produce one artifact: flavor, version tags, and module list. The
//! registry maps target names to factories so the host can discover every
//! available target without per-target wiring.

pub mod descriptor;
pub mod registry;

pub use descriptor::*;
pub use registry::*;
