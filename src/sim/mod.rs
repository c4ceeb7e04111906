//! Orbital sandbox: the sandbox0 project's game module.
//!
//! An N-body gravity simulation with fixed-timestep integration, meant to
//! be driven from a frame loop: feed wall-clock deltas to
//! [`PhysicsSim::tick`] and the simulation advances in whole physics steps.

pub mod body;
pub mod physics;
pub mod system;
pub mod vec3;

pub use body::*;
pub use physics::*;
pub use system::*;
pub use vec3::*;
