//! Celestial bodies: the particles of the orbital sandbox.

use serde::{Deserialize, Serialize};

use super::vec3::Vec3;

/// One body in the simulation.
///
/// Mass is in kilograms and radius in meters nominally, but the simulation
/// only cares that the units are consistent with the gravitational constant
/// in use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub name: String,
    pub mass: f32,
    pub radius: f32,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub velocity: Vec3,
}

impl CelestialBody {
    /// Create a body at the origin, at rest.
    pub fn new(name: impl Into<String>, mass: f32, radius: f32) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }

    /// Place the body.
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Give the body an initial velocity.
    pub fn moving(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Linear momentum of this body.
    pub fn momentum(&self) -> Vec3 {
        self.velocity * self.mass
    }

    /// Kinetic energy of this body.
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
