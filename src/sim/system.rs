//! A named collection of bodies plus a default time step.

use serde::{Deserialize, Serialize};

use super::body::CelestialBody;
use super::vec3::Vec3;

fn default_time_step() -> f32 {
    1.0 / 60.0
}

/// A solar system: ordered body list and the time step the simulation
/// should use for it.
///
/// Scenarios load from TOML (see `sbx sim --scenario`), so the whole
/// struct is serde-enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSystem {
    pub name: String,
    /// Seconds of simulated time per physics step
    #[serde(default = "default_time_step")]
    pub time_step: f32,
    #[serde(default)]
    pub bodies: Vec<CelestialBody>,
}

impl SolarSystem {
    /// Create an empty system.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), time_step: default_time_step(), bodies: Vec::new() }
    }

    /// Append a body, preserving insertion order.
    pub fn add_body(&mut self, body: CelestialBody) {
        self.bodies.push(body);
    }

    /// Remove every body with the given name.
    pub fn remove_body(&mut self, name: &str) {
        self.bodies.retain(|b| b.name != name);
    }

    /// Body by index.
    pub fn body(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    /// First body with the given name.
    pub fn body_by_name(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// All bodies, in insertion order.
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Total linear momentum of the system.
    pub fn total_momentum(&self) -> Vec3 {
        self.bodies.iter().fold(Vec3::ZERO, |acc, b| acc + b.momentum())
    }

    /// Total kinetic energy of the system.
    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Built-in demo scenario: a heavy star with two light bodies on
    /// roughly circular orbits. Speeds are v = sqrt(G*M/r) for G = 1.
    pub fn demo() -> Self {
        let star_mass = 1.0e6_f32;

        let mut system = SolarSystem::new("demo");
        system.time_step = 0.01;
        system.add_body(CelestialBody::new("sol", star_mass, 100.0));

        let r_inner = 1000.0_f32;
        let v_inner = (star_mass / r_inner).sqrt();
        system.add_body(
            CelestialBody::new("inner", 1.0, 5.0)
                .at(Vec3::new(r_inner, 0.0, 0.0))
                .moving(Vec3::new(0.0, v_inner, 0.0)),
        );

        let r_outer = 4000.0_f32;
        let v_outer = (star_mass / r_outer).sqrt();
        system.add_body(
            CelestialBody::new("outer", 1.0, 8.0)
                .at(Vec3::new(r_outer, 0.0, 0.0))
                .moving(Vec3::new(0.0, v_outer, 0.0)),
        );

        system
    }
}
