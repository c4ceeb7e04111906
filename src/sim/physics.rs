//! Fixed-timestep N-body gravity driver.
//!
//! `PhysicsSim` owns only scalar state (time step, accumulator, run flag)
//! and a scratch acceleration buffer; the bodies live in the
//! [`SolarSystem`] handed to [`PhysicsSim::tick`]. Ticking is
//! frame-independent: wall-clock deltas accumulate and the simulation
//! advances in whole fixed steps.

use super::system::SolarSystem;
use super::vec3::Vec3;

/// Smallest accepted fixed time step, in seconds.
const MIN_TIME_STEP: f32 = 1.0e-4;

/// Default softening distance, in meters.
///
/// Separations below this are clamped when computing gravity so close
/// encounters don't produce unbounded forces.
const DEFAULT_MIN_DISTANCE: f32 = 100.0;

/// N-body gravity simulation with fixed-step integration.
#[derive(Debug, Clone)]
pub struct PhysicsSim {
    fixed_time_step: f32,
    accumulator: f32,
    running: bool,
    /// Gravitational constant in scenario units
    gravitational_constant: f32,
    /// Softening distance
    min_distance: f32,
    /// Per-body accelerations for the current step
    accelerations: Vec<Vec3>,
}

impl PhysicsSim {
    /// Create a paused simulation with the given fixed time step.
    pub fn new(fixed_time_step: f32) -> Self {
        Self {
            fixed_time_step: fixed_time_step.max(MIN_TIME_STEP),
            accumulator: 0.0,
            running: false,
            gravitational_constant: 1.0,
            min_distance: DEFAULT_MIN_DISTANCE,
            accelerations: Vec::new(),
        }
    }

    /// Override the gravitational constant.
    pub fn with_gravitational_constant(mut self, g: f32) -> Self {
        self.gravitational_constant = g;
        self
    }

    /// Override the softening distance.
    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance.max(f32::EPSILON);
        self
    }

    /// Change the fixed time step; clamped to a small positive minimum.
    pub fn set_time_step(&mut self, fixed_time_step: f32) {
        self.fixed_time_step = fixed_time_step.max(MIN_TIME_STEP);
    }

    pub fn time_step(&self) -> f32 {
        self.fixed_time_step
    }

    /// Begin advancing on tick. Resets the accumulator.
    pub fn start(&mut self) {
        self.running = true;
        self.accumulator = 0.0;
    }

    /// Stop advancing but keep accumulated time semantics for resume.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop advancing and discard accumulated time.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the system by a wall-clock delta.
    ///
    /// Performs `floor((accumulator + delta) / fixed_time_step)` whole
    /// physics steps; the remainder stays in the accumulator. Does nothing
    /// while paused.
    pub fn tick(&mut self, system: &mut SolarSystem, delta: f32) {
        if !self.running {
            return;
        }

        self.accumulator += delta;

        while self.accumulator >= self.fixed_time_step {
            self.step(system);
            self.accumulator -= self.fixed_time_step;
        }
    }

    /// Run exactly one fixed physics step, regardless of run state.
    pub fn step(&mut self, system: &mut SolarSystem) {
        if system.is_empty() {
            return;
        }

        self.compute_forces(system);
        self.integrate(system);
    }

    /// Fill the acceleration buffer from pairwise Newtonian gravity.
    ///
    /// O(N^2) over unordered pairs; each pair contributes equal and
    /// opposite accelerations scaled by the receiving mass, so linear
    /// momentum is conserved up to float error.
    fn compute_forces(&mut self, system: &SolarSystem) {
        let bodies = system.bodies();
        let n = bodies.len();

        self.accelerations.clear();
        self.accelerations.resize(n, Vec3::ZERO);

        let min_dist_sq = self.min_distance * self.min_distance;

        for i in 0..n {
            let mass_a = bodies[i].mass;
            let pos_a = bodies[i].position;

            for j in (i + 1)..n {
                let mass_b = bodies[j].mass;
                let pos_b = bodies[j].position;

                let delta = pos_b - pos_a;
                let mut dist_sq = delta.length_squared();

                // Softening: clamp close separations
                if dist_sq < min_dist_sq {
                    dist_sq = min_dist_sq;
                }

                let dist = dist_sq.sqrt();
                let direction = delta / dist;

                // F = G * m1 * m2 / r^2, a = F / m
                let force_mag = self.gravitational_constant * mass_a * mass_b / dist_sq;

                self.accelerations[i] += direction * (force_mag / mass_a);
                self.accelerations[j] += -direction * (force_mag / mass_b);
            }
        }
    }

    /// Semi-implicit Euler: velocity first, then position with the new
    /// velocity.
    fn integrate(&mut self, system: &mut SolarSystem) {
        let dt = self.fixed_time_step;

        for (body, accel) in system.bodies.iter_mut().zip(&self.accelerations) {
            body.velocity += *accel * dt;
            body.position += body.velocity * dt;
        }
    }
}
