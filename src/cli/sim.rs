//! Orbital sandbox command (sim)

use std::path::Path;
use std::process::ExitCode;

use crate::sim::{PhysicsSim, SolarSystem};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the sim command: advance a scenario by a number of fixed steps
/// and print the final body states.
pub fn run_sim(
    scenario: Option<&Path>,
    steps: u32,
    time_step: Option<f32>,
    json: bool,
) -> ExitCode {
    let mut system = match scenario {
        Some(path) => {
            let contents = match std::fs::read_to_string(path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error: Cannot read '{}': {}", path.display(), e);
                    return ExitCode::from(EXIT_ERROR);
                }
            };
            match toml::from_str::<SolarSystem>(&contents) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error: Cannot parse scenario '{}': {}", path.display(), e);
                    return ExitCode::from(EXIT_ERROR);
                }
            }
        }
        None => SolarSystem::demo(),
    };

    if system.is_empty() {
        eprintln!("Error: scenario '{}' has no bodies", system.name);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    if let Some(dt) = time_step {
        if dt <= 0.0 {
            eprintln!("Error: --time-step must be positive");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        system.time_step = dt;
    }

    let mut sim = PhysicsSim::new(system.time_step);
    sim.start();
    for _ in 0..steps {
        sim.step(&mut system);
    }

    let elapsed = steps as f32 * sim.time_step();

    if json {
        let output = serde_json::json!({
            "scenario": system.name,
            "steps": steps,
            "time_step": sim.time_step(),
            "elapsed": elapsed,
            "bodies": system.bodies(),
        });
        println!("{}", serde_json::to_string_pretty(&output).expect("JSON value serialization"));
    } else {
        println!(
            "Scenario '{}': {} step{} of {}s ({}s simulated)",
            system.name,
            steps,
            if steps == 1 { "" } else { "s" },
            sim.time_step(),
            elapsed
        );
        println!();
        for body in system.bodies() {
            println!(
                "  {:<10} pos=({:>10.2}, {:>10.2}, {:>10.2})  vel=({:>8.2}, {:>8.2}, {:>8.2})",
                body.name,
                body.position.x,
                body.position.y,
                body.position.z,
                body.velocity.x,
                body.velocity.y,
                body.velocity.z
            );
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
