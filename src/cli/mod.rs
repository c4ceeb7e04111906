//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod init;
mod sim;
mod targets;
mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Whether stdout is a terminal that can take ANSI color.
pub(crate) fn use_color() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Sandbox0 - declarative build targets and an orbital sandbox
#[derive(Parser)]
#[command(name = "sbx")]
#[command(about = "Sandbox0 - declare build targets in targets.toml, validate them, run the orbital sandbox")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every target registered for the project
    Targets {
        /// Path to targets.toml (default: walk up from the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Construct one target descriptor and print its field surface
    Describe {
        /// Target name (e.g. "editor")
        target: String,

        /// Path to targets.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Platform to build for: win64, linux, mac, ios, android
        #[arg(long)]
        platform: Option<String>,

        /// Build configuration: debug, development, shipping
        #[arg(long)]
        configuration: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run host validation over every declared target
    Validate {
        /// Path to targets.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Platform to validate against
        #[arg(long)]
        platform: Option<String>,

        /// Build configuration to validate against
        #[arg(long)]
        configuration: Option<String>,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Skip on-disk module source checks
        #[arg(long)]
        no_check_sources: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Advance the orbital sandbox and print the resulting body states
    Sim {
        /// Scenario file (TOML); default: built-in demo system
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Number of fixed physics steps to run
        #[arg(long, default_value = "1000")]
        steps: u32,

        /// Override the scenario's fixed time step (seconds)
        #[arg(long)]
        time_step: Option<f32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scaffold a starter targets.toml and module directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Project name (default: directory name)
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing targets.toml
        #[arg(long)]
        force: bool,
    },
}

/// CLI entry point.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Targets { config, json } => targets::run_targets(config.as_deref(), json),
        Commands::Describe { target, config, platform, configuration, json } => {
            targets::run_describe(
                &target,
                config.as_deref(),
                platform.as_deref(),
                configuration.as_deref(),
                json,
            )
        }
        Commands::Validate { config, platform, configuration, strict, no_check_sources, json } => {
            validate::run_validate(
                config.as_deref(),
                platform.as_deref(),
                configuration.as_deref(),
                strict,
                no_check_sources,
                json,
            )
        }
        Commands::Sim { scenario, steps, time_step, json } => {
            sim::run_sim(scenario.as_deref(), steps, time_step, json)
        }
        Commands::Init { dir, name, force } => init::run_init(&dir, name.as_deref(), force),
    }
}
