//! Target listing and inspection commands (targets, describe)

use std::path::Path;
use std::process::ExitCode;

use crate::config::{load_config, registry_from_config};
use crate::target::{BuildConfiguration, Platform, TargetContext};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Parse platform/configuration CLI strings into a target context.
///
/// An unrecognized tag is a configuration error reported before any
/// descriptor is constructed.
pub(crate) fn parse_context(
    project: &str,
    platform: Option<&str>,
    configuration: Option<&str>,
) -> Result<TargetContext, String> {
    let mut ctx = TargetContext::new(project);

    if let Some(p) = platform {
        let parsed: Platform = p.parse().map_err(|e| format!("{}", e))?;
        ctx = ctx.with_platform(parsed);
    }
    if let Some(c) = configuration {
        let parsed: BuildConfiguration = c.parse().map_err(|e| format!("{}", e))?;
        ctx = ctx.with_configuration(parsed);
    }

    Ok(ctx)
}

/// Execute the targets command: list every registered target.
pub fn run_targets(config_path: Option<&Path>, json: bool) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let registry = match registry_from_config(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let ctx = TargetContext::new(config.project.name.clone());
    let descriptors = registry.resolve_all(&ctx);

    if json {
        let output = serde_json::json!({
            "project": config.project.name,
            "targets": descriptors,
        });
        println!("{}", serde_json::to_string_pretty(&output).expect("JSON value serialization"));
    } else {
        println!("Project: {}", config.project.name);
        println!();
        for desc in &descriptors {
            println!(
                "  {:<12} type={:<7} modules={}",
                desc.name,
                desc.target_type.to_string(),
                desc.modules.join(",")
            );
        }
        println!();
        println!(
            "{} target{}.",
            descriptors.len(),
            if descriptors.len() == 1 { "" } else { "s" }
        );
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the describe command: construct one descriptor and print its
/// field surface.
pub fn run_describe(
    target: &str,
    config_path: Option<&Path>,
    platform: Option<&str>,
    configuration: Option<&str>,
    json: bool,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let ctx = match parse_context(&config.project.name, platform, configuration) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let registry = match registry_from_config(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let Some(descriptor) = registry.resolve(target, &ctx) else {
        eprintln!(
            "Error: unknown target '{}' (available: {})",
            target,
            registry.names().join(", ")
        );
        return ExitCode::from(EXIT_INVALID_ARGS);
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&descriptor).expect("JSON value serialization")
        );
    } else {
        println!("Target: {}", descriptor.id());
        println!("  type:           {}", descriptor.target_type);
        println!("  build settings: {}", descriptor.build_settings);
        println!("  include order:  {}", descriptor.include_order);
        println!("  modules:");
        for module in &descriptor.modules {
            println!("    - {}", module);
        }
        println!("  platform:       {}", ctx.platform);
        println!("  configuration:  {}", ctx.configuration);
    }

    ExitCode::from(EXIT_SUCCESS)
}
