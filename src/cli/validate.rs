//! Validation command implementation (validate)

use std::path::Path;
use std::process::ExitCode;

use crate::config::{find_config, load_config, merge_cli_overrides, project_root, resolve_path,
    CliOverrides};
use crate::host::{validate_all, Severity};

use super::targets::parse_context;
use super::{use_color, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the validate command: run host validation over every declared
/// target and report the findings.
pub fn run_validate(
    config_path: Option<&Path>,
    platform: Option<&str>,
    configuration: Option<&str>,
    strict: bool,
    no_check_sources: bool,
    json: bool,
) -> ExitCode {
    let resolved_path = match config_path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    let Some(resolved_path) = resolved_path else {
        eprintln!("Error: no targets.toml found (searched from the current directory up)");
        return ExitCode::from(EXIT_INVALID_ARGS);
    };

    let mut config = match load_config(Some(&resolved_path)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let overrides = CliOverrides {
        strict: if strict { Some(true) } else { None },
        check_sources: if no_check_sources { Some(false) } else { None },
        ..Default::default()
    };
    merge_cli_overrides(&mut config, &overrides);

    let ctx = match parse_context(&config.project.name, platform, configuration) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let source_root = if config.validate.check_sources {
        project_root(&resolved_path).map(|root| resolve_path(root, &config.project.source))
    } else {
        None
    };

    let reports = validate_all(&config, &ctx, source_root.as_deref());
    let strict = config.validate.strict;

    let error_count: usize = reports.iter().map(|r| r.error_count()).sum();
    let warning_count: usize = reports.iter().map(|r| r.warning_count()).sum();
    let has_failures = reports.iter().any(|r| !r.passed(strict));

    if json {
        let targets: Vec<_> = reports
            .iter()
            .map(|report| {
                serde_json::json!({
                    "target": report.target_id,
                    "passed": report.passed(strict),
                    "issues": report
                        .issues
                        .iter()
                        .map(|issue| {
                            serde_json::json!({
                                "severity": match issue.severity {
                                    Severity::Error => "error",
                                    Severity::Warning => "warning",
                                },
                                "field": issue.field,
                                "message": issue.message,
                            })
                        })
                        .collect::<Vec<_>>(),
                })
            })
            .collect();

        let output = serde_json::json!({
            "valid": !has_failures,
            "errors": error_count,
            "warnings": warning_count,
            "targets": targets,
        });
        println!("{}", serde_json::to_string_pretty(&output).expect("JSON value serialization"));
    } else {
        let color = use_color();
        for report in &reports {
            println!("Validating {}...", report.target_id);
            for issue in &report.issues {
                let label = match (issue.severity, color) {
                    (Severity::Error, true) => "\x1b[31mERROR\x1b[0m",
                    (Severity::Error, false) => "ERROR",
                    (Severity::Warning, true) => "\x1b[33mWARNING\x1b[0m",
                    (Severity::Warning, false) => "WARNING",
                };
                eprintln!("  {}: {} - {}", label, issue.field, issue.message);
            }
        }

        println!();
        match (error_count, warning_count) {
            (0, 0) => println!("No issues found."),
            (0, w) => println!("Found {} warning{}.", w, if w == 1 { "" } else { "s" }),
            (e, 0) => println!("Found {} error{}.", e, if e == 1 { "" } else { "s" }),
            (e, w) => println!(
                "Found {} error{}, {} warning{}.",
                e,
                if e == 1 { "" } else { "s" },
                w,
                if w == 1 { "" } else { "s" }
            ),
        }

        if !strict && warning_count > 0 && error_count == 0 {
            println!("Hint: Run with --strict to treat warnings as errors.");
        }
    }

    if has_failures {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
