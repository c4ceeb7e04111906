//! Host-side descriptor validation.
//!
//! Descriptors never validate themselves; the host checks a completed
//! descriptor against platform and project constraints after reading it.
//! Every failure mode named here originates in the host, not the descriptor.

use std::collections::HashSet;
use std::path::Path;

use crate::config::TargetsConfig;
use crate::host::discovery::module_dir_exists;
use crate::target::{BuildConfiguration, TargetContext, TargetDescriptor, TargetType};

/// How bad an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The descriptor cannot be built as declared
    Error,
    /// Suspicious but buildable
    Warning,
}

/// One validation finding for a descriptor.
#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: Severity,
    /// Descriptor field the finding concerns (e.g. "modules")
    pub field: String,
    pub message: String,
}

impl Issue {
    fn error(field: &str, message: String) -> Self {
        Self { severity: Severity::Error, field: field.to_string(), message }
    }

    fn warning(field: &str, message: String) -> Self {
        Self { severity: Severity::Warning, field: field.to_string(), message }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };
        write!(f, "{}: {} - {}", severity, self.field, self.message)
    }
}

/// Report for one validated descriptor.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Id of the descriptor that was checked
    pub target_id: String,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// Number of error-severity issues.
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.severity == Severity::Error).count()
    }

    /// Number of warning-severity issues.
    pub fn warning_count(&self) -> usize {
        self.issues.iter().filter(|i| i.severity == Severity::Warning).count()
    }

    /// Whether the descriptor passed.
    ///
    /// In strict mode warnings fail the report too.
    pub fn passed(&self, strict: bool) -> bool {
        self.error_count() == 0 && (!strict || self.warning_count() == 0)
    }
}

/// Validate one descriptor against project config and host context.
///
/// Checks performed, per the host's error taxonomy:
/// - module list must not be empty,
/// - module names must not repeat,
/// - every module must be declared in the project config,
/// - module kinds must be allowed in the target flavor,
/// - the platform must support the target flavor,
/// - editor targets cannot use the shipping configuration.
///
/// When `source_root` is given, each module must also have a source
/// directory on disk.
pub fn validate_descriptor(
    descriptor: &TargetDescriptor,
    config: &TargetsConfig,
    ctx: &TargetContext,
    source_root: Option<&Path>,
) -> ValidationReport {
    let mut issues = Vec::new();

    if descriptor.modules.is_empty() {
        issues.push(Issue::error(
            "modules",
            "a runnable target must include at least one module".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for module in &descriptor.modules {
        if !seen.insert(module.as_str()) {
            issues.push(Issue::error(
                "modules",
                format!("module '{}' is listed more than once", module),
            ));
        }
    }

    let known: HashSet<String> = config.known_modules().into_iter().collect();
    for module in &descriptor.modules {
        if !known.contains(module) {
            issues.push(Issue::error(
                "modules",
                format!("unknown module '{}' (not declared in [modules])", module),
            ));
            continue;
        }

        if let Some(kind) = config.module_kind(module) {
            if !kind.allowed_in(descriptor.target_type) {
                issues.push(Issue::error(
                    "modules",
                    format!(
                        "{} module '{}' cannot be linked into a {} target",
                        kind, module, descriptor.target_type
                    ),
                ));
            }
        }

        if let Some(root) = source_root {
            if !module_dir_exists(root, module) {
                issues.push(Issue::error(
                    "modules",
                    format!(
                        "module '{}' has no source directory under '{}'",
                        module,
                        root.display()
                    ),
                ));
            }
        }
    }

    match descriptor.target_type {
        TargetType::Editor if !ctx.platform.supports_editor() => {
            issues.push(Issue::error(
                "target_type",
                format!("platform '{}' does not support editor targets", ctx.platform),
            ));
        }
        TargetType::Server if !ctx.platform.supports_server() => {
            issues.push(Issue::error(
                "target_type",
                format!("platform '{}' does not support dedicated server targets", ctx.platform),
            ));
        }
        _ => {}
    }

    if descriptor.target_type == TargetType::Editor
        && ctx.configuration == BuildConfiguration::Shipping
    {
        issues.push(Issue::error(
            "target_type",
            "editor targets cannot be built in the shipping configuration".to_string(),
        ));
    }

    if descriptor.build_settings != crate::target::BuildSettingsVersion::Latest
        && descriptor.build_settings != config.defaults.build_settings
    {
        issues.push(Issue::warning(
            "build_settings",
            format!(
                "target pins '{}' while the project default is '{}'",
                descriptor.build_settings, config.defaults.build_settings
            ),
        ));
    }

    ValidationReport { target_id: descriptor.id(), issues }
}

/// Validate every target declared in the config for one context.
///
/// Descriptors are constructed through [`crate::config::registry_from_config`]
/// semantics: one fresh descriptor per target, checked and discarded.
pub fn validate_all(
    config: &TargetsConfig,
    ctx: &TargetContext,
    source_root: Option<&Path>,
) -> Vec<ValidationReport> {
    let mut names: Vec<&String> = config.targets.keys().collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let descriptor = config.build_descriptor(name, &config.targets[name]);
            validate_descriptor(&descriptor, config, ctx, source_root)
        })
        .collect()
}
