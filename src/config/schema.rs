//! Configuration schema types for `targets.toml`
//!
//! Defines the structure and validation rules for sandbox0 project
//! configuration: project identity, default version tags, the module
//! inventory, and declared build targets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::target::{
    BuildSettingsVersion, IncludeOrderVersion, TargetContext, TargetDescriptor, TargetType,
};

/// Kind of a declared module.
///
/// Restricts which target flavors may link the module: editor modules only
/// go into editor targets, server modules only into server targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Linked into every target flavor
    #[default]
    Runtime,
    /// Editor-only tooling module
    Editor,
    /// Dedicated-server-only module
    Server,
}

impl ModuleKind {
    /// Whether a module of this kind may be linked into the given flavor.
    pub fn allowed_in(&self, target_type: TargetType) -> bool {
        match self {
            ModuleKind::Runtime => true,
            ModuleKind::Editor => target_type == TargetType::Editor,
            ModuleKind::Server => target_type == TargetType::Server,
        }
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleKind::Runtime => write!(f, "runtime"),
            ModuleKind::Editor => write!(f, "editor"),
            ModuleKind::Server => write!(f, "server"),
        }
    }
}

/// Project metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required); becomes the primary module of every target
    pub name: String,
    /// Project version
    #[serde(default = "default_version")]
    pub version: String,
    /// Root directory holding one subdirectory per module
    #[serde(default = "default_source")]
    pub source: PathBuf,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_source() -> PathBuf {
    PathBuf::from("Source")
}

/// Default version tags applied to targets that don't override them
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Default build settings version
    #[serde(default)]
    pub build_settings: BuildSettingsVersion,
    /// Default include order version
    #[serde(default)]
    pub include_order: IncludeOrderVersion,
}

/// One declared module
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModuleConfig {
    /// What kind of module this is
    #[serde(default)]
    pub kind: ModuleKind,
}

/// One declared build target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Build flavor
    #[serde(rename = "type")]
    pub target_type: TargetType,
    /// Override the default build settings tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_settings: Option<BuildSettingsVersion>,
    /// Override the default include order tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_order: Option<IncludeOrderVersion>,
    /// Modules linked in addition to the project's primary module
    #[serde(default)]
    pub extra_modules: Vec<String>,
}

/// Host-validation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Treat warnings as errors
    #[serde(default)]
    pub strict: bool,
    /// Require each module to have a source directory on disk
    #[serde(default = "default_true")]
    pub check_sources: bool,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self { strict: false, check_sources: true }
    }
}

fn default_true() -> bool {
    true
}

/// Complete targets.toml configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// Project metadata (required)
    pub project: ProjectConfig,
    /// Default version tags
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Module inventory
    #[serde(default)]
    pub modules: HashMap<String, ModuleConfig>,
    /// Declared build targets
    #[serde(default)]
    pub targets: HashMap<String, TargetConfig>,
    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "targets.editor.extra_modules")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "targets.toml: '{}' {}", self.field, self.message)
    }
}

impl TargetsConfig {
    /// Validate the configuration and return any errors.
    ///
    /// Schema-level checks only; platform compatibility and module linkage
    /// rules are the host's job (see [`crate::host`]).
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.project.name.is_empty() {
            errors.push(ConfigValidationError {
                field: "project.name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        for reserved in [':', '/'] {
            if self.project.name.contains(reserved) {
                errors.push(ConfigValidationError {
                    field: "project.name".to_string(),
                    message: format!("cannot contain reserved character '{}'", reserved),
                });
            }
        }

        for (name, target) in &self.targets {
            if name.is_empty() {
                errors.push(ConfigValidationError {
                    field: "targets".to_string(),
                    message: "target names must be non-empty".to_string(),
                });
            }

            for module in &target.extra_modules {
                if module.is_empty() {
                    errors.push(ConfigValidationError {
                        field: format!("targets.{}.extra_modules", name),
                        message: "module names must be non-empty".to_string(),
                    });
                }
            }
        }

        for name in self.modules.keys() {
            if name.is_empty() {
                errors.push(ConfigValidationError {
                    field: "modules".to_string(),
                    message: "module names must be non-empty".to_string(),
                });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Effective build settings tag for a target (override or default).
    pub fn effective_build_settings(&self, target: &TargetConfig) -> BuildSettingsVersion {
        target.build_settings.unwrap_or(self.defaults.build_settings)
    }

    /// Effective include order tag for a target (override or default).
    pub fn effective_include_order(&self, target: &TargetConfig) -> IncludeOrderVersion {
        target.include_order.unwrap_or(self.defaults.include_order)
    }

    /// Module names known to the project: the primary module plus the
    /// declared inventory.
    pub fn known_modules(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.keys().cloned().collect();
        if !names.contains(&self.project.name) {
            names.push(self.project.name.clone());
        }
        names.sort();
        names
    }

    /// Kind of a known module; the primary module is always runtime unless
    /// declared otherwise.
    pub fn module_kind(&self, name: &str) -> Option<ModuleKind> {
        if let Some(module) = self.modules.get(name) {
            return Some(module.kind);
        }
        if name == self.project.name {
            return Some(ModuleKind::Runtime);
        }
        None
    }

    /// Build the descriptor for one declared target.
    pub fn build_descriptor(&self, name: &str, target: &TargetConfig) -> TargetDescriptor {
        let ctx = TargetContext::new(self.project.name.clone());
        TargetDescriptor::new(name, target.target_type, &ctx)
            .with_build_settings(self.effective_build_settings(target))
            .with_include_order(self.effective_include_order(target))
            .with_modules(target.extra_modules.iter().cloned())
    }
}
