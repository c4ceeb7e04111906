//! Configuration loading and discovery for `targets.toml`
//!
//! Provides functions to find, load, and merge configuration, and to turn a
//! loaded configuration into a populated target registry.

use super::schema::{TargetsConfig, ValidateConfig};
use crate::target::{BuildConfiguration, Platform, RegistryError, TargetRegistry};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error (includes unrecognized enum tags)
    #[error("Failed to parse targets.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
    /// Registry population error (duplicate target names)
    #[error("Failed to register target: {0}")]
    Registry(#[from] RegistryError),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override module source root
    pub source: Option<PathBuf>,
    /// Override target platform
    pub platform: Option<Platform>,
    /// Override build configuration
    pub configuration: Option<BuildConfiguration>,
    /// Enable strict validation
    pub strict: Option<bool>,
    /// Toggle on-disk module source checks
    pub check_sources: Option<bool>,
}

/// Find targets.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join("targets.toml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find targets.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Load configuration from a targets.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [`find_config`] to locate one. If no config file is found, returns a
/// default configuration named after the current directory.
pub fn load_config(path: Option<&Path>) -> Result<TargetsConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<TargetsConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: TargetsConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Create a default configuration when no targets.toml is found.
///
/// The project name falls back to the current directory name, and the four
/// standard target flavors come from [`TargetRegistry::with_defaults`]
/// rather than the config.
pub fn default_config() -> TargetsConfig {
    let project_name = env::current_dir()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "unnamed".to_string());

    TargetsConfig {
        project: super::schema::ProjectConfig {
            name: project_name,
            version: "0.1.0".to_string(),
            source: PathBuf::from("Source"),
        },
        defaults: Default::default(),
        modules: Default::default(),
        targets: Default::default(),
        validate: ValidateConfig::default(),
    }
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut TargetsConfig, overrides: &CliOverrides) {
    if let Some(ref source) = overrides.source {
        config.project.source = source.clone();
    }

    if let Some(strict) = overrides.strict {
        config.validate.strict = strict;
    }

    if let Some(check_sources) = overrides.check_sources {
        config.validate.check_sources = check_sources;
    }
}

/// Build a target registry from a loaded configuration.
///
/// Targets declared in `[targets.*]` are registered as factories capturing
/// their config entry. A config with no target table falls back to the four
/// standard flavors.
pub fn registry_from_config(config: &TargetsConfig) -> Result<TargetRegistry, ConfigError> {
    if config.targets.is_empty() {
        return Ok(TargetRegistry::with_defaults());
    }

    let mut registry = TargetRegistry::new();
    // BTreeMap-backed registration order; iterate sorted for determinism
    let mut names: Vec<&String> = config.targets.keys().collect();
    names.sort();

    for name in names {
        let target = config.targets[name].clone();
        let config = config.clone();
        let key = name.clone();
        registry.register(
            name.clone(),
            Box::new(move |_ctx| config.build_descriptor(&key, &target)),
        )?;
    }

    Ok(registry)
}

/// Get the project root directory from a config file path.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{TargetContext, TargetType};
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("targets.toml");
        File::create(&config_path)
            .expect("should create config file")
            .write_all(b"[project]\nname = \"test\"")
            .expect("should write config content");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("targets.toml");
        File::create(&config_path)
            .expect("should create config file")
            .write_all(b"[project]\nname = \"test\"")
            .expect("should write config content");

        let subdir = temp.path().join("Source").join("test");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("targets.toml");
        File::create(&config_path)
            .expect("should create config file")
            .write_all(
                br#"
[project]
name = "sandbox0"
version = "2.0.0"

[targets.editor]
type = "editor"
"#,
            )
            .expect("should write config content");

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.project.name, "sandbox0");
        assert_eq!(config.project.version, "2.0.0");
        assert!(config.targets.contains_key("editor"));
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("nonexistent.toml");

        let result = load_config(Some(&config_path));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("targets.toml");
        File::create(&config_path)
            .expect("should create config file")
            .write_all(b"this is not valid toml {{{")
            .expect("should write invalid config");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_unknown_tag_is_parse_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("targets.toml");
        File::create(&config_path)
            .expect("should create config file")
            .write_all(
                br#"
[project]
name = "sandbox0"

[defaults]
include_order = "v99"
"#,
            )
            .expect("should write config");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("targets.toml");
        File::create(&config_path)
            .expect("should create config file")
            .write_all(b"[project]\nname = \"\"")
            .expect("should write invalid config");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = default_config();
        assert!(!config.validate.strict);

        let overrides = CliOverrides {
            source: Some(PathBuf::from("Src")),
            strict: Some(true),
            check_sources: Some(false),
            ..Default::default()
        };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.project.source, PathBuf::from("Src"));
        assert!(config.validate.strict);
        assert!(!config.validate.check_sources);
    }

    #[test]
    fn test_registry_from_empty_config_uses_defaults() {
        let config = default_config();
        let registry = registry_from_config(&config).unwrap();
        assert_eq!(registry.names(), vec!["client", "editor", "game", "server"]);
    }

    #[test]
    fn test_registry_from_config_targets() {
        let toml = r#"
[project]
name = "sandbox0"

[targets.editor]
type = "editor"
extra_modules = ["sandbox0_tools"]

[targets.dedicated]
type = "server"
"#;
        let config: TargetsConfig = toml::from_str(toml).unwrap();
        let registry = registry_from_config(&config).unwrap();

        assert_eq!(registry.names(), vec!["dedicated", "editor"]);

        let ctx = TargetContext::new("sandbox0");
        let editor = registry.resolve("editor", &ctx).unwrap();
        assert_eq!(editor.target_type, TargetType::Editor);
        assert_eq!(editor.modules, vec!["sandbox0", "sandbox0_tools"]);

        let dedicated = registry.resolve("dedicated", &ctx).unwrap();
        assert_eq!(dedicated.target_type, TargetType::Server);
        assert_eq!(dedicated.modules, vec!["sandbox0"]);
    }

    #[test]
    fn test_resolve_path_absolute() {
        let root = Path::new("/project");
        let absolute = Path::new("/other/path");
        assert_eq!(resolve_path(root, absolute), PathBuf::from("/other/path"));
    }

    #[test]
    fn test_resolve_path_relative() {
        let root = Path::new("/project");
        let relative = Path::new("Source");
        assert_eq!(resolve_path(root, relative), PathBuf::from("/project/Source"));
    }

    #[test]
    fn test_project_root() {
        let config_path = Path::new("/project/targets.toml");
        assert_eq!(project_root(config_path), Some(Path::new("/project")));
    }

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert!(!config.project.name.is_empty());
        assert_eq!(config.project.version, "0.1.0");
        assert_eq!(config.project.source, PathBuf::from("Source"));
        assert!(config.validate.check_sources);
    }
}
