//! Project scaffolding command (init)

use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Starter targets.toml written by `sbx init`.
fn starter_config(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
version = "0.1.0"
source = "Source"

[defaults]
build_settings = "v5"
include_order = "v6"

[modules.{name}]
kind = "runtime"

[targets.editor]
type = "editor"

[targets.game]
type = "game"
"#
    )
}

/// Execute the init command: scaffold a targets.toml and the primary
/// module's source directory.
pub fn run_init(dir: &Path, name: Option<&str>, force: bool) -> ExitCode {
    let project_name = match name {
        Some(n) => n.to_string(),
        None => dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string()),
    };

    let config_path = dir.join("targets.toml");
    if config_path.exists() && !force {
        eprintln!(
            "Error: '{}' already exists (use --force to overwrite)",
            config_path.display()
        );
        return ExitCode::from(EXIT_ERROR);
    }

    let module_dir = dir.join("Source").join(&project_name);
    if let Err(e) = std::fs::create_dir_all(&module_dir) {
        eprintln!("Error: Cannot create '{}': {}", module_dir.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    if let Err(e) = std::fs::write(&config_path, starter_config(&project_name)) {
        eprintln!("Error: Cannot write '{}': {}", config_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Created {}", config_path.display());
    println!("Created {}/", module_dir.display());
    println!();
    println!("Next: sbx targets");

    ExitCode::from(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TargetsConfig;

    #[test]
    fn test_starter_config_parses() {
        let config: TargetsConfig = toml::from_str(&starter_config("sandbox0")).unwrap();
        assert_eq!(config.project.name, "sandbox0");
        assert!(config.targets.contains_key("editor"));
        assert!(config.targets.contains_key("game"));
        assert!(config.is_valid());
    }
}
