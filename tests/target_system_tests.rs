//! End-to-end tests for the target descriptor system:
//! targets.toml on disk -> config -> registry -> descriptor -> host validation.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use sandbox0::config::{load_config, registry_from_config};
use sandbox0::host::{validate_all, validate_descriptor};
use sandbox0::target::{
    BuildConfiguration, BuildSettingsVersion, IncludeOrderVersion, Platform, TargetContext,
    TargetDescriptor, TargetType,
};

fn write_project(dir: &Path, config: &str, modules: &[&str]) {
    fs::write(dir.join("targets.toml"), config).unwrap();
    for module in modules {
        let module_dir = dir.join("Source").join(module);
        fs::create_dir_all(&module_dir).unwrap();
        fs::write(module_dir.join("lib.cpp"), b"// module source\n").unwrap();
    }
}

const SANDBOX0_CONFIG: &str = r#"
[project]
name = "sandbox0"
version = "0.1.0"
source = "Source"

[defaults]
build_settings = "v5"
include_order = "v6"

[modules.sandbox0]
kind = "runtime"

[modules.sandbox0_tools]
kind = "editor"

[targets.editor]
type = "editor"
extra_modules = ["sandbox0_tools"]

[targets.game]
type = "game"
"#;

#[test]
fn config_to_descriptor_matches_direct_construction() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SANDBOX0_CONFIG, &["sandbox0", "sandbox0_tools"]);

    let config = load_config(Some(&temp.path().join("targets.toml"))).unwrap();
    let registry = registry_from_config(&config).unwrap();
    let ctx = TargetContext::new("sandbox0");

    let from_config = registry.resolve("game", &ctx).unwrap();
    let direct = TargetDescriptor::game(&ctx)
        .with_build_settings(BuildSettingsVersion::V5)
        .with_include_order(IncludeOrderVersion::V6);

    assert_eq!(from_config, direct);
}

#[test]
fn descriptor_always_carries_primary_module() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SANDBOX0_CONFIG, &["sandbox0", "sandbox0_tools"]);

    let config = load_config(Some(&temp.path().join("targets.toml"))).unwrap();
    let registry = registry_from_config(&config).unwrap();
    let ctx = TargetContext::new("sandbox0");

    for name in registry.names() {
        let desc = registry.resolve(name, &ctx).unwrap();
        assert!(!desc.modules.is_empty());
        assert_eq!(desc.primary_module(), "sandbox0");
    }
}

#[test]
fn repeated_resolution_is_field_for_field_identical() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SANDBOX0_CONFIG, &["sandbox0", "sandbox0_tools"]);

    let config = load_config(Some(&temp.path().join("targets.toml"))).unwrap();
    let registry = registry_from_config(&config).unwrap();
    let ctx = TargetContext::new("sandbox0")
        .with_platform(Platform::Linux)
        .with_configuration(BuildConfiguration::Debug);

    let first = registry.resolve("editor", &ctx).unwrap();
    let second = registry.resolve("editor", &ctx).unwrap();
    assert_eq!(first, second);
}

#[test]
fn serialized_descriptor_round_trips() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SANDBOX0_CONFIG, &["sandbox0", "sandbox0_tools"]);

    let config = load_config(Some(&temp.path().join("targets.toml"))).unwrap();
    let registry = registry_from_config(&config).unwrap();
    let ctx = TargetContext::new("sandbox0");

    let desc = registry.resolve("editor", &ctx).unwrap();
    let json = serde_json::to_string(&desc).unwrap();
    let back: TargetDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(desc, back);
}

#[test]
fn full_project_validates_clean() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SANDBOX0_CONFIG, &["sandbox0", "sandbox0_tools"]);

    let config = load_config(Some(&temp.path().join("targets.toml"))).unwrap();
    let ctx = TargetContext::new("sandbox0");
    let source_root = temp.path().join("Source");

    let reports = validate_all(&config, &ctx, Some(&source_root));
    assert_eq!(reports.len(), 2);
    for report in &reports {
        assert!(report.passed(true), "{}: {:?}", report.target_id, report.issues);
    }
}

#[test]
fn missing_module_sources_fail_validation() {
    let temp = TempDir::new().unwrap();
    // sandbox0_tools declared but never given a source directory
    write_project(temp.path(), SANDBOX0_CONFIG, &["sandbox0"]);

    let config = load_config(Some(&temp.path().join("targets.toml"))).unwrap();
    let ctx = TargetContext::new("sandbox0");
    let source_root = temp.path().join("Source");

    let reports = validate_all(&config, &ctx, Some(&source_root));
    let editor = reports.iter().find(|r| r.target_id == "editor:editor").unwrap();
    assert!(editor.error_count() > 0);

    // The game target never links the tools module, so it still passes
    let game = reports.iter().find(|r| r.target_id == "game:game").unwrap();
    assert_eq!(game.error_count(), 0);
}

#[test]
fn editor_target_rejected_for_mobile_and_shipping() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), SANDBOX0_CONFIG, &["sandbox0", "sandbox0_tools"]);

    let config = load_config(Some(&temp.path().join("targets.toml"))).unwrap();
    let desc = config.build_descriptor("editor", &config.targets["editor"]);

    let android = TargetContext::new("sandbox0").with_platform(Platform::Android);
    let report = validate_descriptor(&desc, &config, &android, None);
    assert!(report.error_count() > 0);

    let shipping =
        TargetContext::new("sandbox0").with_configuration(BuildConfiguration::Shipping);
    let report = validate_descriptor(&desc, &config, &shipping, None);
    assert!(report.error_count() > 0);

    let desktop = TargetContext::new("sandbox0");
    let report = validate_descriptor(&desc, &config, &desktop, None);
    assert_eq!(report.error_count(), 0);
}

#[test]
fn config_without_targets_falls_back_to_standard_flavors() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), "[project]\nname = \"sandbox0\"\n", &["sandbox0"]);

    let config = load_config(Some(&temp.path().join("targets.toml"))).unwrap();
    let registry = registry_from_config(&config).unwrap();

    assert_eq!(registry.names(), vec!["client", "editor", "game", "server"]);

    let ctx = TargetContext::new(config.project.name.clone());
    let editor = registry.resolve("editor", &ctx).unwrap();
    assert_eq!(editor.target_type, TargetType::Editor);
    assert_eq!(editor.modules, vec!["sandbox0".to_string()]);
}

#[test]
fn unrecognized_tags_are_rejected_at_load_time() {
    let temp = TempDir::new().unwrap();
    let bad = r#"
[project]
name = "sandbox0"

[targets.editor]
type = "editor"
build_settings = "v99"
"#;
    fs::write(temp.path().join("targets.toml"), bad).unwrap();

    assert!(load_config(Some(&temp.path().join("targets.toml"))).is_err());
}
