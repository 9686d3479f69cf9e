use std::fs;
use std::path::Path;

use tempfile::TempDir;

use polybundle_core::config::{WorkspaceConfig, CONFIG_FILE};
use polybundle_core::error::Error;

#[test]
fn test_defaults_without_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = WorkspaceConfig::load(temp_dir.path()).unwrap();

    assert_eq!(config, WorkspaceConfig::default());
    assert_eq!(config.packages_dir, "packages");
    assert_eq!(config.dist_dir, "dist");
    assert_eq!(config.globals["react"], "React");
    assert_eq!(config.globals["@emotion/core"], "emotionCore");
    assert_eq!(
        config.packages_path(Path::new("/repo")),
        Path::new("/repo/packages")
    );
}

#[test]
fn test_parse_workspace_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE),
        r#"
[workspace]
packages_dir = "libs"
dist_dir = "build"

[workspace.globals]
react = "React"
"react-dom" = "ReactDOM"
"#,
    )
    .unwrap();

    let config = WorkspaceConfig::load(temp_dir.path()).unwrap();
    assert_eq!(config.packages_dir, "libs");
    assert_eq!(config.dist_dir, "build");
    assert_eq!(config.globals.len(), 2);
    assert_eq!(config.derive_options().globals, config.globals);
}

#[test]
fn test_partial_workspace_config() {
    let config = WorkspaceConfig::from_toml("[workspace]\ndist_dir = \"out\"\n").unwrap();
    assert_eq!(config.packages_dir, "packages");
    assert_eq!(config.dist_dir, "out");
    assert_eq!(config.globals.len(), 2);
}

#[test]
fn test_config_without_workspace_table() {
    let config = WorkspaceConfig::from_toml("[other]\nkey = 1\n").unwrap();
    assert_eq!(config, WorkspaceConfig::default());
}

#[test]
fn test_invalid_config() {
    let err = WorkspaceConfig::from_toml("[workspace\npackages_dir = ").unwrap_err();
    assert!(matches!(err, Error::Toml { .. }));
}
