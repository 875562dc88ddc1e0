//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use penrose120::config::AppConfig;
use serial_test::serial;
use std::path::Path;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("P120_TILING__LINE_COUNT", "3");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.tiling.line_count, 3);
    std::env::remove_var("P120_TILING__LINE_COUNT");
}

#[test]
#[serial]
fn test_nested_env_override() {
    std::env::set_var("P120_OUTPUT__RENDER", "false");
    std::env::set_var("P120_POLYTOPE__POLE", "3.5");
    let config = AppConfig::load().unwrap();
    assert!(!config.output.render);
    assert_eq!(config.polytope.pole, 3.5);
    std::env::remove_var("P120_OUTPUT__RENDER");
    std::env::remove_var("P120_POLYTOPE__POLE");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("P120_TILING__LINE_COUNT");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let loaded = AppConfig::load_from(cwd.join("config")).unwrap();
    let builtin = AppConfig::default();
    assert_eq!(loaded.tiling.line_count, builtin.tiling.line_count);
    assert_eq!(loaded.surfaces.left_wall.rotate, builtin.surfaces.left_wall.rotate);
    assert_eq!(loaded.polytope.edge_finish, builtin.polytope.edge_finish);
    assert_eq!(loaded.polytope.media, builtin.polytope.media);
    assert_eq!(loaded.lights.len(), 2);
    assert_eq!(loaded.output.includes, builtin.output.includes);
}

#[test]
#[serial]
fn test_missing_config_dir_uses_defaults() {
    let dir = std::env::temp_dir().join("penrose120-no-such-config");
    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.tiling.line_count, 15);
    assert_eq!(config.camera.location, [0.0, 60.0, -100.0]);
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = std::env::temp_dir().join("penrose120-config-test");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[tiling]\nline_count = 7\nseed = 1\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[tiling]\nline_count = 2\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.tiling.line_count, 2);
    assert_eq!(config.tiling.seed, Some(1));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_invalid_value_is_config_error() {
    std::env::set_var("P120_OUTPUT__WIDTH", "wide");
    let result = AppConfig::load();
    std::env::remove_var("P120_OUTPUT__WIDTH");
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_antialiasing_disabled_from_file() {
    let dir = std::env::temp_dir().join("penrose120-no-aa-config");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[output]\nwidth = 320\nantialias = false\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.output.width, 320);
    let args = config
        .output
        .renderer()
        .arguments(Path::new("scene.pov"), Path::new("scene.png"));
    assert!(args.contains(&"+W320".to_string()));
    assert!(!args.iter().any(|a| a.starts_with("+A")));
}

#[test]
#[serial]
fn test_antialiasing_disabled_from_env() {
    std::env::set_var("P120_OUTPUT__ANTIALIAS", "false");
    let config = AppConfig::load();
    std::env::remove_var("P120_OUTPUT__ANTIALIAS");

    let renderer = config.unwrap().output.renderer();
    assert_eq!(renderer.antialiasing, None);
}

#[test]
#[serial]
fn test_antialiasing_threshold_from_file() {
    let dir = std::env::temp_dir().join("penrose120-aa-threshold-config");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[output]\nantialiasing = 0.3\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    let args = config
        .output
        .renderer()
        .arguments(Path::new("scene.pov"), Path::new("scene.png"));
    assert!(args.contains(&"+A0.3".to_string()));
}
