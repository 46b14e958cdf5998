//! Configuration file round trips on disk

use landmapper_designer::{ControlPosition, Preset};
use landmapper_settings::{Config, ConfigError, SettingsError};
use tempfile::TempDir;

fn customised() -> Config {
    let mut config = Config::default();
    config.map.zoom = 7;
    config.fly_to.zoom = 17;
    config.fly_to.duration_secs = 1.25;
    config.draw.position = ControlPosition::TopRight;
    config.draw.draw_rectangle = false;
    config.style.fill_opacity = 0.5;
    config.presets.push(Preset::new("Pune", 18.5204, 73.8567));
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config = customised();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip_in_new_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("landmapper.json");

    let config = customised();
    config.save_to_file(&path).unwrap();
    assert!(path.exists());
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[fly_to]
zoom = 16
duration_secs = 3.0
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.fly_to.zoom, 16);
    assert_eq!(config.map, Config::default().map);
    assert!(config.presets.is_empty());
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[style]
color = "#22c55e"
fill_color = "#22c55e"
fill_opacity = 2.0
weight = 3
"##,
    )
    .unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::ValueOutOfRange { .. })
    ));
}

#[test]
fn test_save_refuses_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.map.base_layers.clear();
    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_missing_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        Config::load_or_default(Some(&path)),
        Err(SettingsError::LoadError(_))
    ));
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::JsonError(_))
    ));
}
