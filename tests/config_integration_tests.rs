//! Integration tests for ConfigManager and configuration file handling
//!
//! These tests verify:
//! - Loading the existing `config.json` layout
//! - YAML configuration files
//! - Saving and reloading configurations
//! - Validation and parse failures

use camino::Utf8PathBuf;
use skinpack::models::CollisionPolicy;
use skinpack::{ConfigManager, NamingMode, PackConfig, PackError};
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_load_json_config() {
    let (_temp_dir, dir) = create_test_config_dir();
    let path = dir.join("config.json");
    fs::write(
        &path,
        r#"{
    "skinPath": "C:\\Packs\\skins",
    "outputFile": "skins.json",
    "name": "Winter Pack",
    "geometry": "geometry.humanoid.customSlim",
    "skinType": "free",
    "nameLength": 20
}"#,
    )
    .unwrap();

    let config = ConfigManager::new(&path).load().unwrap();

    assert_eq!(config.skin_path, Utf8PathBuf::from("C:\\Packs\\skins"));
    assert_eq!(config.output_file, Utf8PathBuf::from("skins.json"));
    assert_eq!(config.name, "Winter Pack");
    assert_eq!(config.geometry, "geometry.humanoid.customSlim");
    assert_eq!(config.skin_type, "free");
    assert_eq!(config.name_length, 20);
    assert_eq!(config.naming, NamingMode::Random);
    assert_eq!(config.collision_policy(), CollisionPolicy::Regenerate);
}

#[test]
fn test_load_yaml_config() {
    let (_temp_dir, dir) = create_test_config_dir();
    let path = dir.join("pack.yml");
    fs::write(
        &path,
        r#"
skinPath: skins
outputFile: out/skins.json
name: Summer Pack
geometry: geometry.humanoid.custom
skinType: paid
nameLength: 8
naming: sequential
extension: .jpg
onCollision: overwrite
"#,
    )
    .unwrap();

    let config = ConfigManager::new(&path).load().unwrap();

    assert_eq!(config.name, "Summer Pack");
    assert_eq!(config.skin_type, "paid");
    assert_eq!(config.naming, NamingMode::Sequential);
    assert_eq!(config.extension(), "jpg");
    assert_eq!(config.collision_policy(), CollisionPolicy::Overwrite);
}

#[test]
fn test_save_and_load_config() {
    let (_temp_dir, dir) = create_test_config_dir();
    let manager = ConfigManager::new(dir.join("config.json"));

    let config = PackConfig {
        name: "Saved Pack".to_string(),
        naming: NamingMode::Sequential,
        on_collision: Some(CollisionPolicy::Skip),
        ..PackConfig::default()
    };
    manager.save(&config).unwrap();

    let raw = fs::read_to_string(manager.config_path()).unwrap();
    assert!(raw.contains("\"skinPath\""));
    assert!(raw.contains("\"onCollision\": \"skip\""));

    assert_eq!(manager.load().unwrap(), config);
}

#[test]
fn test_missing_field_is_parse_error() {
    let (_temp_dir, dir) = create_test_config_dir();
    let path = dir.join("config.json");
    fs::write(&path, r#"{ "skinPath": "skins", "outputFile": "skins.json" }"#).unwrap();

    let err = ConfigManager::new(&path).load().unwrap_err();
    assert!(matches!(err, PackError::ConfigParse { .. }));
    assert!(err.to_string().contains("config.json"));
}

#[test]
fn test_unknown_naming_mode_is_parse_error() {
    let (_temp_dir, dir) = create_test_config_dir();
    let path = dir.join("config.json");
    let mut value = serde_json::to_value(PackConfig::default()).unwrap();
    value["naming"] = serde_json::json!("alphabetical");
    fs::write(&path, value.to_string()).unwrap();

    assert!(matches!(
        ConfigManager::new(&path).load(),
        Err(PackError::ConfigParse { .. })
    ));
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let (_temp_dir, dir) = create_test_config_dir();
    let manager = ConfigManager::new(dir.join("config.json"));

    let config = PackConfig {
        name_length: 0,
        ..PackConfig::default()
    };
    manager.save(&config).unwrap();

    assert!(matches!(
        manager.load(),
        Err(PackError::InvalidConfig(_))
    ));
}

#[test]
fn test_missing_config_file() {
    let (_temp_dir, dir) = create_test_config_dir();
    let manager = ConfigManager::new(dir.join("config.json"));

    assert!(!manager.exists());
    assert!(matches!(
        manager.load(),
        Err(PackError::ConfigRead { .. })
    ));
}
