use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

/// How new filenames are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NamingMode {
    /// Fixed-length alphanumeric names from the OS secure random source
    #[default]
    Random,
    /// `1.png`, `2.png`, ... in processing order
    Sequential,
}

/// What to do when the generated name is already taken in the skin folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Rename anyway, replacing the existing file
    Overwrite,
    /// Leave the file alone and report it
    Skip,
    /// Draw another random name (random mode only)
    Regenerate,
}

/// Skin pack configuration, usually loaded from `config.json`.
///
/// Field names follow the camelCase keys of the existing config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackConfig {
    #[serde(rename = "skinPath")]
    pub skin_path: Utf8PathBuf,

    #[serde(rename = "outputFile")]
    pub output_file: Utf8PathBuf,

    /// Pack name, written to both `serialize_name` and `localization_name`
    pub name: String,

    pub geometry: String,

    #[serde(rename = "skinType")]
    pub skin_type: String,

    #[serde(rename = "nameLength")]
    pub name_length: usize,

    #[serde(default)]
    pub naming: NamingMode,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(
        rename = "onCollision",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub on_collision: Option<CollisionPolicy>,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            skin_path: Utf8PathBuf::from("skins"),
            output_file: Utf8PathBuf::from("skins.json"),
            name: "Custom Skins".to_string(),
            geometry: "geometry.humanoid.custom".to_string(),
            skin_type: "free".to_string(),
            name_length: 16,
            naming: NamingMode::Random,
            extension: default_extension(),
            on_collision: None,
        }
    }
}

fn default_extension() -> String {
    "png".to_string()
}

impl PackConfig {
    /// Extension without any leading dot, e.g. `png`
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Collision policy in effect, falling back to the naming mode's default.
    pub fn collision_policy(&self) -> CollisionPolicy {
        self.on_collision.unwrap_or(match self.naming {
            NamingMode::Random => CollisionPolicy::Regenerate,
            NamingMode::Sequential => CollisionPolicy::Skip,
        })
    }

    /// Check the settings a run depends on before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.skin_path.as_str().is_empty() {
            return Err(PackError::InvalidConfig("skinPath is empty".to_string()));
        }
        if self.output_file.as_str().is_empty() {
            return Err(PackError::InvalidConfig("outputFile is empty".to_string()));
        }

        let ext = self.extension();
        if ext.is_empty() {
            return Err(PackError::InvalidConfig("extension is empty".to_string()));
        }
        if ext.contains(['.', '/', '\\']) {
            return Err(PackError::InvalidConfig(format!(
                "extension {:?} must be a single plain extension",
                self.extension
            )));
        }

        if self.naming == NamingMode::Random && self.name_length == 0 {
            return Err(PackError::InvalidConfig(
                "nameLength must be at least 1 for random naming".to_string(),
            ));
        }
        if self.naming == NamingMode::Sequential
            && self.on_collision == Some(CollisionPolicy::Regenerate)
        {
            return Err(PackError::InvalidConfig(
                "onCollision \"regenerate\" requires random naming".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_config_defaults() {
        let config = PackConfig::default();
        assert_eq!(config.name_length, 16);
        assert_eq!(config.extension(), "png");
        assert_eq!(config.naming, NamingMode::Random);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_collision_policy_follows_naming() {
        let mut config = PackConfig::default();
        assert_eq!(config.collision_policy(), CollisionPolicy::Regenerate);

        config.naming = NamingMode::Sequential;
        assert_eq!(config.collision_policy(), CollisionPolicy::Skip);

        config.on_collision = Some(CollisionPolicy::Overwrite);
        assert_eq!(config.collision_policy(), CollisionPolicy::Overwrite);
    }

    #[test]
    fn test_extension_leading_dot_is_ignored() {
        let config = PackConfig {
            extension: ".png".to_string(),
            ..PackConfig::default()
        };
        assert_eq!(config.extension(), "png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_length_random_names() {
        let config = PackConfig {
            name_length: 0,
            ..PackConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PackError::InvalidConfig(_))
        ));

        // Sequential names ignore the length
        let config = PackConfig {
            name_length: 0,
            naming: NamingMode::Sequential,
            ..PackConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_extensions() {
        for ext in ["", ".", "tar.gz", "a/b"] {
            let config = PackConfig {
                extension: ext.to_string(),
                ..PackConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {:?}", ext);
        }
    }

    #[test]
    fn test_validate_rejects_sequential_regenerate() {
        let config = PackConfig {
            naming: NamingMode::Sequential,
            on_collision: Some(CollisionPolicy::Regenerate),
            ..PackConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_camel_case_config_keys() {
        let json = r#"{
            "skinPath": "./skins",
            "outputFile": "skins.json",
            "name": "Pack",
            "geometry": "geometry.humanoid.customSlim",
            "skinType": "paid",
            "nameLength": 8
        }"#;
        let config: PackConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.skin_path, Utf8PathBuf::from("./skins"));
        assert_eq!(config.skin_type, "paid");
        assert_eq!(config.name_length, 8);
        assert_eq!(config.naming, NamingMode::Random);
        assert_eq!(config.extension, "png");
        assert_eq!(config.on_collision, None);
    }
}
