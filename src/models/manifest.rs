use serde::{Deserialize, Serialize};

use crate::models::PackConfig;

/// One skin entry in the pack manifest.
///
/// Field order is the serialized order and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub localization_name: String,
    pub geometry: String,
    /// Filename of the renamed texture, relative to the skin folder
    pub texture: String,
    #[serde(rename = "type")]
    pub skin_type: String,
}

impl AssetRecord {
    /// Build the record for the `index`th (1-based) renamed skin.
    pub fn new(index: usize, texture: impl Into<String>, config: &PackConfig) -> Self {
        Self {
            localization_name: format!("Skin {}", index),
            geometry: config.geometry.clone(),
            texture: texture.into(),
            skin_type: config.skin_type.clone(),
        }
    }
}

/// The skin pack manifest written to `outputFile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub skins: Vec<AssetRecord>,
    pub serialize_name: String,
    pub localization_name: String,
}

impl Manifest {
    /// Both top-level names carry the pack name.
    pub fn new(skins: Vec<AssetRecord>, name: &str) -> Self {
        Self {
            skins,
            serialize_name: name.to_string(),
            localization_name: name.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.skins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_record_from_config() {
        let config = PackConfig::default();
        let record = AssetRecord::new(3, "abc.png", &config);

        assert_eq!(record.localization_name, "Skin 3");
        assert_eq!(record.geometry, "geometry.humanoid.custom");
        assert_eq!(record.texture, "abc.png");
        assert_eq!(record.skin_type, "free");
    }

    #[test]
    fn test_manifest_duplicates_name() {
        let manifest = Manifest::new(Vec::new(), "My Pack");
        assert_eq!(manifest.serialize_name, "My Pack");
        assert_eq!(manifest.localization_name, "My Pack");
        assert!(manifest.is_empty());
    }
}
