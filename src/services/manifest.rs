use camino::Utf8Path;

use crate::error::{PackError, Result};
use crate::models::Manifest;
use crate::services::fs::AssetFs;

/// Render the manifest as JSON indented with two spaces.
///
/// Field order comes from the model definitions, so the output is stable.
pub fn to_json(manifest: &Manifest) -> Result<String> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Serialize the manifest and write it to `path`, replacing any existing file.
pub fn write_manifest<F>(fs: &F, path: &Utf8Path, manifest: &Manifest) -> Result<()>
where
    F: AssetFs + ?Sized,
{
    let json = to_json(manifest)?;

    fs.write(path, json.as_bytes())
        .map_err(|source| PackError::ManifestWrite {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Wrote manifest with {} skins to {}", manifest.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetRecord, PackConfig};
    use crate::services::fs::MockAssetFs;
    use std::io;

    fn sample_manifest() -> Manifest {
        let config = PackConfig {
            name: "Test Pack".to_string(),
            ..PackConfig::default()
        };
        Manifest::new(
            vec![
                AssetRecord::new(1, "Ab3.png", &config),
                AssetRecord::new(2, "x9Z.png", &config),
            ],
            &config.name,
        )
    }

    #[test]
    fn test_manifest_json_layout() {
        let json = to_json(&sample_manifest()).unwrap();

        let expected = r#"{
  "skins": [
    {
      "localization_name": "Skin 1",
      "geometry": "geometry.humanoid.custom",
      "texture": "Ab3.png",
      "type": "free"
    },
    {
      "localization_name": "Skin 2",
      "geometry": "geometry.humanoid.custom",
      "texture": "x9Z.png",
      "type": "free"
    }
  ],
  "serialize_name": "Test Pack",
  "localization_name": "Test Pack"
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_manifest_has_empty_list() {
        let json = to_json(&Manifest::new(Vec::new(), "Empty")).unwrap();
        assert!(json.contains("\"skins\": []"));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let manifest = sample_manifest();
        assert_eq!(to_json(&manifest).unwrap(), to_json(&manifest).unwrap());
    }

    #[test]
    fn test_write_error_is_reported() {
        let mut fs = MockAssetFs::new();
        fs.expect_write()
            .returning(|_, _| Err(io::Error::from(io::ErrorKind::PermissionDenied)));

        let err = write_manifest(&fs, Utf8Path::new("out/skins.json"), &sample_manifest())
            .unwrap_err();
        assert!(matches!(err, PackError::ManifestWrite { .. }));
    }
}
