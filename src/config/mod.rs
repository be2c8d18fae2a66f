use crate::error::{PackError, Result};
use crate::models::PackConfig;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// On-disk format of a configuration file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml` and `.yml` are YAML; anything else is read as JSON.
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Configuration manager for loading and saving the skin pack configuration.
///
/// The file is `config.json` in the working directory unless told otherwise.
/// YAML files are accepted too.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Utf8PathBuf,
    format: ConfigFormat,
}

impl ConfigManager {
    /// Create a new ConfigManager for the given configuration file.
    ///
    /// The file does not have to exist yet.
    pub fn new<P: AsRef<Utf8Path>>(config_path: P) -> Self {
        let config_path = config_path.as_ref().to_path_buf();
        Self {
            format: ConfigFormat::from_path(&config_path),
            config_path,
        }
    }

    /// Load and validate the configuration.
    ///
    /// A missing file is an error; there are no implicit defaults for a run.
    pub fn load(&self) -> Result<PackConfig> {
        let file_contents =
            fs::read_to_string(&self.config_path).map_err(|source| PackError::ConfigRead {
                path: self.config_path.clone(),
                source,
            })?;

        let config = self.parse(&file_contents)?;
        config.validate()?;

        tracing::info!("Loaded config from {}", self.config_path);
        tracing::debug!(
            "Config: skin_path={}, output_file={}, naming={:?}, extension={}",
            config.skin_path,
            config.output_file,
            config.naming,
            config.extension()
        );
        Ok(config)
    }

    /// Save the configuration in the format matching the file extension.
    pub fn save(&self, config: &PackConfig) -> Result<()> {
        let contents = match self.format {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml_ng::to_string(config).map_err(|e| e.to_string()),
        }
        .map_err(|message| PackError::ConfigEncode {
            path: self.config_path.clone(),
            message,
        })?;

        fs::write(&self.config_path, contents).map_err(|source| PackError::ConfigWrite {
            path: self.config_path.clone(),
            source,
        })?;

        tracing::info!("Saved config to {}", self.config_path);
        Ok(())
    }

    fn parse(&self, contents: &str) -> Result<PackConfig> {
        let parsed: std::result::Result<PackConfig, String> = match self.format {
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml_ng::from_str(contents).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| PackError::ConfigParse {
            path: self.config_path.clone(),
            message,
        })
    }

    /// Whether the configuration file is present.
    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Get the configuration file path.
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}
