use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while building a skin pack.
///
/// Only [`PackError::Rename`] and [`PackError::TargetExists`] are recoverable:
/// the renamer records them against the offending file and moves on. Every
/// other variant stops the run.
#[derive(Error, Debug)]
pub enum PackError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: Utf8PathBuf, message: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Failed to encode config {path}: {message}")]
    ConfigEncode { path: Utf8PathBuf, message: String },

    #[error("Failed to write config {path}: {source}")]
    ConfigWrite {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename {from} to {to}: {source}")]
    Rename {
        from: Utf8PathBuf,
        to: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Target {0} already exists")]
    TargetExists(Utf8PathBuf),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write manifest {path}: {source}")]
    ManifestWrite {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Secure random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),
}

impl PackError {
    /// Whether the renamer may skip the current file and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Rename { .. } | Self::TargetExists(_))
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
