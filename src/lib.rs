// SkinPack - rename a folder of skin textures and build the pack manifest
//
// This is the library crate containing the core logic and data structures.
// The binary crate (main.rs) provides the command-line entry point.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use error::PackError;
pub use models::{AssetRecord, Manifest, NamingMode, PackConfig};
pub use services::{PackSummary, run_pack};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
