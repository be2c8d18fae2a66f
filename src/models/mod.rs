//! Data models for SkinPack.
//!
//! - [`PackConfig`]: the run configuration loaded from `config.json` (or YAML)
//! - [`AssetRecord`]: one renamed skin as it appears in the manifest
//! - [`Manifest`]: the full record list plus the shared pack name
//!
//! Configuration is loaded once and passed by reference into the run. Records are
//! created once per renamed file and never mutated afterwards.

pub mod config;
pub mod manifest;

pub use config::{CollisionPolicy, NamingMode, PackConfig};
pub use manifest::{AssetRecord, Manifest};
