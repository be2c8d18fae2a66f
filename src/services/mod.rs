//! Services module - the pack run itself.
//!
//! A run is strictly linear: list the skin folder, rename every matching file,
//! collect one [`AssetRecord`](crate::models::AssetRecord) per successful rename,
//! then write the manifest. Nothing here touches the console or global state;
//! all inputs are explicit parameters.
//!
//! # Components
//!
//! - [`fs`]: the [`AssetFs`] trait every disk operation goes through, with the
//!   `std::fs` backed [`StdFs`]
//! - [`naming`]: random (OS secure source) and sequential filename generation
//! - [`renamer`]: directory scan, extension filter, collision handling and the
//!   per-file rename loop, accumulating a [`RenameReport`]
//! - [`manifest`]: JSON rendering and writing of the [`Manifest`](crate::models::Manifest)
//! - [`pack`]: [`run_pack`], the single entry point tying the above together
//!
//! # Usage Example
//!
//! ```ignore
//! use skinpack::{ConfigManager, services::run_pack};
//!
//! let config = ConfigManager::new("config.json").load()?;
//! let summary = run_pack(&config)?;
//! println!("Finished with {} skins", summary.processed());
//! ```

pub mod fs;
pub mod manifest;
pub mod naming;
pub mod pack;
pub mod renamer;

pub use fs::{AssetFs, ListedEntry, StdFs};
pub use manifest::{to_json, write_manifest};
pub use naming::{ALPHABET, NameGenerator, random_stem};
pub use pack::{PackSummary, run_pack, run_pack_with};
pub use renamer::{MAX_NAME_ATTEMPTS, RenameFailure, RenameReport, matches_extension, rename_skins};
