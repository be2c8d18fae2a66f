use rand::RngCore;

use crate::error::Result;
use crate::models::{Manifest, PackConfig};
use crate::services::fs::{AssetFs, StdFs};
use crate::services::manifest::write_manifest;
use crate::services::naming::NameGenerator;
use crate::services::renamer::{RenameFailure, rename_skins};

/// What a completed run produced.
#[derive(Debug)]
pub struct PackSummary {
    pub manifest: Manifest,
    pub failures: Vec<RenameFailure>,
}

impl PackSummary {
    /// Number of skins renamed and listed in the manifest
    pub fn processed(&self) -> usize {
        self.manifest.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Rename the skins on disk and write the manifest, using the real file system
/// and the OS random source.
pub fn run_pack(config: &PackConfig) -> Result<PackSummary> {
    let mut names = NameGenerator::from_config(config);
    run_pack_with(&StdFs, config, &mut names)
}

/// Run a pack against any file system and name generator.
///
/// The configuration is validated before anything is touched. Per-file rename
/// problems end up in [`PackSummary::failures`]; any other error ends the run,
/// leaving already-renamed files renamed and no manifest written.
pub fn run_pack_with<F, R>(
    fs: &F,
    config: &PackConfig,
    names: &mut NameGenerator<R>,
) -> Result<PackSummary>
where
    F: AssetFs + ?Sized,
    R: RngCore,
{
    config.validate()?;

    tracing::info!(
        "Building pack {:?} from {} ({:?} names)",
        config.name,
        config.skin_path,
        config.naming
    );

    let report = rename_skins(fs, config, names)?;
    let manifest = Manifest::new(report.records, &config.name);
    write_manifest(fs, &config.output_file, &manifest)?;

    Ok(PackSummary {
        manifest,
        failures: report.failures,
    })
}
