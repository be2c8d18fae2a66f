use camino::{Utf8Path, Utf8PathBuf};
use rand::RngCore;

use crate::error::{PackError, Result};
use crate::models::{AssetRecord, CollisionPolicy, PackConfig};
use crate::services::fs::AssetFs;
use crate::services::naming::NameGenerator;

/// Names tried per file under [`CollisionPolicy::Regenerate`] before giving up.
pub const MAX_NAME_ATTEMPTS: usize = 8;

/// Prefix of the temporary names used to move a waiting file out of the way.
const TEMP_PREFIX: &str = ".skinpack-";

/// A file that was left under its old name.
#[derive(Debug)]
pub struct RenameFailure {
    pub source: Utf8PathBuf,
    pub error: PackError,
}

/// Outcome of renaming every matching file in the skin folder.
///
/// `records` is in directory-listing order and numbered by successful renames
/// only, so a failure does not leave a gap in the labels.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub records: Vec<AssetRecord>,
    pub failures: Vec<RenameFailure>,
}

impl RenameReport {
    pub fn processed(&self) -> usize {
        self.records.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Whether `file_name` ends in `.{ext}` (case-sensitive).
///
/// Everything after the last dot counts, so a bare `.png` matches too.
pub fn matches_extension(file_name: &str, ext: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, found)| found == ext)
}

/// Rename every file in `config.skin_path` with the configured extension.
///
/// Only the immediate entries of the folder are considered and directories are
/// ignored. A file that cannot be renamed is logged, recorded in the report and
/// skipped. Listing the folder and drawing random names are the only fatal
/// failures; renames already done by then stay done.
///
/// A target held by a file that has not been processed yet is not a
/// collision: that file is moved aside to a temporary name and renamed from
/// there on its turn. Re-running sequential naming on a numbered folder
/// therefore keeps every skin.
pub fn rename_skins<F, R>(
    fs: &F,
    config: &PackConfig,
    names: &mut NameGenerator<R>,
) -> Result<RenameReport>
where
    F: AssetFs + ?Sized,
    R: RngCore,
{
    let dir = config.skin_path.as_path();
    let ext = config.extension();

    let mut candidates: Vec<String> = fs
        .list_dir(dir)
        .map_err(|source| PackError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?
        .into_iter()
        .filter(|entry| !entry.is_dir && matches_extension(&entry.name, ext))
        .map(|entry| entry.name)
        .collect();

    tracing::info!("Found {} .{} files in {}", candidates.len(), ext, dir);

    let policy = config.collision_policy();
    let mut report = RenameReport::default();

    for i in 0..candidates.len() {
        let (done, pending) = candidates.split_at_mut(i + 1);
        let file_name = done[i].as_str();
        let index = report.records.len() + 1;

        match rename_one(fs, dir, file_name, index, policy, pending, names) {
            Ok(new_name) => {
                tracing::debug!("Renamed {} -> {}", file_name, new_name);
                report
                    .records
                    .push(AssetRecord::new(index, new_name, config));
            }
            Err(error) if error.is_recoverable() => {
                let source = dir.join(file_name);
                tracing::error!("Skipping {}: {}", source, error);
                report.failures.push(RenameFailure { source, error });
            }
            Err(error) => return Err(error),
        }
    }

    if !report.failures.is_empty() {
        tracing::warn!("{} files could not be renamed", report.failed());
    }

    Ok(report)
}

fn rename_one<F, R>(
    fs: &F,
    dir: &Utf8Path,
    file_name: &str,
    index: usize,
    policy: CollisionPolicy,
    pending: &mut [String],
    names: &mut NameGenerator<R>,
) -> Result<String>
where
    F: AssetFs + ?Sized,
    R: RngCore,
{
    let new_name = choose_target(fs, dir, file_name, index, policy, pending, names)?;

    if let Some(blocker) = pending.iter_mut().find(|name| **name == new_name) {
        move_aside(fs, dir, blocker)?;
    }

    let source = dir.join(file_name);
    let target = dir.join(&new_name);
    fs.rename(&source, &target)
        .map_err(|err| PackError::Rename {
            from: source,
            to: target,
            source: err,
        })?;

    Ok(new_name)
}

fn choose_target<F, R>(
    fs: &F,
    dir: &Utf8Path,
    file_name: &str,
    index: usize,
    policy: CollisionPolicy,
    pending: &[String],
    names: &mut NameGenerator<R>,
) -> Result<String>
where
    F: AssetFs + ?Sized,
    R: RngCore,
{
    let attempts = if policy == CollisionPolicy::Regenerate && names.is_random() {
        MAX_NAME_ATTEMPTS
    } else {
        1
    };

    let mut attempt = 1;
    loop {
        let name = names.name_for(index)?;
        let target = dir.join(&name);

        // A file already carrying its target name is renamed onto itself
        if policy == CollisionPolicy::Overwrite
            || name == file_name
            || pending.contains(&name)
            || !fs.exists(&target)
        {
            return Ok(name);
        }
        if attempt >= attempts {
            return Err(PackError::TargetExists(target));
        }

        tracing::debug!(
            "{} already exists, drawing another name ({}/{})",
            target,
            attempt,
            attempts
        );
        attempt += 1;
    }
}

/// Move a file still waiting for its turn to a free temporary name and point
/// its candidate entry at the new name.
fn move_aside<F>(fs: &F, dir: &Utf8Path, waiting: &mut String) -> Result<()>
where
    F: AssetFs + ?Sized,
{
    let ext = waiting
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or_default();
    let mut n = 1;
    let parked = loop {
        let name = format!("{TEMP_PREFIX}{n}.{ext}");
        if !fs.exists(&dir.join(&name)) {
            break name;
        }
        n += 1;
    };

    let from = dir.join(waiting.as_str());
    let to = dir.join(&parked);
    fs.rename(&from, &to)
        .map_err(|source| PackError::Rename { from, to, source })?;

    tracing::debug!("Moved {} aside to {}", waiting, parked);
    *waiting = parked;
    Ok(())
}
