//! File-system access used by a pack run.
//!
//! Everything the run does to the disk goes through [`AssetFs`], so tests can
//! control listing order and make individual renames fail.

use camino::Utf8Path;
use std::fs;
use std::io;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub is_dir: bool,
}

impl ListedEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait AssetFs {
    /// Immediate entries of `dir`, in the order the file system returns them.
    fn list_dir(&self, dir: &Utf8Path) -> io::Result<Vec<ListedEntry>>;

    /// Whether anything, including a dangling symlink, occupies `path`.
    fn exists(&self, path: &Utf8Path) -> bool;

    fn rename(&self, from: &Utf8Path, to: &Utf8Path) -> io::Result<()>;

    /// Create or truncate `path` and write `contents` to it.
    fn write(&self, path: &Utf8Path, contents: &[u8]) -> io::Result<()>;
}

/// [`AssetFs`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl AssetFs for StdFs {
    fn list_dir(&self, dir: &Utf8Path) -> io::Result<Vec<ListedEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!("Skipping non UTF-8 file name {:?} in {}", raw, dir);
                    continue;
                }
            };
            // file_type() does not follow symlinks
            let is_dir = entry.file_type()?.is_dir();
            entries.push(ListedEntry { name, is_dir });
        }

        Ok(entries)
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn rename(&self, from: &Utf8Path, to: &Utf8Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn write(&self, path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}
