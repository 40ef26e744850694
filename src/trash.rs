//! Trash store.
//!
//! `rm` never erases anything: entries are relocated into a configured trash
//! directory. Each relocation picks a name that does not collide with an
//! earlier one and writes a JSON sidecar recording where the entry came from
//! and when it was trashed, so a future restore knows where to put it back.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fsops;

/// Extension of the sidecar written next to every trashed entry.
pub const RECORD_EXTENSION: &str = "trashinfo";

/// Sidecar metadata for one trashed entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashRecord {
    /// Absolute path the entry was trashed from.
    pub original_path: PathBuf,
    /// When the entry was trashed.
    pub deleted_at: DateTime<Utc>,
}

/// A trash directory entries are relocated into instead of being deleted.
#[derive(Debug, Clone)]
pub struct Trash {
    root: PathBuf,
}

impl Trash {
    /// Create a trash store rooted at the given directory.
    ///
    /// The directory is created lazily on first use.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The trash directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relocate `path` (file or directory) into the trash.
    ///
    /// Returns the path the entry now lives at. The entry keeps its base
    /// name when possible; colliding names get a `~N` suffix.
    pub fn put(&self, path: &Path) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;

        // Resolve the origin before the entry disappears from it.
        let original_path = path.canonicalize()?;

        let name = fsops::base_name(path)?;
        let target = self.unique_target(&name.to_string_lossy());
        fsops::move_path(path, &target)?;

        let record = TrashRecord {
            original_path,
            deleted_at: Utc::now(),
        };
        let encoded = serde_json::to_vec_pretty(&record).map_err(anyhow::Error::from)?;
        fs::write(record_path(&target), encoded)?;

        Ok(target)
    }

    /// First name under the trash root that collides with neither an
    /// existing entry nor an existing sidecar.
    fn unique_target(&self, name: &str) -> PathBuf {
        let mut candidate = self.root.join(name);
        let mut attempt = 1;
        while candidate.exists() || record_path(&candidate).exists() {
            candidate = self.root.join(format!("{name}~{attempt}"));
            attempt += 1;
        }
        candidate
    }
}

/// Path of the sidecar belonging to a trashed entry.
pub fn record_path(entry: &Path) -> PathBuf {
    let name = fsops::display_name(entry);
    entry.with_file_name(format!("{name}.{RECORD_EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn trash_in(temp: &TempDir) -> Trash {
        Trash::new(temp.path().join(".trash"))
    }

    #[test]
    fn put_relocates_file_into_trash() {
        let temp = TempDir::new().unwrap();
        let trash = trash_in(&temp);
        let file = temp.path().join("a.txt");
        fs::write(&file, "contents").unwrap();

        let target = trash.put(&file).unwrap();

        assert!(!file.exists());
        assert_eq!(target, trash.root().join("a.txt"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "contents");
    }

    #[test]
    fn put_writes_sidecar_with_origin() {
        let temp = TempDir::new().unwrap();
        let trash = trash_in(&temp);
        let file = temp.path().join("a.txt");
        fs::write(&file, "").unwrap();

        let target = trash.put(&file).unwrap();

        let sidecar = record_path(&target);
        assert!(sidecar.exists());
        let record: TrashRecord =
            serde_json::from_slice(&fs::read(&sidecar).unwrap()).unwrap();
        assert_eq!(record.original_path.file_name().unwrap(), "a.txt");
    }

    #[test]
    fn colliding_names_get_numeric_suffixes() {
        let temp = TempDir::new().unwrap();
        let trash = trash_in(&temp);

        for expected in ["a.txt", "a.txt~1", "a.txt~2"] {
            let file = temp.path().join("a.txt");
            fs::write(&file, "").unwrap();
            let target = trash.put(&file).unwrap();
            assert_eq!(target, trash.root().join(expected));
        }
    }

    #[test]
    fn put_relocates_directories_with_contents() {
        let temp = TempDir::new().unwrap();
        let trash = trash_in(&temp);
        let dir = temp.path().join("somedir");
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("sub/f.txt"), "x").unwrap();

        let target = trash.put(&dir).unwrap();

        assert!(!dir.exists());
        assert!(target.join("sub/f.txt").exists());
    }
}
