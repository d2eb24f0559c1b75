//! Working area staging.
//!
//! One build assembles its artifacts inside an isolated staging directory
//! keyed by the texture name. The directory is claimed atomically at
//! allocation, fully populated, then either archived or discarded; it is
//! never reused across builds and never merged with stale state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PackError;
use crate::layout;

/// A process-exclusive staging directory for one pack build.
///
/// Removal is unconditional: [`WorkingArea::remove`] on the success path,
/// and a best-effort `Drop` cleanup on every failure path.
#[derive(Debug)]
pub struct WorkingArea {
    root: PathBuf,
    removed: bool,
}

impl WorkingArea {
    /// Claim the staging directory for `name` under `staging_root`.
    ///
    /// The claim uses `create_dir`, so two concurrent builds of the same
    /// texture name cannot both hold the area: the loser gets
    /// [`PackError::StagingConflict`]. A leftover directory from a crashed
    /// build produces the same error and must be removed by the caller.
    pub fn allocate(staging_root: &Path, name: &str) -> Result<Self, PackError> {
        fs::create_dir_all(staging_root).map_err(|source| PackError::Staging {
            path: staging_root.to_path_buf(),
            source,
        })?;

        let root = staging_root.join(layout::staging_dirname(name));
        match fs::create_dir(&root) {
            Ok(()) => Ok(Self {
                root,
                removed: false,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(PackError::StagingConflict { path: root })
            }
            Err(source) => Err(PackError::Staging { path: root, source }),
        }
    }

    /// The staging directory root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write a file at an archive-relative path, creating parent
    /// directories as needed.
    pub fn write_file(&self, relative: &str, bytes: &[u8]) -> Result<PathBuf, PackError> {
        let dest = self.root.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| PackError::Staging {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&dest, bytes).map_err(|source| PackError::Staging {
            path: dest.clone(),
            source,
        })?;
        Ok(dest)
    }

    /// Whether a file exists at an archive-relative path.
    pub fn contains(&self, relative: &str) -> bool {
        self.root.join(relative).is_file()
    }

    /// Remove the staging directory, consuming the area.
    pub fn remove(mut self) -> Result<(), PackError> {
        self.removed = true;
        fs::remove_dir_all(&self.root).map_err(|source| PackError::Staging {
            path: self.root.clone(),
            source,
        })
    }
}

impl Drop for WorkingArea {
    fn drop(&mut self) {
        if !self.removed {
            // Failure-path cleanup; the error (if any) has already been
            // reported, so removal is best-effort here.
            let _ = fs::remove_dir_all(&self.root);
        }
    }
}
