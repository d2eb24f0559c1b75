//! Archive writing with atomic publication.
//!
//! The staged tree is zipped to a temporary path in the output directory and
//! renamed to its final name only after the archive is complete, so the
//! final name never points at a truncated file even if the process dies
//! mid-write.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::PackError;
use crate::layout;

/// Suffix of the in-progress archive next to the final name.
const PARTIAL_SUFFIX: &str = ".partial";

/// Archive a staged tree into `<output_dir>/<name>.mcpack`.
///
/// Returns the final archive path. On failure the partial file is removed
/// and nothing exists at the final name (a pre-existing archive from an
/// earlier build is left untouched until the rename).
pub fn archive_tree(tree: &Path, output_dir: &Path, name: &str) -> Result<PathBuf, PackError> {
    fs::create_dir_all(output_dir).map_err(|source| PackError::Archive {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let final_path = output_dir.join(layout::archive_filename(name));
    let partial_path = output_dir.join(format!(
        "{}{}",
        layout::archive_filename(name),
        PARTIAL_SUFFIX
    ));

    if let Err(e) = write_zip(tree, &partial_path) {
        let _ = fs::remove_file(&partial_path);
        return Err(e);
    }

    if let Err(source) = fs::rename(&partial_path, &final_path) {
        let _ = fs::remove_file(&partial_path);
        return Err(PackError::Archive {
            path: final_path,
            source,
        });
    }

    Ok(final_path)
}

fn write_zip(tree: &Path, dest: &Path) -> Result<(), PackError> {
    let file = File::create(dest).map_err(|source| PackError::Archive {
        path: dest.to_path_buf(),
        source,
    })?;
    let mut zip = ZipWriter::new(BufWriter::new(file));

    // Fixed timestamp and deflate settings keep archives byte-identical for
    // identical staged content.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    for entry in WalkDir::new(tree).sort_by_file_name() {
        let entry = entry.map_err(|e| PackError::Archive {
            path: tree.to_path_buf(),
            source: io::Error::other(e),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = archive_entry_name(tree, entry.path())?;
        zip.start_file(relative, options.clone())?;

        let bytes = fs::read(entry.path()).map_err(|source| PackError::Archive {
            path: entry.path().to_path_buf(),
            source,
        })?;
        zip.write_all(&bytes).map_err(|source| PackError::Archive {
            path: dest.to_path_buf(),
            source,
        })?;
    }

    let mut inner = zip.finish()?;
    inner.flush().map_err(|source| PackError::Archive {
        path: dest.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Archive entry name for a staged file: relative to the tree root, with
/// forward slashes regardless of platform.
fn archive_entry_name(tree: &Path, path: &Path) -> Result<String, PackError> {
    let relative = path.strip_prefix(tree).map_err(|_| PackError::Archive {
        path: path.to_path_buf(),
        source: io::Error::other("staged file escaped the working area"),
    })?;

    let parts: Vec<&str> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();
    Ok(parts.join("/"))
}
