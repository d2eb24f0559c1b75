//! Pack build orchestration.
//!
//! Runs one full build: synthesize material maps, compose the combined
//! channel image, encode images and descriptors, stage everything in an
//! isolated working area, validate completeness, and archive with atomic
//! publication. The working area is removed on every exit path.

use std::env;
use std::path::PathBuf;

use serde::Serialize;

use terrapack_raster::SampleGrid;
use terrapack_texture::{compose_mer, png, synthesize, PngConfig, ScalarGrid, SynthesisConfig};

use crate::archive;
use crate::descriptor::{PackManifest, TextureSet};
use crate::error::PackError;
use crate::ids::IdSource;
use crate::layout;
use crate::name::validate_texture_name;
use crate::staging::WorkingArea;

/// Options for one pack build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory receiving the final archive; created if missing.
    pub output_dir: PathBuf,
    /// Root under which working areas are claimed.
    pub staging_root: PathBuf,
    /// Material synthesis configuration.
    pub synthesis: SynthesisConfig,
    /// PNG encoding configuration.
    pub png: PngConfig,
    /// Optional emissive grid; absent means no emission.
    pub emissive: Option<ScalarGrid>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output_mcpacks"),
            staging_root: env::temp_dir(),
            synthesis: SynthesisConfig::default(),
            png: PngConfig::default(),
            emissive: None,
        }
    }
}

/// One entry written into the archive.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveEntry {
    /// Archive-relative path.
    pub path: String,
    /// BLAKE3 hash of the entry's bytes.
    pub hash: String,
}

/// Result of a successful build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    /// Path of the published archive.
    pub archive_path: PathBuf,
    /// The archive's entries with content hashes.
    pub entries: Vec<ArchiveEntry>,
}

/// Confirm that every artifact the texture set references is staged.
pub fn verify_staged(area: &WorkingArea, texture_set: &TextureSet) -> Result<(), PackError> {
    for referenced in texture_set.referenced_paths() {
        if !area.contains(referenced) {
            return Err(PackError::IncompleteArtifactSet {
                path: referenced.to_string(),
            });
        }
    }
    Ok(())
}

/// Run one full pack build for `name` from `grid`.
///
/// On success the archive exists at the returned path and the staging area
/// is gone. On failure the staging area is also gone and nothing exists at
/// the final archive name.
pub fn build_pack(
    grid: &SampleGrid,
    name: &str,
    ids: &mut dyn IdSource,
    options: &BuildOptions,
) -> Result<BuildOutcome, PackError> {
    validate_texture_name(name)?;

    // Synthesize and encode everything before touching the filesystem.
    let maps = synthesize(grid, &options.synthesis)?;
    let mer = compose_mer(&maps.metalness, options.emissive.as_ref(), &maps.roughness)?;

    let (albedo_png, albedo_hash) = png::write_rgb_to_vec_with_hash(&maps.albedo, &options.png)?;
    let (mer_png, mer_hash) = png::write_rgb_to_vec_with_hash(&mer, &options.png)?;

    let manifest = PackManifest::for_texture(name, ids);
    let texture_set = TextureSet::for_texture(name);
    let manifest_json = serde_json::to_vec_pretty(&manifest)?;
    let texture_set_json = serde_json::to_vec_pretty(&texture_set)?;

    // Allocated: failures from here on drop the area, which removes it.
    let area = WorkingArea::allocate(&options.staging_root, name)?;

    // Populated
    let albedo_rel = layout::texture_path(&layout::albedo_filename(name));
    let mer_rel = layout::texture_path(&layout::mer_filename(name));
    let texture_set_rel = layout::texture_path(&layout::texture_set_filename(name));

    area.write_file(layout::MANIFEST_FILENAME, &manifest_json)?;
    area.write_file(&albedo_rel, &albedo_png)?;
    area.write_file(&mer_rel, &mer_png)?;
    area.write_file(&texture_set_rel, &texture_set_json)?;

    // Validated
    verify_staged(&area, &texture_set)?;

    // Archived
    let archive_path = archive::archive_tree(area.path(), &options.output_dir, name)?;

    // CleanedUp
    area.remove()?;

    let entries = vec![
        ArchiveEntry {
            path: layout::MANIFEST_FILENAME.to_string(),
            hash: blake3::hash(&manifest_json).to_hex().to_string(),
        },
        ArchiveEntry {
            path: albedo_rel,
            hash: albedo_hash,
        },
        ArchiveEntry {
            path: mer_rel,
            hash: mer_hash,
        },
        ArchiveEntry {
            path: texture_set_rel,
            hash: blake3::hash(&texture_set_json).to_hex().to_string(),
        },
    ];

    Ok(BuildOutcome {
        archive_path,
        entries,
    })
}
