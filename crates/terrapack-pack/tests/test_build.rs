//! End-to-end pack build tests.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use tempfile::TempDir;

use terrapack_pack::{
    build_pack, BuildOptions, PackError, PackManifest, PinnedIds, RandomIds,
};
use terrapack_raster::SampleGrid;

fn sample_grid() -> SampleGrid {
    let data = (0..64).map(|i| i as f64).collect();
    SampleGrid::new(8, 8, data, None).unwrap()
}

fn options(staging: &TempDir, out: &TempDir) -> BuildOptions {
    BuildOptions {
        output_dir: out.path().to_path_buf(),
        staging_root: staging.path().to_path_buf(),
        ..BuildOptions::default()
    }
}

fn archive_names(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

fn manifest_from_archive(path: &Path) -> PackManifest {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut entry = archive.by_name("manifest.json").unwrap();
    let mut json = String::new();
    entry.read_to_string(&mut json).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_build_produces_exactly_four_entries() {
    let staging = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let outcome = build_pack(
        &sample_grid(),
        "basalt",
        &mut RandomIds,
        &options(&staging, &out),
    )
    .unwrap();

    assert_eq!(outcome.archive_path, out.path().join("basalt.mcpack"));
    assert!(outcome.archive_path.is_file());

    let names = archive_names(&outcome.archive_path);
    assert_eq!(
        names,
        vec![
            "manifest.json",
            "textures/blocks/basalt.texture_set.json",
            "textures/blocks/basalt_albedo.png",
            "textures/blocks/basalt_mer.png",
        ]
    );

    assert_eq!(outcome.entries.len(), 4);
    for entry in &outcome.entries {
        assert!(names.contains(&entry.path), "unreported entry {}", entry.path);
        assert!(!entry.hash.is_empty());
    }
}

#[test]
fn test_staging_area_removed_after_success() {
    let staging = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    build_pack(
        &sample_grid(),
        "basalt",
        &mut RandomIds,
        &options(&staging, &out),
    )
    .unwrap();

    assert!(!staging.path().join("basalt_pack").exists());
}

#[test]
fn test_staging_area_removed_after_failure() {
    let staging = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    // Occupy the final archive's partial path with a directory so the
    // archive write fails after staging is fully populated.
    fs::create_dir(out.path().join("basalt.mcpack.partial")).unwrap();

    let err = build_pack(
        &sample_grid(),
        "basalt",
        &mut RandomIds,
        &options(&staging, &out),
    )
    .unwrap_err();

    assert!(matches!(err, PackError::Archive { .. }));
    assert!(!staging.path().join("basalt_pack").exists());
    assert!(!out.path().join("basalt.mcpack").exists());
}

#[test]
fn test_staging_conflict_rejected_and_untouched() {
    let staging = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let stale = staging.path().join("basalt_pack");
    fs::create_dir(&stale).unwrap();
    fs::write(stale.join("leftover.txt"), b"old").unwrap();

    let err = build_pack(
        &sample_grid(),
        "basalt",
        &mut RandomIds,
        &options(&staging, &out),
    )
    .unwrap_err();

    assert!(matches!(err, PackError::StagingConflict { .. }));
    assert!(stale.join("leftover.txt").exists());
    assert!(!out.path().join("basalt.mcpack").exists());
}

#[test]
fn test_invalid_name_fails_before_any_io() {
    let staging = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let err = build_pack(
        &sample_grid(),
        "../escape",
        &mut RandomIds,
        &options(&staging, &out),
    )
    .unwrap_err();

    assert!(matches!(err, PackError::InvalidName { .. }));
    assert!(fs::read_dir(out.path()).unwrap().next().is_none());
}

#[test]
fn test_rebuilds_generate_fresh_identifiers() {
    let staging = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let opts = options(&staging, &out);

    let first = build_pack(&sample_grid(), "basalt", &mut RandomIds, &opts).unwrap();
    let first_manifest = manifest_from_archive(&first.archive_path);

    let second = build_pack(&sample_grid(), "basalt", &mut RandomIds, &opts).unwrap();
    let second_manifest = manifest_from_archive(&second.archive_path);

    assert_ne!(first_manifest.header.uuid, second_manifest.header.uuid);
    assert_ne!(
        first_manifest.modules[0].uuid,
        second_manifest.modules[0].uuid
    );
}

#[test]
fn test_pinned_identifiers_reproduce_archives_byte_for_byte() {
    let staging = TempDir::new().unwrap();
    let out_a = TempDir::new().unwrap();
    let out_b = TempDir::new().unwrap();

    let ids = vec![
        "11111111-1111-1111-1111-111111111111".to_string(),
        "22222222-2222-2222-2222-222222222222".to_string(),
    ];

    let a = build_pack(
        &sample_grid(),
        "basalt",
        &mut PinnedIds::new(ids.clone()),
        &options(&staging, &out_a),
    )
    .unwrap();
    let b = build_pack(
        &sample_grid(),
        "basalt",
        &mut PinnedIds::new(ids),
        &options(&staging, &out_b),
    )
    .unwrap();

    assert_eq!(
        fs::read(&a.archive_path).unwrap(),
        fs::read(&b.archive_path).unwrap()
    );
}

#[test]
fn test_manifest_fields_in_published_archive() {
    let staging = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let outcome = build_pack(
        &sample_grid(),
        "srb_rock",
        &mut RandomIds,
        &options(&staging, &out),
    )
    .unwrap();

    let manifest = manifest_from_archive(&outcome.archive_path);
    assert_eq!(manifest.format_version, 2);
    assert_eq!(manifest.header.name, "srb_rock PBR Pack");
    assert_eq!(manifest.header.description, "PBR textures for srb_rock");
    assert_eq!(manifest.header.min_engine_version, [1, 16, 0]);
    assert_eq!(manifest.modules.len(), 1);
    assert_eq!(manifest.modules[0].module_type, "resources");
}
