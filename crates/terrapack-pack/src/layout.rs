//! Archive layout and artifact naming.
//!
//! All artifact names derive from the validated texture name through these
//! functions, which are total and injective over valid names: distinct
//! names can never produce colliding filenames.

/// Directory inside the archive holding texture images and descriptors.
pub const TEXTURES_DIR: &str = "textures/blocks";

/// Manifest filename at the archive root.
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Extension of the final archive.
pub const ARCHIVE_EXTENSION: &str = "mcpack";

/// Filename of the albedo image for a texture name.
pub fn albedo_filename(name: &str) -> String {
    format!("{}_albedo.png", name)
}

/// Filename of the combined metalness/emissive/roughness image.
pub fn mer_filename(name: &str) -> String {
    format!("{}_mer.png", name)
}

/// Filename of the texture-set descriptor.
pub fn texture_set_filename(name: &str) -> String {
    format!("{}.texture_set.json", name)
}

/// Archive-relative path of a file in the textures directory.
pub fn texture_path(filename: &str) -> String {
    format!("{}/{}", TEXTURES_DIR, filename)
}

/// Filename of the final archive.
pub fn archive_filename(name: &str) -> String {
    format!("{}.{}", name, ARCHIVE_EXTENSION)
}

/// Name of the staging directory claimed for one build of `name`.
pub fn staging_dirname(name: &str) -> String {
    format!("{}_pack", name)
}
