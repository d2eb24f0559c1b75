//! Pack descriptor documents.
//!
//! Serde models for `manifest.json` and the `<name>.texture_set.json`
//! texture-set descriptor, matching the target platform's resource pack
//! schema.

use serde::{Deserialize, Serialize};

use crate::ids::IdSource;
use crate::layout;

/// Manifest schema version.
pub const MANIFEST_FORMAT_VERSION: u32 = 2;

/// Texture-set schema version.
pub const TEXTURE_SET_FORMAT_VERSION: &str = "1.16.100";

/// Pack and module version.
pub const PACK_VERSION: [u32; 3] = [1, 0, 0];

/// Minimum compatible target engine version.
pub const MIN_ENGINE_VERSION: [u32; 3] = [1, 16, 0];

/// The pack manifest document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackManifest {
    pub format_version: u32,
    pub header: ManifestHeader,
    pub modules: Vec<ManifestModule>,
}

/// Manifest header identifying the pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub name: String,
    pub description: String,
    pub uuid: String,
    pub version: [u32; 3],
    pub min_engine_version: [u32; 3],
}

/// One resource module entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestModule {
    #[serde(rename = "type")]
    pub module_type: String,
    pub uuid: String,
    pub version: [u32; 3],
}

impl PackManifest {
    /// Build the manifest for a texture pack, drawing fresh identifiers for
    /// the header and the resource module.
    pub fn for_texture(name: &str, ids: &mut dyn IdSource) -> Self {
        Self {
            format_version: MANIFEST_FORMAT_VERSION,
            header: ManifestHeader {
                name: format!("{} PBR Pack", name),
                description: format!("PBR textures for {}", name),
                uuid: ids.next_id(),
                version: PACK_VERSION,
                min_engine_version: MIN_ENGINE_VERSION,
            },
            modules: vec![ManifestModule {
                module_type: "resources".to_string(),
                uuid: ids.next_id(),
                version: PACK_VERSION,
            }],
        }
    }
}

/// The texture-set descriptor document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureSet {
    pub format_version: String,
    #[serde(rename = "minecraft:texture_set")]
    pub texture_set: TextureSetChannels,
}

/// Channel references inside a texture set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureSetChannels {
    /// Archive-relative path of the albedo image.
    pub color: String,
    /// Archive-relative path of the combined-channel image.
    pub metalness_emissive_roughness: String,
}

impl TextureSet {
    /// Build the texture-set descriptor for a texture name.
    pub fn for_texture(name: &str) -> Self {
        Self {
            format_version: TEXTURE_SET_FORMAT_VERSION.to_string(),
            texture_set: TextureSetChannels {
                color: layout::texture_path(&layout::albedo_filename(name)),
                metalness_emissive_roughness: layout::texture_path(&layout::mer_filename(name)),
            },
        }
    }

    /// The archive-relative paths this descriptor references.
    pub fn referenced_paths(&self) -> [&str; 2] {
        [
            self.texture_set.color.as_str(),
            self.texture_set.metalness_emissive_roughness.as_str(),
        ]
    }
}
