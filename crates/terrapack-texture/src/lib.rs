//! Terrapack PBR Synthesis Backend
//!
//! Derives physically-based material maps (albedo, roughness, metalness)
//! from a raster sample grid and packs the scalar maps into a combined
//! metalness/emissive/roughness image. All output is byte-identical given
//! the same input grid and configuration: derivation is a pure function of
//! the samples, and PNG encoding uses fixed compression settings.
//!
//! # Example
//!
//! ```no_run
//! use terrapack_raster::SampleGrid;
//! use terrapack_texture::{compose_mer, synthesize, PngConfig, SynthesisConfig};
//!
//! let grid = SampleGrid::new(2, 2, vec![10.0, 20.0, 30.0, 40.0], None).unwrap();
//! let maps = synthesize(&grid, &SynthesisConfig::default()).unwrap();
//! let mer = compose_mer(&maps.metalness, None, &maps.roughness).unwrap();
//!
//! let config = PngConfig::default();
//! let (albedo_png, _hash) =
//!     terrapack_texture::png::write_rgb_to_vec_with_hash(&maps.albedo, &config).unwrap();
//! let (mer_png, _hash) =
//!     terrapack_texture::png::write_rgb_to_vec_with_hash(&mer, &config).unwrap();
//! ```

pub mod color;
pub mod compose;
pub mod grid;
pub mod png;
pub mod synth;

// Re-export main types for convenience
pub use color::Color;
pub use compose::compose_mer;
pub use grid::{ScalarGrid, TexelGrid};
pub use png::{PngConfig, PngError};
pub use synth::{
    synthesize, AlbedoMapping, MaterialGrids, MetalnessBand, MetalnessRule, SynthesisConfig,
    SynthesisError,
};
