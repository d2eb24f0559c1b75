//! PBR material map synthesis.
//!
//! Derives albedo, roughness, and metalness grids from a raster sample grid.
//! Every map is a pure function of the samples and the configuration, so
//! re-synthesis on identical input reproduces identical grids.

mod albedo;
mod metalness;
mod roughness;


use thiserror::Error;

use terrapack_raster::SampleGrid;

use crate::color::Color;
use crate::grid::{ScalarGrid, TexelGrid};

pub use albedo::{AlbedoGenerator, AlbedoMapping};
pub use metalness::{MetalnessBand, MetalnessGenerator, MetalnessRule};
pub use roughness::RoughnessGenerator;

/// Errors from material map synthesis.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("cannot synthesize from an empty sample grid")]
    EmptyGrid,

    /// Internal invariant: all grids derived from one sample grid must share
    /// its dimensions. Hitting this is a programming error, not bad input.
    #[error("grid dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

/// Configuration for one synthesis run.
#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    /// How sample values map to albedo colors.
    pub albedo: AlbedoMapping,
    /// Albedo color for no-data texels.
    pub nodata_color: Color,
    /// Scale applied to slope magnitude before clamping to [0, 1].
    pub slope_gain: f64,
    /// Roughness assigned to no-data texels. Defaults to fully diffuse so
    /// holes in the raster read as matte rather than mirror-smooth.
    pub nodata_roughness: f64,
    /// Classification of sample values into metalness levels.
    pub metalness: MetalnessRule,
    /// Minimum output size per axis; smaller results are padded by edge
    /// replication.
    pub min_size: u32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            albedo: AlbedoMapping::Gradient {
                low: Color::rgb(0.28, 0.22, 0.16),
                high: Color::rgb(0.78, 0.76, 0.72),
            },
            nodata_color: Color::rgb(0.28, 0.22, 0.16),
            slope_gain: 4.0,
            nodata_roughness: 1.0,
            metalness: MetalnessRule::default(),
            min_size: 16,
        }
    }
}

/// The three material grids produced by one synthesis run.
///
/// All grids share identical dimensions: the input's, or the configured
/// minimum, whichever is larger.
#[derive(Debug, Clone)]
pub struct MaterialGrids {
    pub albedo: TexelGrid,
    pub roughness: ScalarGrid,
    pub metalness: ScalarGrid,
}

/// Normalized view of a sample population.
///
/// Maps valid samples onto [0, 1] by min/max scaling. A constant population
/// (or one with no valid samples at all) normalizes to 0.5 so downstream
/// mappings still get a defined mid-range value.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    min: f64,
    span: f64,
}

impl Normalizer {
    /// Build a normalizer from the grid's valid sample range.
    pub fn from_grid(grid: &SampleGrid) -> Self {
        match grid.valid_range() {
            Some((min, max)) if max > min => Self {
                min,
                span: max - min,
            },
            _ => Self { min: 0.0, span: 0.0 },
        }
    }

    /// Map a sample value onto [0, 1].
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        if self.span == 0.0 {
            return 0.5;
        }
        ((value - self.min) / self.span).clamp(0.0, 1.0)
    }
}

/// Synthesize albedo, roughness, and metalness grids from a sample grid.
pub fn synthesize(
    grid: &SampleGrid,
    config: &SynthesisConfig,
) -> Result<MaterialGrids, SynthesisError> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(SynthesisError::EmptyGrid);
    }

    let normalizer = Normalizer::from_grid(grid);

    let albedo = AlbedoGenerator::new(config.albedo.clone())
        .with_nodata_color(config.nodata_color)
        .generate(grid, &normalizer);
    let roughness = RoughnessGenerator::new(config.slope_gain)
        .with_nodata_roughness(config.nodata_roughness)
        .generate(grid, &normalizer);
    let metalness = MetalnessGenerator::new(config.metalness.clone()).generate(grid, &normalizer);

    check_dimensions(grid.width(), grid.height(), albedo.width, albedo.height)?;
    check_dimensions(grid.width(), grid.height(), roughness.width, roughness.height)?;
    check_dimensions(grid.width(), grid.height(), metalness.width, metalness.height)?;

    Ok(MaterialGrids {
        albedo: albedo.padded_to(config.min_size, config.min_size),
        roughness: roughness.padded_to(config.min_size, config.min_size),
        metalness: metalness.padded_to(config.min_size, config.min_size),
    })
}

fn check_dimensions(
    expected_width: u32,
    expected_height: u32,
    actual_width: u32,
    actual_height: u32,
) -> Result<(), SynthesisError> {
    if expected_width != actual_width || expected_height != actual_height {
        return Err(SynthesisError::DimensionMismatch {
            expected_width,
            expected_height,
            actual_width,
            actual_height,
        });
    }
    Ok(())
}
