//! Metalness map generator.
//!
//! Classifies normalized sample values into discrete metalness levels via
//! ordered threshold bands. The classification is total over the full sample
//! domain, including no-data.

use terrapack_raster::SampleGrid;

use super::Normalizer;
use crate::grid::ScalarGrid;

/// One classification band: normalized values up to `upper` map to `level`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetalnessBand {
    /// Inclusive upper bound of the band, in normalized sample space.
    pub upper: f64,
    /// Metalness level assigned to the band.
    pub level: f64,
}

/// Ordered threshold bands mapping sample values to metalness levels.
#[derive(Debug, Clone, PartialEq)]
pub struct MetalnessRule {
    /// Bands in ascending `upper` order. Values above the last band's upper
    /// bound take the last band's level.
    pub bands: Vec<MetalnessBand>,
    /// Level for no-data texels.
    pub nodata_level: f64,
}

impl Default for MetalnessRule {
    fn default() -> Self {
        // Dielectric terrain with metallic highlights at the top of the
        // value range (exposed ridge lines, bright reflectance returns).
        Self {
            bands: vec![
                MetalnessBand {
                    upper: 0.85,
                    level: 0.0,
                },
                MetalnessBand {
                    upper: 1.0,
                    level: 1.0,
                },
            ],
            nodata_level: 0.0,
        }
    }
}

impl MetalnessRule {
    /// Classify a normalized sample value. Total: any finite input lands in
    /// a band, and values beyond the last bound take the last level.
    pub fn classify(&self, normalized: f64) -> f64 {
        for band in &self.bands {
            if normalized <= band.upper {
                return band.level;
            }
        }
        self.bands.last().map(|b| b.level).unwrap_or(0.0)
    }
}

/// Metalness map generator.
pub struct MetalnessGenerator {
    /// The classification rule.
    pub rule: MetalnessRule,
}

impl MetalnessGenerator {
    /// Create a new metalness generator.
    pub fn new(rule: MetalnessRule) -> Self {
        Self { rule }
    }

    /// Generate the metalness grid.
    pub fn generate(&self, grid: &SampleGrid, normalizer: &Normalizer) -> ScalarGrid {
        let mut out = ScalarGrid::new(grid.width(), grid.height(), 0.0);

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let sample = grid.get(x, y);
                let level = if grid.is_nodata(sample) {
                    self.rule.nodata_level
                } else {
                    self.rule.classify(normalizer.normalize(sample))
                };
                out.set(x, y, level.clamp(0.0, 1.0));
            }
        }

        out
    }
}
