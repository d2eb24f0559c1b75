//! Roughness map generator.
//!
//! Roughness is derived from local surface variation: the central-difference
//! slope magnitude of the normalized samples. Steep terrain reads as rough,
//! flat terrain as smooth.

use terrapack_raster::SampleGrid;

use super::Normalizer;
use crate::grid::ScalarGrid;

/// Roughness map generator.
pub struct RoughnessGenerator {
    /// Scale applied to slope magnitude before clamping to [0, 1].
    pub slope_gain: f64,
    /// Roughness for no-data texels.
    pub nodata_roughness: f64,
}

impl RoughnessGenerator {
    /// Create a new roughness generator.
    pub fn new(slope_gain: f64) -> Self {
        Self {
            slope_gain,
            nodata_roughness: 1.0,
        }
    }

    /// Set the no-data roughness.
    pub fn with_nodata_roughness(mut self, roughness: f64) -> Self {
        self.nodata_roughness = roughness;
        self
    }

    /// Generate the roughness grid.
    pub fn generate(&self, grid: &SampleGrid, normalizer: &Normalizer) -> ScalarGrid {
        let mut out = ScalarGrid::new(grid.width(), grid.height(), 0.0);

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let center = grid.get(x, y);
                if grid.is_nodata(center) {
                    out.set(x, y, self.nodata_roughness.clamp(0.0, 1.0));
                    continue;
                }

                let center_n = normalizer.normalize(center);
                let left = self.neighbor(grid, normalizer, x as i64 - 1, y as i64, center_n);
                let right = self.neighbor(grid, normalizer, x as i64 + 1, y as i64, center_n);
                let up = self.neighbor(grid, normalizer, x as i64, y as i64 - 1, center_n);
                let down = self.neighbor(grid, normalizer, x as i64, y as i64 + 1, center_n);

                let gx = (right - left) * 0.5;
                let gy = (down - up) * 0.5;
                let magnitude = (gx * gx + gy * gy).sqrt();

                out.set(x, y, (magnitude * self.slope_gain).clamp(0.0, 1.0));
            }
        }

        out
    }

    /// Normalized neighbor value with edge clamping. A no-data neighbor
    /// falls back to the center value, so holes contribute zero slope.
    #[inline]
    fn neighbor(
        &self,
        grid: &SampleGrid,
        normalizer: &Normalizer,
        x: i64,
        y: i64,
        center_n: f64,
    ) -> f64 {
        let sample = grid.get_clamped(x, y);
        if grid.is_nodata(sample) {
            center_n
        } else {
            normalizer.normalize(sample)
        }
    }
}
