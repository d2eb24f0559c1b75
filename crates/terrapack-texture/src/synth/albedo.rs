//! Albedo map generator.

use terrapack_raster::SampleGrid;

use super::Normalizer;
use crate::color::Color;
use crate::grid::TexelGrid;

/// How sample values map to albedo colors.
#[derive(Debug, Clone, PartialEq)]
pub enum AlbedoMapping {
    /// One fixed base color for every valid texel.
    Fixed(Color),
    /// Gradient between two colors, keyed on the normalized sample value.
    Gradient { low: Color, high: Color },
}

impl AlbedoMapping {
    /// Resolve the color for a normalized sample value.
    #[inline]
    pub fn color_at(&self, normalized: f64) -> Color {
        match self {
            AlbedoMapping::Fixed(color) => *color,
            AlbedoMapping::Gradient { low, high } => low.lerp(high, normalized),
        }
    }
}

/// Albedo map generator.
pub struct AlbedoGenerator {
    /// The sample-to-color mapping.
    pub mapping: AlbedoMapping,
    /// Color for no-data texels.
    pub nodata_color: Color,
}

impl AlbedoGenerator {
    /// Create a new albedo generator.
    pub fn new(mapping: AlbedoMapping) -> Self {
        Self {
            mapping,
            nodata_color: Color::black(),
        }
    }

    /// Set the no-data color.
    pub fn with_nodata_color(mut self, color: Color) -> Self {
        self.nodata_color = color;
        self
    }

    /// Generate the albedo grid.
    pub fn generate(&self, grid: &SampleGrid, normalizer: &Normalizer) -> TexelGrid {
        let mut out = TexelGrid::new(grid.width(), grid.height(), self.nodata_color);

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let sample = grid.get(x, y);
                if grid.is_nodata(sample) {
                    out.set(x, y, self.nodata_color);
                } else {
                    out.set(x, y, self.mapping.color_at(normalizer.normalize(sample)));
                }
            }
        }

        out
    }
}
