//! Texel grid types shared by the synthesis engine and the compositor.
//!
//! All grids produced from one sample grid share identical dimensions and
//! are read-only once produced. Neighbor lookup is edge-clamped; nothing in
//! this pipeline tiles, so coordinates never wrap.

use crate::color::Color;

/// A 2D grid of color texels.
#[derive(Debug, Clone, PartialEq)]
pub struct TexelGrid {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Texel data (row-major).
    pub data: Vec<Color>,
}

impl TexelGrid {
    /// Create a new grid filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a texel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx]
    }

    /// Set a texel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx] = color;
    }

    /// Grow to at least `min_width` x `min_height` by edge replication.
    ///
    /// Existing texels keep their coordinates; new border rows/columns
    /// repeat the nearest computed texel. Returns a clone when the grid
    /// already meets the minimum.
    pub fn padded_to(&self, min_width: u32, min_height: u32) -> TexelGrid {
        let width = self.width.max(min_width);
        let height = self.height.max(min_height);
        if width == self.width && height == self.height {
            return self.clone();
        }

        let mut out = TexelGrid::new(width, height, Color::black());
        for y in 0..height {
            let sy = y.min(self.height - 1);
            for x in 0..width {
                let sx = x.min(self.width - 1);
                out.set(x, y, self.get(sx, sy));
            }
        }
        out
    }

    /// Convert to 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgb8());
        }
        bytes
    }
}

/// A 2D grid of scalar texels (roughness, metalness, emissive).
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Texel data (single channel, row-major).
    pub data: Vec<f64>,
}

impl ScalarGrid {
    /// Create a new grid filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a texel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx]
    }

    /// Set a texel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx] = value;
    }

    /// Get a texel with edge-clamped coordinates.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> f64 {
        let cx = x.clamp(0, self.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.height as i64 - 1) as u32;
        self.get(cx, cy)
    }

    /// Grow to at least `min_width` x `min_height` by edge replication.
    pub fn padded_to(&self, min_width: u32, min_height: u32) -> ScalarGrid {
        let width = self.width.max(min_width);
        let height = self.height.max(min_height);
        if width == self.width && height == self.height {
            return self.clone();
        }

        let mut out = ScalarGrid::new(width, height, 0.0);
        for y in 0..height {
            let sy = y.min(self.height - 1);
            for x in 0..width {
                let sx = x.min(self.width - 1);
                out.set(x, y, self.get(sx, sy));
            }
        }
        out
    }

    /// Convert to 8-bit bytes: `round(clamp(v, 0, 1) * 255)`.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}
