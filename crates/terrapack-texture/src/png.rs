//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same texel data always encodes to
//! byte-identical output, which keeps re-synthesized packs reproducible.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::grid::TexelGrid;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. A fixed value keeps output reproducible.
    pub compression: Compression,
    /// Filter type. `NoFilter` avoids any adaptive per-row choices.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Create config optimized for file size (slower, still deterministic).
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }
}

/// Write a texel grid as an RGB PNG file.
pub fn write_rgb(grid: &TexelGrid, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgb_to_writer(grid, writer, config)
}

/// Write a texel grid as RGB PNG data to any writer.
pub fn write_rgb_to_writer<W: Write>(
    grid: &TexelGrid,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, grid.width, grid.height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&grid.to_rgb8())?;

    Ok(())
}

/// Encode to a `Vec<u8>` and return the BLAKE3 hash of the encoded bytes.
pub fn write_rgb_to_vec_with_hash(
    grid: &TexelGrid,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(grid, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn gradient_grid(size: u32) -> TexelGrid {
        let mut grid = TexelGrid::new(size, size, Color::black());
        for y in 0..size {
            for x in 0..size {
                let r = x as f64 / (size - 1) as f64;
                let g = y as f64 / (size - 1) as f64;
                grid.set(x, y, Color::rgb(r, g, 0.5));
            }
        }
        grid
    }

    #[test]
    fn test_rgb_encoding_deterministic() {
        let grid = gradient_grid(32);
        let config = PngConfig::default();

        let (data1, hash1) = write_rgb_to_vec_with_hash(&grid, &config).unwrap();
        let (data2, hash2) = write_rgb_to_vec_with_hash(&grid, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
    }

    #[test]
    fn test_write_rgb_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.png");

        write_rgb(&gradient_grid(8), &path, &PngConfig::default()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_different_grids_different_hashes() {
        let config = PngConfig::default();
        let (_, hash_a) =
            write_rgb_to_vec_with_hash(&TexelGrid::new(4, 4, Color::black()), &config).unwrap();
        let (_, hash_b) =
            write_rgb_to_vec_with_hash(&TexelGrid::new(4, 4, Color::white()), &config).unwrap();
        assert_ne!(hash_a, hash_b);
    }
}
