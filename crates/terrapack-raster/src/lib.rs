//! Terrapack Raster Source Reader
//!
//! Decodes GeoTIFF-class elevation/intensity rasters into a uniform
//! in-memory [`SampleGrid`] consumed by the synthesis engine. The reader is
//! deliberately thin: band selection, reprojection, and coordinate handling
//! are assumed to have happened upstream.

pub mod geotiff;

use std::path::PathBuf;
use thiserror::Error;

pub use geotiff::{decode_geotiff, read_sample_grid};

/// Errors from raster decoding and grid construction.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to open raster {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode raster {path}: {source}")]
    Decode {
        path: PathBuf,
        source: tiff::TiffError,
    },

    #[error("raster {path} has zero width or height")]
    EmptyRaster { path: PathBuf },

    #[error("sample grid cannot have zero width or height")]
    EmptyGrid,

    #[error("{len} samples do not fill a {width}x{height} grid")]
    LengthMismatch { width: u32, height: u32, len: usize },

    #[error("raster {path}: {len} samples are not a whole number of {width}x{height} bands")]
    BandMismatch {
        path: PathBuf,
        width: u32,
        height: u32,
        len: usize,
    },
}

/// An immutable rectangular grid of scalar samples with a no-data sentinel.
///
/// Samples are stored row-major. A sample is considered no-data when it is
/// non-finite (NaN or infinity) or equal to the configured sentinel value.
/// The grid is never mutated after construction.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    width: u32,
    height: u32,
    data: Vec<f64>,
    nodata: Option<f64>,
}

impl SampleGrid {
    /// Create a grid from row-major samples.
    pub fn new(
        width: u32,
        height: u32,
        data: Vec<f64>,
        nodata: Option<f64>,
    ) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyGrid);
        }
        if data.len() != (width as usize) * (height as usize) {
            return Err(RasterError::LengthMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
            nodata,
        })
    }

    /// Width in samples.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in samples.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The no-data sentinel, if one was declared.
    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    /// Get the sample at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx]
    }

    /// Get a sample with edge-clamped coordinates.
    ///
    /// Out-of-range coordinates are clamped to the nearest edge sample; the
    /// grid never wraps.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> f64 {
        let cx = x.clamp(0, self.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.height as i64 - 1) as u32;
        self.get(cx, cy)
    }

    /// Whether a sample value counts as no-data.
    #[inline]
    pub fn is_nodata(&self, value: f64) -> bool {
        if !value.is_finite() {
            return true;
        }
        match self.nodata {
            Some(sentinel) => value == sentinel,
            None => false,
        }
    }

    /// The (min, max) of all valid samples, or `None` if every sample is
    /// no-data.
    pub fn valid_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for &v in &self.data {
            if self.is_nodata(v) {
                continue;
            }
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        range
    }

    /// Number of no-data samples.
    pub fn nodata_count(&self) -> usize {
        self.data.iter().filter(|&&v| self.is_nodata(v)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            SampleGrid::new(0, 4, vec![], None),
            Err(RasterError::EmptyGrid)
        ));
        assert!(matches!(
            SampleGrid::new(4, 0, vec![], None),
            Err(RasterError::EmptyGrid)
        ));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = SampleGrid::new(2, 2, vec![0.0; 3], None).unwrap_err();
        assert!(matches!(err, RasterError::LengthMismatch { len: 3, .. }));
    }

    #[test]
    fn test_get_and_clamped_lookup() {
        let grid = SampleGrid::new(2, 2, vec![1.0, 2.0, 3.0, 4.0], None).unwrap();
        assert_eq!(grid.get(0, 0), 1.0);
        assert_eq!(grid.get(1, 1), 4.0);

        // Edge clamp, never wrap
        assert_eq!(grid.get_clamped(-1, -1), 1.0);
        assert_eq!(grid.get_clamped(5, 0), 2.0);
        assert_eq!(grid.get_clamped(0, 5), 3.0);
        assert_eq!(grid.get_clamped(5, 5), 4.0);
    }

    #[test]
    fn test_nodata_sentinel_and_nonfinite() {
        let grid =
            SampleGrid::new(2, 2, vec![-9999.0, f64::NAN, 1.0, 2.0], Some(-9999.0)).unwrap();
        assert!(grid.is_nodata(-9999.0));
        assert!(grid.is_nodata(f64::NAN));
        assert!(grid.is_nodata(f64::INFINITY));
        assert!(!grid.is_nodata(1.0));
        assert_eq!(grid.nodata_count(), 2);
    }

    #[test]
    fn test_valid_range_skips_nodata() {
        let grid =
            SampleGrid::new(2, 2, vec![-9999.0, 5.0, 1.0, f64::NAN], Some(-9999.0)).unwrap();
        assert_eq!(grid.valid_range(), Some((1.0, 5.0)));
    }

    #[test]
    fn test_valid_range_all_nodata() {
        let grid = SampleGrid::new(1, 2, vec![f64::NAN, f64::NAN], None).unwrap();
        assert_eq!(grid.valid_range(), None);
    }
}
