//! GeoTIFF decoding.
//!
//! Wraps the `tiff` crate and flattens whatever sample format the file uses
//! into `f64` values. Multi-band rasters contribute their first band only.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use tiff::decoder::{Decoder, DecodingResult};

use crate::{RasterError, SampleGrid};

/// Decode a GeoTIFF file into a [`SampleGrid`].
///
/// `nodata` is an optional explicit sentinel; non-finite samples are treated
/// as no-data regardless.
pub fn decode_geotiff(path: &Path, nodata: Option<f64>) -> Result<SampleGrid, RasterError> {
    let file = File::open(path).map_err(|source| RasterError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_sample_grid(BufReader::new(file), path, nodata)
}

/// Decode a TIFF stream into a [`SampleGrid`].
///
/// Exposed separately from [`decode_geotiff`] so the decoding path can be
/// exercised against in-memory streams.
pub fn read_sample_grid<R: Read + Seek>(
    reader: R,
    path: &Path,
    nodata: Option<f64>,
) -> Result<SampleGrid, RasterError> {
    let decode_err = |source| RasterError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let mut decoder = Decoder::new(reader).map_err(decode_err)?;
    let (width, height) = decoder.dimensions().map_err(decode_err)?;
    if width == 0 || height == 0 {
        return Err(RasterError::EmptyRaster {
            path: path.to_path_buf(),
        });
    }

    let image = decoder.read_image().map_err(decode_err)?;
    let samples: Vec<f64> = match image {
        DecodingResult::U8(data) => data.iter().map(|&v| v as f64).collect(),
        DecodingResult::U16(data) => data.iter().map(|&v| v as f64).collect(),
        DecodingResult::U32(data) => data.iter().map(|&v| v as f64).collect(),
        DecodingResult::U64(data) => data.iter().map(|&v| v as f64).collect(),
        DecodingResult::I8(data) => data.iter().map(|&v| v as f64).collect(),
        DecodingResult::I16(data) => data.iter().map(|&v| v as f64).collect(),
        DecodingResult::I32(data) => data.iter().map(|&v| v as f64).collect(),
        DecodingResult::I64(data) => data.iter().map(|&v| v as f64).collect(),
        DecodingResult::F32(data) => data.iter().map(|&v| v as f64).collect(),
        DecodingResult::F64(data) => data,
    };

    let pixels = (width as usize) * (height as usize);
    let samples = if samples.len() == pixels {
        samples
    } else if !samples.is_empty() && samples.len() % pixels == 0 {
        // Interleaved multi-band image: keep the first band.
        let bands = samples.len() / pixels;
        samples.into_iter().step_by(bands).collect()
    } else {
        return Err(RasterError::BandMismatch {
            path: path.to_path_buf(),
            width,
            height,
            len: samples.len(),
        });
    };

    SampleGrid::new(width, height, samples, nodata)
}
