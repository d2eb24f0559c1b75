//! `terrapack probe` - decode a raster and report its sample statistics.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;

use terrapack_raster::{decode_geotiff, SampleGrid};

/// Raster statistics reported by `probe`.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub nodata_count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ProbeReport {
    fn from_grid(path: &str, grid: &SampleGrid) -> Self {
        let range = grid.valid_range();
        Self {
            path: path.to_string(),
            width: grid.width(),
            height: grid.height(),
            nodata_count: grid.nodata_count(),
            min: range.map(|(lo, _)| lo),
            max: range.map(|(_, hi)| hi),
        }
    }
}

/// Decode a raster and print its statistics.
pub fn run(input: &str, nodata: Option<f64>, json: bool) -> Result<ExitCode> {
    let grid = decode_geotiff(Path::new(input), nodata)
        .with_context(|| format!("failed to read raster '{}'", input))?;
    let report = ProbeReport::from_grid(input, &grid);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}: {}x{} samples", report.path, report.width, report.height);
        match (report.min, report.max) {
            (Some(min), Some(max)) => println!("  value range: {} .. {}", min, max),
            _ => println!("  value range: (no valid samples)"),
        }
        println!("  no-data samples: {}", report.nodata_count);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_grid() {
        let grid =
            SampleGrid::new(2, 2, vec![10.0, 20.0, f64::NAN, 30.0], None).unwrap();
        let report = ProbeReport::from_grid("dem.tif", &grid);

        assert_eq!(report.width, 2);
        assert_eq!(report.height, 2);
        assert_eq!(report.nodata_count, 1);
        assert_eq!(report.min, Some(10.0));
        assert_eq!(report.max, Some(30.0));
    }

    #[test]
    fn test_report_with_no_valid_samples() {
        let grid = SampleGrid::new(1, 1, vec![f64::NAN], None).unwrap();
        let report = ProbeReport::from_grid("dem.tif", &grid);

        assert_eq!(report.min, None);
        assert_eq!(report.max, None);
    }
}
