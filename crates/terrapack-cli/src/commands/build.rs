//! `terrapack build` - convert a raster into a published pack archive.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};

use terrapack_pack::{build_pack, BuildOptions, RandomIds};
use terrapack_raster::decode_geotiff;
use terrapack_texture::SynthesisConfig;

/// Run one pack build.
pub fn run(
    input: &str,
    texture_name: Option<&str>,
    output_dir: &str,
    nodata: Option<f64>,
    min_size: Option<u32>,
    staging_root: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let input_path = Path::new(input);
    let name = match texture_name {
        Some(name) => name.to_string(),
        None => input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("cannot derive a texture name from '{}'", input))?
            .to_string(),
    };

    let grid = decode_geotiff(input_path, nodata)
        .with_context(|| format!("failed to read raster '{}'", input))?;

    let mut synthesis = SynthesisConfig::default();
    if let Some(min_size) = min_size {
        synthesis.min_size = min_size;
    }

    let options = BuildOptions {
        output_dir: PathBuf::from(output_dir),
        staging_root: staging_root.map(PathBuf::from).unwrap_or_else(env::temp_dir),
        synthesis,
        ..BuildOptions::default()
    };

    let outcome = build_pack(&grid, &name, &mut RandomIds, &options)
        .with_context(|| format!("failed to build pack '{}'", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("Successfully created {}", outcome.archive_path.display());
    }

    Ok(ExitCode::SUCCESS)
}
