//! Terrapack CLI - convert GeoTIFF rasters into installable PBR texture
//! packs.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use terrapack_cli::commands;

/// Terrapack - GeoTIFF to PBR resource pack converter
#[derive(Parser)]
#[command(name = "terrapack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a GeoTIFF raster into a published .mcpack archive
    Build {
        /// Path to the input GeoTIFF file
        #[arg(short, long)]
        input: String,

        /// Name for the texture set (default: derived from the input filename)
        #[arg(long)]
        texture_name: Option<String>,

        /// Directory to save the final .mcpack file
        #[arg(short, long, default_value = "output_mcpacks")]
        output_dir: String,

        /// Sample value to treat as no-data (non-finite samples always are)
        #[arg(long, allow_hyphen_values = true)]
        nodata: Option<f64>,

        /// Minimum output texture size per axis
        #[arg(long)]
        min_size: Option<u32>,

        /// Root directory for build staging (default: system temp directory)
        #[arg(long)]
        staging_root: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a raster and print its sample statistics
    Probe {
        /// Path to the input GeoTIFF file
        #[arg(short, long)]
        input: String,

        /// Sample value to treat as no-data
        #[arg(long, allow_hyphen_values = true)]
        nodata: Option<f64>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Stage, commit, and push generated assets with git
    Sync {
        /// Commit message (default: timestamped sync message)
        #[arg(short, long)]
        message: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            input,
            texture_name,
            output_dir,
            nodata,
            min_size,
            staging_root,
            json,
        } => commands::build::run(
            &input,
            texture_name.as_deref(),
            &output_dir,
            nodata,
            min_size,
            staging_root.as_deref(),
            json,
        ),
        Commands::Probe {
            input,
            nodata,
            json,
        } => commands::probe::run(&input, nodata, json),
        Commands::Sync { message } => commands::sync::run(message.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_build() {
        let cli = Cli::try_parse_from(["terrapack", "build", "--input", "dem.tif"]).unwrap();
        match cli.command {
            Commands::Build {
                input,
                texture_name,
                output_dir,
                nodata,
                min_size,
                staging_root,
                json,
            } => {
                assert_eq!(input, "dem.tif");
                assert!(texture_name.is_none());
                assert_eq!(output_dir, "output_mcpacks");
                assert!(nodata.is_none());
                assert!(min_size.is_none());
                assert!(staging_root.is_none());
                assert!(!json);
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_cli_parses_build_with_options() {
        let cli = Cli::try_parse_from([
            "terrapack",
            "build",
            "--input",
            "dem.tif",
            "--texture-name",
            "basalt",
            "--output-dir",
            "packs",
            "--nodata",
            "-9999",
            "--min-size",
            "32",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Build {
                input,
                texture_name,
                output_dir,
                nodata,
                min_size,
                json,
                ..
            } => {
                assert_eq!(input, "dem.tif");
                assert_eq!(texture_name.as_deref(), Some("basalt"));
                assert_eq!(output_dir, "packs");
                assert_eq!(nodata, Some(-9999.0));
                assert_eq!(min_size, Some(32));
                assert!(json);
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_cli_requires_input_for_build() {
        let err = Cli::try_parse_from(["terrapack", "build"]).err().unwrap();
        assert!(err.to_string().contains("--input"));
    }

    #[test]
    fn test_cli_parses_probe() {
        let cli =
            Cli::try_parse_from(["terrapack", "probe", "--input", "dem.tif", "--json"]).unwrap();
        match cli.command {
            Commands::Probe {
                input,
                nodata,
                json,
            } => {
                assert_eq!(input, "dem.tif");
                assert!(nodata.is_none());
                assert!(json);
            }
            _ => panic!("expected probe command"),
        }
    }

    #[test]
    fn test_cli_parses_sync() {
        let cli = Cli::try_parse_from(["terrapack", "sync"]).unwrap();
        match cli.command {
            Commands::Sync { message } => assert!(message.is_none()),
            _ => panic!("expected sync command"),
        }
    }

    #[test]
    fn test_cli_parses_sync_with_message() {
        let cli =
            Cli::try_parse_from(["terrapack", "sync", "--message", "update tiles"]).unwrap();
        match cli.command {
            Commands::Sync { message } => assert_eq!(message.as_deref(), Some("update tiles")),
            _ => panic!("expected sync command"),
        }
    }
}
