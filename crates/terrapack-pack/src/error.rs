//! Error types for pack assembly.

use std::path::PathBuf;
use thiserror::Error;

use terrapack_texture::{PngError, SynthesisError};

/// Errors from descriptor generation and pack assembly.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("invalid texture name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Png(#[from] PngError),

    #[error("failed to encode descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    /// A staging directory with the same identity already exists. It must be
    /// removed (or the other in-flight build finished) before retrying;
    /// builds never merge into a stale directory.
    #[error("staging directory already in use: {path}")]
    StagingConflict { path: PathBuf },

    #[error("staging I/O failure at {path}: {source}")]
    Staging {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The texture-set descriptor references an artifact that was never
    /// staged. Packing would produce a broken descriptor, so the build
    /// fails instead.
    #[error("texture set references unstaged artifact: {path}")]
    IncompleteArtifactSet { path: String },

    #[error("archive I/O failure at {path}: {source}")]
    Archive {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("archive encoding error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
