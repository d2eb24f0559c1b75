//! Terrapack Pack Assembly
//!
//! Turns synthesized material maps into a versioned, installable resource
//! pack: descriptor documents, an isolated staging area, and a single
//! compressed `.mcpack` archive published atomically into the output
//! directory. The output directory never observes a half-written archive,
//! and a failed build never leaves staging residue behind.

pub mod archive;
pub mod build;
pub mod descriptor;
pub mod error;
pub mod ids;
pub mod layout;
pub mod name;
pub mod staging;

// Re-export main types for convenience
pub use build::{build_pack, verify_staged, ArchiveEntry, BuildOptions, BuildOutcome};
pub use descriptor::{ManifestHeader, ManifestModule, PackManifest, TextureSet};
pub use error::PackError;
pub use ids::{IdSource, PinnedIds, RandomIds};
pub use staging::WorkingArea;
