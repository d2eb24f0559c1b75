//! Channel compositor.
//!
//! Packs the scalar material maps into one combined image with fixed channel
//! assignment: metalness in red, emissive in green, roughness in blue (the
//! "MER" convention of the target platform's texture sets). The compositor
//! only produces the in-memory grid; encoding to a file format happens at
//! pack assembly, which keeps the packing logic testable without I/O.

use crate::color::Color;
use crate::grid::{ScalarGrid, TexelGrid};
use crate::synth::SynthesisError;

/// Pack metalness, emissive, and roughness grids into one combined image.
///
/// `emissive` defaults to an all-zero grid when absent. All inputs must
/// share identical dimensions; a mismatch is an internal invariant
/// violation and aborts the build.
pub fn compose_mer(
    metalness: &ScalarGrid,
    emissive: Option<&ScalarGrid>,
    roughness: &ScalarGrid,
) -> Result<TexelGrid, SynthesisError> {
    check_match(metalness, roughness)?;
    if let Some(e) = emissive {
        check_match(metalness, e)?;
    }

    let mut out = TexelGrid::new(metalness.width, metalness.height, Color::black());
    for y in 0..metalness.height {
        for x in 0..metalness.width {
            let m = metalness.get(x, y);
            let e = emissive.map(|g| g.get(x, y)).unwrap_or(0.0);
            let r = roughness.get(x, y);
            out.set(x, y, Color::rgb(m, e, r));
        }
    }

    Ok(out)
}

fn check_match(expected: &ScalarGrid, actual: &ScalarGrid) -> Result<(), SynthesisError> {
    if expected.width != actual.width || expected.height != actual.height {
        return Err(SynthesisError::DimensionMismatch {
            expected_width: expected.width,
            expected_height: expected.height,
            actual_width: actual.width,
            actual_height: actual.height,
        });
    }
    Ok(())
}
