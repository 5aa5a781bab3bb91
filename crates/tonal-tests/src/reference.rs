//! Comparisons against the `palette` crate
//!
//! `palette` implements Oklab with the direct linear-sRGB → LMS matrix,
//! while tonal goes through XYZ. The two agree to well under 1e-3.

use anyhow::{Result, ensure};
use palette::{IntoColor, Oklab as RefOklab, Oklch as RefOklch, Srgb};
use rayon::prelude::*;
use tonal_core::{Oklab, Oklch, Rgb, oklch_to_srgb, srgb_to_oklch};

use crate::accuracy::{DiffStats, delta_e_ok_lab};

/// sRGB → Oklab through `palette`
pub fn reference_srgb_to_oklab(rgb: Rgb) -> Oklab {
    let lab: RefOklab<f64> = Srgb::new(rgb.r, rgb.g, rgb.b).into_color();
    Oklab::new(lab.l, lab.a, lab.b)
}

/// OKLCH → sRGB through `palette`
///
/// `palette` clamps on the way out, so only meaningful for colors inside
/// sRGB.
pub fn reference_oklch_to_srgb(lch: Oklch) -> Rgb {
    let rgb: Srgb<f64> = RefOklch::new(lch.l, lch.c, lch.h).into_color();
    Rgb::new(rgb.red, rgb.green, rgb.blue)
}

/// Compare both conversion directions on `samples`
///
/// Returns Oklab-distance statistics for the reverse direction and fails
/// if either direction exceeds `tolerance`.
pub fn compare_with_reference(samples: &[Rgb], tolerance: f64) -> Result<DiffStats> {
    let reverse: Vec<f64> = samples
        .par_iter()
        .map(|&rgb| delta_e_ok_lab(srgb_to_oklch(rgb).to_oklab(), reference_srgb_to_oklab(rgb)))
        .collect();
    let reverse = DiffStats::from_diffs(reverse);
    ensure!(
        reverse.within(tolerance),
        "sRGB → OKLCH differs from reference: {reverse:?}"
    );

    let forward: Vec<f64> = samples
        .par_iter()
        .map(|&rgb| {
            let lch = srgb_to_oklch(rgb);
            let ours = oklch_to_srgb(lch);
            let theirs = reference_oklch_to_srgb(lch);
            (ours.r - theirs.r)
                .abs()
                .max((ours.g - theirs.g).abs())
                .max((ours.b - theirs.b).abs())
        })
        .collect();
    let forward = DiffStats::from_diffs(forward);
    ensure!(
        forward.within(tolerance),
        "OKLCH → sRGB differs from reference: {forward:?}"
    );

    Ok(reverse)
}
