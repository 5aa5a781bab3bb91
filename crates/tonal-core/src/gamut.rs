//! Gamut targets and gamut analysis
//!
//! A [`Gamut`] selects the XYZ ↔ device matrices used at the end of the
//! conversion pipeline. Both supported targets share the sRGB transfer
//! function.
//!
//! The analysis functions answer three questions about an OKLCH color:
//! is it reproducible ([`is_in_gamut`]), how far can chroma go at its
//! lightness and hue ([`max_chroma`]), and which is the smallest gamut
//! that holds it ([`classify`]).
//!
//! # Monotonicity assumption
//!
//! [`max_chroma`] bisects on chroma. That is only correct if, for a fixed
//! lightness and hue, a color stays out of gamut once chroma has pushed
//! it out. This holds for the sRGB and Display P3 boundary surfaces (the
//! integration tests scan the full hue circle to confirm it), but it is
//! not a general property of perceptual-to-device mappings. The tightest
//! spot is the sRGB blue primary (h ≈ 264), where the red channel grazes
//! zero along the ray before reaching the vertex.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::color::{MAX_CHROMA, Oklch, normalize_hue};
use crate::convert::oklch_to_linear_rgb;
use crate::error::{Error, Result};
use crate::math::matrix::{
    DISPLAY_P3_TO_XYZ, Matrix3x3, SRGB_TO_XYZ, XYZ_TO_DISPLAY_P3, XYZ_TO_SRGB,
};

/// Default bisection tolerance on chroma
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Hard cap on bisection steps
///
/// At the default tolerance the search needs 19 steps.
pub const MAX_ITERATIONS: usize = 64;

/// Device color space a color is rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Gamut {
    #[default]
    #[serde(rename = "sRGB")]
    Srgb,
    #[serde(rename = "Display P3")]
    DisplayP3,
}

impl Gamut {
    /// Every supported gamut, smallest first
    pub const ALL: [Gamut; 2] = [Gamut::Srgb, Gamut::DisplayP3];

    /// Linear device RGB → XYZ
    #[inline]
    pub const fn linear_to_xyz(&self) -> &'static Matrix3x3 {
        match self {
            Gamut::Srgb => &SRGB_TO_XYZ,
            Gamut::DisplayP3 => &DISPLAY_P3_TO_XYZ,
        }
    }

    /// XYZ → linear device RGB
    #[inline]
    pub const fn xyz_to_linear(&self) -> &'static Matrix3x3 {
        match self {
            Gamut::Srgb => &XYZ_TO_SRGB,
            Gamut::DisplayP3 => &XYZ_TO_DISPLAY_P3,
        }
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Gamut::Srgb => "sRGB",
            Gamut::DisplayP3 => "Display P3",
        }
    }
}

impl fmt::Display for Gamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gamut {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "srgb" | "rgb" => Ok(Gamut::Srgb),
            "displayp3" | "p3" | "dispp3" => Ok(Gamut::DisplayP3),
            _ => Err(Error::UnsupportedGamut(s.to_string())),
        }
    }
}

/// Smallest gamut that contains a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GamutClass {
    #[serde(rename = "sRGB")]
    Srgb,
    #[serde(rename = "Display P3")]
    DisplayP3,
    #[serde(rename = "Out of Display P3")]
    OutOfDisplayP3,
}

impl fmt::Display for GamutClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GamutClass::Srgb => "sRGB",
            GamutClass::DisplayP3 => "Display P3",
            GamutClass::OutOfDisplayP3 => "Out of Display P3",
        })
    }
}

/// Whether `lch` is reproducible in `gamut`
///
/// Achromatic colors are always in gamut. Everything else is converted to
/// linear device RGB and tested against [0, 1]; the transfer function maps
/// [0, 1] onto itself, so the encoded test would give the same answer.
pub fn is_in_gamut(lch: Oklch, gamut: Gamut) -> bool {
    if lch.c == 0.0 {
        return true;
    }
    let [r, g, b] = oklch_to_linear_rgb(lch, gamut).to_array();
    r.min(g).min(b) >= 0.0 && r.max(g).max(b) <= 1.0
}

/// Largest chroma at lightness `l` and hue `h` (degrees) inside `gamut`
///
/// Bisects `[0, MAX_CHROMA]` until the bracket is no wider than `epsilon`
/// and returns the in-gamut side. Non-finite lightness or hue returns 0.
/// If the bracket cannot shrink to `epsilon` within [`MAX_ITERATIONS`]
/// steps (zero, negative or NaN tolerance) the search gives up and
/// returns 0.
pub fn max_chroma(l: f64, h: f64, gamut: Gamut, epsilon: f64) -> f64 {
    if !(l.is_finite() && h.is_finite()) {
        warn!("max_chroma: non-finite input l={l} h={h}");
        return 0.0;
    }
    let h = normalize_hue(h);

    let mut low = 0.0;
    let mut high = MAX_CHROMA;
    for iteration in 0..MAX_ITERATIONS {
        if high - low <= epsilon {
            debug!("max_chroma({gamut}, l={l}, h={h}) = {low} after {iteration} steps");
            return low;
        }
        let mid = (low + high) / 2.0;
        if is_in_gamut(Oklch { l, c: mid, h }, gamut) {
            low = mid;
        } else {
            high = mid;
        }
    }

    warn!("max_chroma: no convergence within {MAX_ITERATIONS} steps (epsilon={epsilon})");
    0.0
}

/// Pull chroma back to the gamut boundary, keeping lightness and hue
pub fn clamp_chroma(lch: Oklch, gamut: Gamut) -> Oklch {
    if is_in_gamut(lch, gamut) {
        lch
    } else {
        lch.with_chroma(max_chroma(lch.l, lch.h, gamut, DEFAULT_EPSILON))
    }
}

/// Smallest supported gamut holding `lch`, tested sRGB first
pub fn classify(lch: Oklch) -> GamutClass {
    if is_in_gamut(lch, Gamut::Srgb) {
        GamutClass::Srgb
    } else if is_in_gamut(lch, Gamut::DisplayP3) {
        GamutClass::DisplayP3
    } else {
        GamutClass::OutOfDisplayP3
    }
}

/// Point of maximum chroma for hue `h`
///
/// Walks lightness down from 1 in `lightness_step` increments, tracking
/// the boundary chroma, and stops as soon as it starts to fall. The
/// returned color sits on the boundary.
pub fn cusp(h: f64, gamut: Gamut, lightness_step: f64) -> Result<Oklch> {
    if !(lightness_step > 0.0 && lightness_step <= 1.0) {
        return Err(Error::InvalidConfig(format!(
            "lightness step must be in (0, 1], got {lightness_step}"
        )));
    }
    let h = normalize_hue(h);
    let steps = (1.0 / lightness_step).floor() as usize;

    let mut peak = Oklch { l: 0.0, c: 0.0, h };
    for i in 0..steps {
        let l = 1.0 - i as f64 * lightness_step;
        let c = max_chroma(l, h, gamut, DEFAULT_EPSILON);
        if c > peak.c {
            peak = Oklch { l, c, h };
        } else if c < peak.c {
            break;
        }
    }
    debug!("cusp({gamut}, h={h}) = l {} c {}", peak.l, peak.c);
    Ok(peak)
}

/// Boundary slice for hue `h`: `samples` lightness values evenly spaced
/// over [0, 1], each paired with its maximum chroma
pub fn boundary(h: f64, gamut: Gamut, samples: usize) -> Result<Vec<Oklch>> {
    if samples < 2 {
        return Err(Error::InvalidConfig(format!(
            "boundary needs at least 2 samples, got {samples}"
        )));
    }
    let h = normalize_hue(h);
    let last = (samples - 1) as f64;
    Ok((0..samples)
        .map(|i| {
            let l = i as f64 / last;
            Oklch {
                l,
                c: max_chroma(l, h, gamut, DEFAULT_EPSILON),
                h,
            }
        })
        .collect())
}
