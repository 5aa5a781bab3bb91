//! Tonal palette generation
//!
//! A palette is a ramp of swatches from black to white. Each swatch takes
//! its lightness from an even grid over [0, 1], its chroma from a
//! triangular profile peaking at `peak_lightness`, and its hue from a
//! forward sweep between two hues.
//!
//! ```text
//! chroma
//!   ^        peak
//!   |        /\
//!   |       /  \
//!   |      /    \
//!   |     /      \
//!   +----+--------+---> lightness
//!        0   pL   1
//! ```
//!
//! Every interior swatch is quantized, classified, and then clamped into
//! sRGB and Display P3 separately, so a palette always carries a
//! displayable value for both targets.

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::color::{Oklch, Rgb, normalize_hue};
use crate::convert::oklch_to_rgb;
use crate::error::{Error, Result};
use crate::gamut::{DEFAULT_EPSILON, Gamut, GamutClass, clamp_chroma, classify, max_chroma};
use crate::math::quantize;

/// Lightness quantization step
pub const LIGHTNESS_STEP: f64 = 0.01;

/// Chroma quantization step
pub const CHROMA_STEP: f64 = 0.001;

/// Hue quantization step, in degrees
pub const HUE_STEP: f64 = 1.0;

/// Smallest accepted `swatch_step`, in percent
pub const MIN_SWATCH_STEP: f64 = 0.01;

/// Largest palette [`PaletteConfig::swatch_count`] will report
pub const MAX_SWATCHES: usize = 10_001;

/// Hue range swept from black to white
///
/// The sweep always runs forward (increasing hue) from `from` to `to`,
/// wrapping through 0 when `to < from`. Equal hues give a single hue.
/// Deserialized ranges are wrapped like [`Hues::new`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "HueFields")]
pub struct Hues {
    pub from: f64,
    pub to: f64,
}

#[derive(Deserialize)]
struct HueFields {
    from: f64,
    to: f64,
}

impl From<HueFields> for Hues {
    fn from(f: HueFields) -> Self {
        Self::new(f.from, f.to)
    }
}

impl Hues {
    /// Create a hue range, taking both ends modulo 360
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from: normalize_hue(from),
            to: normalize_hue(to),
        }
    }

    /// A range that stays on one hue
    pub fn single(hue: f64) -> Self {
        Self::new(hue, hue)
    }

    /// Forward distance from `from` to `to`, in [0, 360)
    pub fn span(&self) -> f64 {
        let (from, to) = (normalize_hue(self.from), normalize_hue(self.to));
        if from <= to { to - from } else { to + 360.0 - from }
    }

    /// Same range moved by `degrees`
    pub fn shifted(&self, degrees: f64) -> Self {
        Self::new(self.from + degrees, self.to + degrees)
    }
}

/// Parameters of a tonal palette
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Lightness spacing in percent; 10 gives 11 swatches
    pub swatch_step: f64,
    /// Lightness at which chroma peaks
    pub peak_lightness: f64,
    /// Chroma at the peak
    pub peak_chroma: f64,
    pub hues: Hues,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            swatch_step: 10.0,
            peak_lightness: 0.6,
            peak_chroma: 0.13,
            hues: Hues::default(),
        }
    }
}

impl PaletteConfig {
    /// Check that every field is in range
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SWATCH_STEP..=100.0).contains(&self.swatch_step) {
            return Err(Error::InvalidConfig(format!(
                "swatch step must be in [{MIN_SWATCH_STEP}, 100], got {}",
                self.swatch_step
            )));
        }
        if !(0.0..=1.0).contains(&self.peak_lightness) {
            return Err(Error::InvalidConfig(format!(
                "peak lightness must be in [0, 1], got {}",
                self.peak_lightness
            )));
        }
        if !(self.peak_chroma.is_finite() && self.peak_chroma >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "peak chroma must be finite and non-negative, got {}",
                self.peak_chroma
            )));
        }
        if !(self.hues.from.is_finite() && self.hues.to.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "hues must be finite, got {:?}",
                self.hues
            )));
        }
        Ok(())
    }

    /// Number of swatches: `floor(100 / swatch_step) + 1`
    ///
    /// Fails for steps that would give fewer than two or more than
    /// [`MAX_SWATCHES`] swatches.
    pub fn swatch_count(&self) -> Result<usize> {
        let intervals = (100.0 / self.swatch_step).floor();
        if !(1.0..MAX_SWATCHES as f64).contains(&intervals) {
            return Err(Error::InvalidConfig(format!(
                "swatch step {} gives {intervals} intervals, expected 1 to {}",
                self.swatch_step,
                MAX_SWATCHES - 1
            )));
        }
        (intervals as usize)
            .checked_add(1)
            .filter(|&n| n <= MAX_SWATCHES)
            .ok_or_else(|| {
                Error::InvalidConfig(format!("too many swatches for step {}", self.swatch_step))
            })
    }
}

/// Rounding applied to each swatch's coordinates
///
/// A non-positive step disables rounding for that channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantization {
    pub lightness_step: f64,
    pub chroma_step: f64,
    pub hue_step: f64,
}

impl Default for Quantization {
    fn default() -> Self {
        Self {
            lightness_step: LIGHTNESS_STEP,
            chroma_step: CHROMA_STEP,
            hue_step: HUE_STEP,
        }
    }
}

/// One palette entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    /// Requested color, possibly outside both gamuts
    pub oklch: Oklch,
    /// Requested color with chroma clamped into sRGB
    pub srgb_oklch: Oklch,
    pub srgb: Rgb,
    pub srgb_hex: String,
    /// Requested color with chroma clamped into Display P3
    pub p3_oklch: Oklch,
    pub p3: Rgb,
    pub p3_hex: String,
    /// Smallest gamut holding the requested color
    pub gamut: GamutClass,
}

impl Swatch {
    fn endpoint(oklch: Oklch, rgb: Rgb) -> Self {
        Self {
            oklch,
            srgb_oklch: oklch,
            srgb: rgb,
            srgb_hex: rgb.to_hex(),
            p3_oklch: oklch,
            p3: rgb,
            p3_hex: rgb.to_hex(),
            gamut: GamutClass::Srgb,
        }
    }

    /// Build a swatch for an already-quantized color
    pub fn from_oklch(oklch: Oklch) -> Self {
        let gamut = classify(oklch);
        let (srgb_oklch, srgb) = fit(oklch, Gamut::Srgb);
        let (p3_oklch, p3) = fit(oklch, Gamut::DisplayP3);
        Self {
            oklch,
            srgb_oklch,
            srgb,
            srgb_hex: srgb.to_hex(),
            p3_oklch,
            p3,
            p3_hex: p3.to_hex(),
            gamut,
        }
    }

    /// Clamped device color for `gamut`
    pub fn rgb(&self, gamut: Gamut) -> Rgb {
        match gamut {
            Gamut::Srgb => self.srgb,
            Gamut::DisplayP3 => self.p3,
        }
    }

    /// Hex string for `gamut`
    pub fn hex(&self, gamut: Gamut) -> &str {
        match gamut {
            Gamut::Srgb => &self.srgb_hex,
            Gamut::DisplayP3 => &self.p3_hex,
        }
    }
}

fn fit(oklch: Oklch, gamut: Gamut) -> (Oklch, Rgb) {
    let clamped = clamp_chroma(oklch, gamut);
    // bisection stops just inside the boundary; clamp absorbs rounding noise
    (clamped, oklch_to_rgb(clamped, gamut).clamp())
}

/// A generated palette and the configuration that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub config: PaletteConfig,
    pub swatches: Vec<Swatch>,
}

impl Palette {
    /// Generate a palette one swatch at a time
    pub fn generate(config: PaletteConfig, quantization: Quantization) -> Result<Self> {
        config.validate()?;
        let count = config.swatch_count()?;
        let swatches: Vec<Swatch> = (0..count)
            .map(|n| swatch_at(&config, &quantization, n, count))
            .collect();
        debug!(
            "generated {} swatches (peak l={} c={}, hues {:?})",
            swatches.len(),
            config.peak_lightness,
            config.peak_chroma,
            config.hues
        );
        Ok(Self { config, swatches })
    }

    /// Generate a palette with swatches computed in parallel
    ///
    /// Produces exactly the same swatches as [`Palette::generate`].
    pub fn generate_par(config: PaletteConfig, quantization: Quantization) -> Result<Self> {
        config.validate()?;
        let count = config.swatch_count()?;
        let swatches: Vec<Swatch> = (0..count)
            .into_par_iter()
            .map(|n| swatch_at(&config, &quantization, n, count))
            .collect();
        debug!("generated {} swatches in parallel", swatches.len());
        Ok(Self { config, swatches })
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Count of swatches per gamut class
    pub fn gamut_counts(&self) -> [(GamutClass, usize); 3] {
        [GamutClass::Srgb, GamutClass::DisplayP3, GamutClass::OutOfDisplayP3]
            .map(|class| (class, self.swatches.iter().filter(|s| s.gamut == class).count()))
    }
}

fn swatch_at(config: &PaletteConfig, q: &Quantization, n: usize, count: usize) -> Swatch {
    // ends are picked by index so a lightness step that does not divide 1
    // still lands on black and white
    let l = if n == 0 {
        0.0
    } else if n + 1 == count {
        1.0
    } else {
        quantize(n as f64 / (count - 1) as f64, q.lightness_step)
    };

    let swatch = if l <= 0.0 {
        Swatch::endpoint(Oklch::BLACK, Rgb::BLACK)
    } else if l >= 1.0 {
        Swatch::endpoint(Oklch::WHITE, Rgb::WHITE)
    } else {
        let c = quantize(
            chroma_for_lightness(l, config.peak_lightness, config.peak_chroma),
            q.chroma_step,
        );
        let h = normalize_hue(quantize(hue_for_lightness(l, &config.hues), q.hue_step));
        Swatch::from_oklch(Oklch { l, c, h })
    };

    trace!(
        "swatch {n}: {:?} {} srgb #{} p3 #{}",
        swatch.oklch, swatch.gamut, swatch.srgb_hex, swatch.p3_hex
    );
    swatch
}

/// Triangular chroma profile
///
/// Rises linearly from 0 at black to `peak_chroma` at `peak_lightness`,
/// then falls linearly to 0 at white. A peak at either end leaves a single
/// slope.
pub fn chroma_for_lightness(l: f64, peak_lightness: f64, peak_chroma: f64) -> f64 {
    if peak_lightness == 1.0 {
        peak_chroma * l
    } else if peak_lightness == 0.0 {
        peak_chroma * (1.0 - l)
    } else if l <= peak_lightness {
        peak_chroma / peak_lightness * l
    } else {
        peak_chroma / (1.0 - peak_lightness) * (1.0 - l)
    }
}

/// Hue reached at lightness `l` on the forward sweep through `hues`
pub fn hue_for_lightness(l: f64, hues: &Hues) -> f64 {
    normalize_hue(normalize_hue(hues.from) + l * hues.span())
}

/// Largest chroma the sweep can reach at `peak_lightness` in `gamut`,
/// rounded down to [`CHROMA_STEP`]
///
/// Feeding this back as `peak_chroma` makes the peak swatch land on the
/// gamut boundary.
pub fn peak_chroma_for_hues(peak_lightness: f64, hues: &Hues, gamut: Gamut) -> f64 {
    let h = hue_for_lightness(peak_lightness, hues);
    let c = max_chroma(peak_lightness, h, gamut, DEFAULT_EPSILON);
    (c / CHROMA_STEP).floor() * CHROMA_STEP
}
