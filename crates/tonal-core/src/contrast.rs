//! APCA lightness contrast
//!
//! Implements the APCA-W3 0.0.98G formula: screen luminance from
//! gamma-encoded device RGB, soft clamp near black, then separate power
//! curves for dark-on-light and light-on-dark polarity. Results are Lc
//! values: positive for dark text on a light background, negative for
//! the reverse, roughly ±106 at the extremes.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::gamut::Gamut;
use crate::palette::Palette;

const MAIN_TRC: f64 = 2.4;

const SRGB_COEFFS: [f64; 3] = [0.2126729, 0.7151522, 0.0721750];
const DISPLAY_P3_COEFFS: [f64; 3] = [0.2289829594805780, 0.6917492625852380, 0.0792677779341829];

const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_TXT: f64 = 0.62;
const REV_BG: f64 = 0.65;

const BLACK_THRESHOLD: f64 = 0.022;
const BLACK_CLAMP: f64 = 1.414;
const SCALE: f64 = 1.14;
const LOW_OFFSET: f64 = 0.027;
const LOW_CLIP: f64 = 0.1;
const DELTA_Y_MIN: f64 = 0.0005;

/// Screen luminance Y of a gamma-encoded color
///
/// APCA uses a plain 2.4 power curve rather than the piecewise sRGB
/// transfer function.
pub fn apca_luminance(rgb: Rgb, gamut: Gamut) -> f64 {
    let coeffs = match gamut {
        Gamut::Srgb => SRGB_COEFFS,
        Gamut::DisplayP3 => DISPLAY_P3_COEFFS,
    };
    rgb.to_array()
        .iter()
        .zip(coeffs)
        .map(|(v, k)| k * v.max(0.0).powf(MAIN_TRC))
        .sum()
}

fn soft_clamp(y: f64) -> f64 {
    if y > BLACK_THRESHOLD {
        y
    } else {
        y + (BLACK_THRESHOLD - y).powf(BLACK_CLAMP)
    }
}

/// Lc contrast of text luminance `text_y` over background luminance
/// `background_y`
///
/// Inputs outside [0, 1.1] (or NaN) give 0, as do pairs too close to
/// tell apart.
pub fn apca_contrast(text_y: f64, background_y: f64) -> f64 {
    let valid = |y: f64| (0.0..=1.1).contains(&y);
    if !(valid(text_y) && valid(background_y)) {
        return 0.0;
    }

    let txt = soft_clamp(text_y);
    let bg = soft_clamp(background_y);
    if (bg - txt).abs() < DELTA_Y_MIN {
        return 0.0;
    }

    let lc = if bg > txt {
        let sapc = (bg.powf(NORM_BG) - txt.powf(NORM_TXT)) * SCALE;
        if sapc < LOW_CLIP { 0.0 } else { sapc - LOW_OFFSET }
    } else {
        let sapc = (bg.powf(REV_BG) - txt.powf(REV_TXT)) * SCALE;
        if sapc > -LOW_CLIP { 0.0 } else { sapc + LOW_OFFSET }
    };
    lc * 100.0
}

/// Lc contrast between two device colors
pub fn contrast(foreground: Rgb, background: Rgb, gamut: Gamut) -> f64 {
    apca_contrast(
        apca_luminance(foreground, gamut),
        apca_luminance(background, gamut),
    )
}

/// Rounded Lc for every foreground/background pair of a palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastMatrix {
    pub gamut: Gamut,
    /// `values[fg][bg]`
    pub values: Vec<Vec<i32>>,
}

impl ContrastMatrix {
    /// Lc of swatch `fg` drawn on swatch `bg`
    pub fn get(&self, fg: usize, bg: usize) -> Option<i32> {
        self.values.get(fg)?.get(bg).copied()
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }
}

/// Contrast of every swatch against every other, using each swatch's
/// clamped color in `gamut`
pub fn contrast_matrix(palette: &Palette, gamut: Gamut) -> ContrastMatrix {
    let luminance: Vec<f64> = palette
        .swatches
        .iter()
        .map(|s| apca_luminance(s.rgb(gamut), gamut))
        .collect();

    let values = luminance
        .iter()
        .map(|&fg| {
            luminance
                .iter()
                .map(|&bg| apca_contrast(fg, bg).round() as i32)
                .collect()
        })
        .collect();

    ContrastMatrix { gamut, values }
}
