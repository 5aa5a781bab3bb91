//! OKLCH Color Space
//!
//! OKLCH is the polar form of Oklab:
//!
//! - L: Lightness (0 = black, 1 = white)
//! - C: Chroma (0 = gray, sRGB tops out near 0.32, Display P3 near 0.37)
//! - H: Hue angle in degrees [0, 360)

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::color::Oklab;

/// Upper bound on chroma for any supported gamut
pub const MAX_CHROMA: f64 = 0.4;

/// Wrap a hue in degrees into [0, 360)
///
/// Non-finite hues become 0.
#[inline]
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let h = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative input
    if h >= 360.0 { 0.0 } else { h }
}

/// OKLCH color coordinates
///
/// Deserializing goes through [`Oklch::new`], so the hue is always wrapped.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "OklchFields")]
pub struct Oklch {
    /// Lightness (0 to 1)
    pub l: f64,
    /// Chroma (0 to [`MAX_CHROMA`])
    pub c: f64,
    /// Hue in degrees (0 to 360)
    pub h: f64,
}

#[derive(Deserialize)]
struct OklchFields {
    l: f64,
    c: f64,
    h: f64,
}

impl From<OklchFields> for Oklch {
    fn from(f: OklchFields) -> Self {
        Self::new(f.l, f.c, f.h)
    }
}

impl Oklch {
    /// Create a new OKLCH color, taking the hue modulo 360
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }

    /// Create OKLCH from an array
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }

    /// Polar → Cartesian
    ///
    /// `a = C·cos(H)`, `b = C·sin(H)`
    #[inline]
    pub fn to_oklab(&self) -> Oklab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Oklab::new(self.l, self.c * cos, self.c * sin)
    }

    /// Same color with a different chroma
    #[inline]
    pub fn with_chroma(&self, c: f64) -> Self {
        Self { c, ..*self }
    }

    /// Pin lightness into [0, 1] and chroma into [0, [`MAX_CHROMA`]]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self {
            l: self.l.clamp(0.0, 1.0),
            c: self.c.clamp(0.0, MAX_CHROMA),
            h: self.h,
        }
    }

    /// Check if approximately equal to another OKLCH color
    ///
    /// Hue is compared on the circle, so 359.99 and 0.01 are close.
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let dh = (self.h - other.h).abs();
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && dh.min(360.0 - dh) < epsilon
    }

    /// Black
    pub const BLACK: Self = Self {
        l: 0.0,
        c: 0.0,
        h: 0.0,
    };

    /// White
    pub const WHITE: Self = Self {
        l: 1.0,
        c: 0.0,
        h: 0.0,
    };
}

impl From<[f64; 3]> for Oklch {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Oklch> for [f64; 3] {
    fn from(lch: Oklch) -> Self {
        lch.to_array()
    }
}
