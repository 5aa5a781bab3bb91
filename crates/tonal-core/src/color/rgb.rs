//! RGB Color Primitives
//!
//! [`Rgb`] holds gamma-encoded device values and [`LinearRgb`] holds linear
//! light. Neither records its primaries; the [`Gamut`](crate::Gamut) used to
//! produce a value decides whether it is sRGB or Display P3.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::gamma::{delinearize, linearize};

/// Gamma-encoded RGB in floating point (nominally 0.0-1.0)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from 8-bit values (0-255)
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Convert to 8-bit values, rounding to the nearest byte
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        self.to_array()
            .map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// Format as uppercase `RRGGBB` (no leading `#`)
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_u8();
        format!("{r:02X}{g:02X}{b:02X}")
    }

    /// Parse `RRGGBB` or `#RRGGBB`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidHex(hex.to_string()))
        };
        Ok(Self::from_u8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Clamp all components to [0, 1]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self::from_array(self.to_array().map(|v| v.clamp(0.0, 1.0)))
    }

    /// Check if all components are in [0, 1]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        let [r, g, b] = self.to_array();
        r.min(g).min(b) >= 0.0 && r.max(g).max(b) <= 1.0
    }

    /// Decode to linear light
    #[inline]
    pub fn to_linear(&self) -> LinearRgb {
        LinearRgb::from_array(self.to_array().map(linearize))
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White color
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_u8(arr[0], arr[1], arr[2])
    }
}

/// Linear-light RGB (not gamma-encoded)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    /// Create a new linear RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from an array [r, g, b]
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to an array [r, g, b]
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Encode with the sRGB transfer function
    #[inline]
    pub fn to_encoded(&self) -> Rgb {
        Rgb::from_array(self.to_array().map(delinearize))
    }
}
