//! Oklab and LMS cone response
//!
//! Oklab is the Cartesian perceptual space behind OKLCH. It is reached from
//! XYZ through LMS: a linear matrix into cone response, a cube root, and a
//! second matrix into (L, a, b).

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::color::{Oklch, Xyz, normalize_hue};
use crate::math::gamma::{cone_to_linear, cone_to_nonlinear};
use crate::math::matrix::{LMS_TO_OKLAB, LMS_TO_XYZ, OKLAB_TO_LMS, XYZ_TO_LMS};

/// Oklab color coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Oklab {
    /// Lightness (0 to 1)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Oklab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Cartesian → polar
    ///
    /// `C = √(a² + b²)`, `H = atan2(b, a)` in degrees within [0, 360)
    #[inline]
    pub fn to_oklch(&self) -> Oklch {
        Oklch {
            l: self.l,
            c: self.chroma(),
            h: self.hue_degrees(),
        }
    }

    /// Get chroma
    #[inline]
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Get hue angle in degrees (0-360)
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        normalize_hue(self.b.atan2(self.a).to_degrees())
    }

    /// Oklab → nonlinear LMS
    #[inline]
    pub fn to_lms(&self) -> Lms {
        Lms::from_array(OKLAB_TO_LMS.multiply_vec(self.to_array()))
    }

    /// Nonlinear LMS → Oklab
    #[inline]
    pub fn from_lms(lms: Lms) -> Self {
        Self::from_array(LMS_TO_OKLAB.multiply_vec(lms.to_array()))
    }

    /// Oklab → nonlinear LMS → linear LMS → XYZ
    #[inline]
    pub fn to_xyz(&self) -> Xyz {
        let linear = cone_to_linear(self.to_lms());
        Xyz::from_array(LMS_TO_XYZ.multiply_vec(linear.to_array()))
    }

    /// XYZ → linear LMS → nonlinear LMS → Oklab
    #[inline]
    pub fn from_xyz(xyz: Xyz) -> Self {
        let linear = Lms::from_array(XYZ_TO_LMS.multiply_vec(xyz.to_array()));
        Self::from_lms(cone_to_nonlinear(linear))
    }

    /// Euclidean distance (ΔEOK)
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl From<[f64; 3]> for Oklab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Oklab> for [f64; 3] {
    fn from(lab: Oklab) -> Self {
        lab.to_array()
    }
}

/// LMS cone response
///
/// The same struct carries both the linear and the cube-rooted form; which
/// one a value holds is fixed by the function that produced it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Lms {
    /// Long-wavelength cone
    pub l: f64,
    /// Medium-wavelength cone
    pub m: f64,
    /// Short-wavelength cone
    pub s: f64,
}

impl Lms {
    /// Create a new LMS triple
    #[inline]
    pub const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }

    /// Create LMS from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            m: arr[1],
            s: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.m, self.s]
    }
}
