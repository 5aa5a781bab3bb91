//! Transfer functions
//!
//! This module provides:
//! - the sRGB transfer function (shared by sRGB and Display P3)
//! - the cube / cube-root response between linear and nonlinear LMS
//!
//! Every function is sign-preserving. Intermediate values routinely leave
//! [0, 1] during conversion and must survive the trip unchanged.

use crate::color::Lms;

/// Encoded threshold below which the sRGB curve is linear
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Linear-light threshold below which the sRGB curve is linear
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// sRGB gamma decode (encoded → linear)
///
/// Uses the IEC 61966-2-1 transfer function, mirrored for negative input.
#[inline]
pub fn linearize(encoded: f64) -> f64 {
    let abs = encoded.abs();
    if abs <= DECODE_THRESHOLD {
        encoded / 12.92
    } else {
        ((abs + 0.055) / 1.055).powf(2.4).copysign(encoded)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Inverse of [`linearize`], mirrored for negative input.
#[inline]
pub fn delinearize(linear: f64) -> f64 {
    let abs = linear.abs();
    if abs > ENCODE_THRESHOLD {
        (1.055 * abs.powf(1.0 / 2.4) - 0.055).copysign(linear)
    } else {
        12.92 * linear
    }
}

/// Nonlinear LMS → linear LMS (cube each component)
#[inline]
pub fn cone_to_linear(lms: Lms) -> Lms {
    Lms::new(lms.l * lms.l * lms.l, lms.m * lms.m * lms.m, lms.s * lms.s * lms.s)
}

/// Linear LMS → nonlinear LMS (real cube root of each component)
#[inline]
pub fn cone_to_nonlinear(lms: Lms) -> Lms {
    Lms::new(lms.l.cbrt(), lms.m.cbrt(), lms.s.cbrt())
}
