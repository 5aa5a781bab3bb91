//! Color space types
//!
//! This module provides:
//! - OKLCH (polar perceptual) and Oklab (Cartesian perceptual)
//! - LMS cone response
//! - CIE XYZ tristimulus
//! - Gamma-encoded and linear RGB

pub mod oklab;
pub mod oklch;
pub mod rgb;
pub mod xyz;

pub use oklab::{Lms, Oklab};
pub use oklch::{MAX_CHROMA, Oklch, normalize_hue};
pub use rgb::{LinearRgb, Rgb};
pub use xyz::Xyz;
