//! Mathematical operations for color conversion
//!
//! This module provides foundational math operations used throughout tonal:
//! - NxN matrix inversion and 3x3 matrix products
//! - sRGB transfer function and LMS cube response
//! - Step quantization

pub mod gamma;
pub mod matrix;
pub mod quantize;

pub use gamma::{cone_to_linear, cone_to_nonlinear, delinearize, linearize};
pub use matrix::{Matrix3x3, invert};
pub use quantize::quantize;
