//! In-place per-channel kernels
//!
//! These run over the intermediate buffers of the batch converters, so they
//! work in place and share their scalar definitions with [`crate::math`].

use multiversion::multiversion;

use crate::math::gamma::{delinearize, linearize};

/// sRGB encode (linear → encoded), sign-preserving
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn apply_srgb_encode_batch(values: &mut [[f64; 3]]) {
    for v in values.iter_mut().flatten() {
        *v = delinearize(*v);
    }
}

/// sRGB decode (encoded → linear), sign-preserving
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn apply_srgb_decode_batch(values: &mut [[f64; 3]]) {
    for v in values.iter_mut().flatten() {
        *v = linearize(*v);
    }
}

/// Cube every channel (nonlinear LMS → linear LMS)
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn apply_cube_batch(values: &mut [[f64; 3]]) {
    for v in values.iter_mut().flatten() {
        *v = *v * *v * *v;
    }
}

/// Real cube root of every channel (linear LMS → nonlinear LMS)
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn apply_cbrt_batch(values: &mut [[f64; 3]]) {
    for v in values.iter_mut().flatten() {
        *v = v.cbrt();
    }
}
