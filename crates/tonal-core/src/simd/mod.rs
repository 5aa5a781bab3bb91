//! Batch kernels with runtime CPU dispatch
//!
//! Every function here is compiled for several instruction sets through
//! `multiversion` and picks the best one at runtime. Each kernel is a plain
//! loop over `[f64; 3]` triples; [`crate::convert`] reinterprets its color
//! slices as triples with `bytemuck` before calling in.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON

mod gamma;
mod matrix;

pub use gamma::{
    apply_cbrt_batch, apply_cube_batch, apply_srgb_decode_batch, apply_srgb_encode_batch,
};
pub use matrix::matrix_multiply_vec3_batch;

/// Name of the widest instruction set the dispatcher will pick on this CPU
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}
