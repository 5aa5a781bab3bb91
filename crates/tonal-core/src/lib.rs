//! # tonal - OKLCH color engine
//!
//! Perceptual color conversion, gamut analysis and tonal palette
//! generation for sRGB and Display P3.
//!
//! ## Features
//!
//! - **Conversion**: OKLCH ↔ Oklab ↔ LMS ↔ XYZ ↔ linear RGB ↔ RGB, scalar
//!   and batch (runtime-dispatched AVX2 / SSE4.1 / NEON kernels)
//! - **Gamut analysis**: membership, maximum chroma by bisection, chroma
//!   clamping, classification, cusp and boundary slices
//! - **Palettes**: lightness ramps with a triangular chroma profile and a
//!   forward hue sweep, clamped into both gamuts
//! - **Contrast**: APCA Lc values and palette contrast matrices
//! - **Schemes**: theme roles and light/dark token resolution
//!
//! ## Quick Start
//!
//! ```no_run
//! use tonal_core::{Gamut, Hues, Oklch, Palette, PaletteConfig, Quantization};
//!
//! // Convert a color
//! let rgb = tonal_core::oklch_to_srgb(Oklch::new(0.7, 0.1, 200.0));
//! println!("{rgb}");
//!
//! // How vivid can this hue get at L = 0.8?
//! let c = tonal_core::max_chroma(0.8, 120.0, Gamut::DisplayP3, tonal_core::DEFAULT_EPSILON);
//!
//! // A blue-to-violet ramp
//! let config = PaletteConfig {
//!     hues: Hues::new(250.0, 300.0),
//!     ..PaletteConfig::default()
//! };
//! let palette = Palette::generate(config, Quantization::default()).unwrap();
//! for swatch in &palette.swatches {
//!     println!("{} {} {}", swatch.srgb_hex, swatch.p3_hex, swatch.gamut);
//! }
//! ```

pub mod color;
pub mod contrast;
pub mod convert;
pub mod error;
pub mod gamut;
pub mod math;
pub mod palette;
pub mod scheme;
pub mod simd;

pub use color::{Lms, LinearRgb, MAX_CHROMA, Oklab, Oklch, Rgb, Xyz, normalize_hue};
pub use contrast::{ContrastMatrix, apca_contrast, apca_luminance, contrast, contrast_matrix};
pub use convert::{
    display_p3_to_oklch, oklab_to_linear_rgb, oklab_to_xyz, oklch_to_display_p3,
    oklch_to_linear_rgb, oklch_to_rgb, oklch_to_rgb_batch, oklch_to_srgb, rgb_to_oklab,
    rgb_to_oklch, rgb_to_oklch_batch, rgb_to_rgb, srgb_to_oklch, xyz_to_oklab,
};
pub use error::{Error, Result};
pub use gamut::{
    DEFAULT_EPSILON, Gamut, GamutClass, boundary, clamp_chroma, classify, cusp, is_in_gamut,
    max_chroma,
};
pub use math::{Matrix3x3, invert, quantize};
pub use palette::{
    Hues, Palette, PaletteConfig, Quantization, Swatch, chroma_for_lightness, hue_for_lightness,
    peak_chroma_for_hues,
};
pub use scheme::{Mode, RoleConfig, SchemeColor, ThemeRole, role_palette_config, scheme};

/// Version of tonal
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Palette>();
        assert_send_sync::<SchemeColor>();
        assert_send_sync::<ContrastMatrix>();
        assert_send_sync::<Error>();
    }
}
