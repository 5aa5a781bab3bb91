//! # tonal-tests
//!
//! Parity and property testing for tonal.
//!
//! This crate provides:
//! - Comparisons against the `palette` crate's Oklab/OKLCH implementation
//! - Accuracy statistics in Oklab distance (ΔEOK)
//! - Seeded sample generators for colors inside and around each gamut
//!
//! ## Test Categories
//!
//! 1. **Reference parity**: sRGB ↔ OKLCH against `palette`
//! 2. **Round trips**: OKLCH → RGB → OKLCH below the gamut boundary
//! 3. **Gamut shape**: in-gamut is monotone in chroma for every hue
//! 4. **Matrix identities**: embedded pairs and kernel inverses
//! 5. **Palette output**: JSON shape and generator invariants

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{DiffStats, delta_e_ok};
pub use patterns::{SamplePattern, generate_rgb, random_oklch_in_gamut};
pub use reference::{compare_with_reference, reference_oklch_to_srgb, reference_srgb_to_oklab};
