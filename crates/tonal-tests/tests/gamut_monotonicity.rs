//! Shape of the gamut boundary along constant-(L, H) rays
//!
//! Chroma bisection is only valid if the in-gamut set along each ray is a
//! single interval starting at 0. Scan the whole hue circle to check.

use rayon::prelude::*;
use tonal_core::{
    DEFAULT_EPSILON, Gamut, GamutClass, MAX_CHROMA, Oklch, boundary, classify, cusp,
    is_in_gamut, max_chroma,
};

const CHROMA_SCAN_STEP: f64 = 0.002;

fn lightness_grid() -> impl Iterator<Item = f64> {
    (1..=19).map(|i| i as f64 * 0.05)
}

#[test_log::test]
fn test_in_gamut_is_a_prefix_of_every_ray() {
    for gamut in Gamut::ALL {
        let violations: Vec<(f64, f64, f64)> = (0..360)
            .into_par_iter()
            .flat_map_iter(|hue| {
                let h = hue as f64;
                lightness_grid().filter_map(move |l| {
                    let mut left = false;
                    let steps = (MAX_CHROMA / CHROMA_SCAN_STEP) as usize;
                    for i in 0..=steps {
                        let c = i as f64 * CHROMA_SCAN_STEP;
                        let inside = is_in_gamut(Oklch::new(l, c, h), gamut);
                        if !inside {
                            left = true;
                        } else if left {
                            return Some((l, c, h));
                        }
                    }
                    None
                })
            })
            .collect();
        assert!(violations.is_empty(), "{gamut}: re-entry at {violations:?}");
    }
}

#[test]
fn test_max_chroma_brackets_boundary() {
    for gamut in Gamut::ALL {
        for hue in (0..360).step_by(15) {
            let h = hue as f64;
            for l in lightness_grid() {
                let c = max_chroma(l, h, gamut, DEFAULT_EPSILON);
                assert!(is_in_gamut(Oklch::new(l, c, h), gamut), "{gamut} l={l} h={h} c={c}");
                if c + 1e-5 < MAX_CHROMA {
                    assert!(
                        !is_in_gamut(Oklch::new(l, c + 1e-5, h), gamut),
                        "{gamut} l={l} h={h} c={c}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_display_p3_contains_srgb() {
    for hue in (0..360).step_by(10) {
        let h = hue as f64;
        for l in lightness_grid() {
            let srgb = max_chroma(l, h, Gamut::Srgb, DEFAULT_EPSILON);
            let p3 = max_chroma(l, h, Gamut::DisplayP3, DEFAULT_EPSILON);
            assert!(p3 + DEFAULT_EPSILON >= srgb, "l={l} h={h}: {p3} < {srgb}");
            assert_eq!(classify(Oklch::new(l, srgb, h)), GamutClass::Srgb);
        }
    }
}

#[test]
fn test_cusp_is_on_the_boundary_peak() {
    for gamut in Gamut::ALL {
        for hue in (0..360).step_by(30) {
            let h = hue as f64;
            let peak = cusp(h, gamut, 0.01).unwrap();
            let slice = boundary(h, gamut, 101).unwrap();
            let best = slice.iter().map(|p| p.c).fold(0.0, f64::max);
            // the cusp walk is on the same 0.01 grid as the slice
            assert!((peak.c - best).abs() < 1e-5, "{gamut} h={h}: {peak:?} vs {best}");
        }
    }
}
