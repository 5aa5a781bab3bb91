//! Color space conversion pipelines
//!
//! ```text
//! forward:  OKLCH → Oklab → LMS' → LMS → XYZ → linear RGB → RGB
//!                  polar    M⁻¹    x³    M⁻¹     gamut      γ
//! reverse:  RGB → linear RGB → XYZ → LMS → LMS' → Oklab → OKLCH
//!               γ⁻¹         gamut    M    ∛x     M      polar
//! ```
//!
//! Nothing in here rounds or clamps. Out-of-gamut colors come out with
//! components outside [0, 1]; deciding what to do with them is the job of
//! [`crate::gamut`].

use bytemuck::{cast_slice, cast_slice_mut};

use crate::color::{LinearRgb, Oklab, Oklch, Rgb, Xyz};
use crate::error::{Error, Result};
use crate::gamut::Gamut;
use crate::math::matrix::{LMS_TO_OKLAB, LMS_TO_XYZ, OKLAB_TO_LMS, XYZ_TO_LMS};
use crate::simd;

/// Oklab → XYZ
#[inline]
pub fn oklab_to_xyz(lab: Oklab) -> Xyz {
    lab.to_xyz()
}

/// XYZ → Oklab
#[inline]
pub fn xyz_to_oklab(xyz: Xyz) -> Oklab {
    Oklab::from_xyz(xyz)
}

/// Oklab → linear device RGB
#[inline]
pub fn oklab_to_linear_rgb(lab: Oklab, gamut: Gamut) -> LinearRgb {
    let xyz = lab.to_xyz();
    LinearRgb::from_array(gamut.xyz_to_linear().multiply_vec(xyz.to_array()))
}

/// OKLCH → linear device RGB
#[inline]
pub fn oklch_to_linear_rgb(lch: Oklch, gamut: Gamut) -> LinearRgb {
    oklab_to_linear_rgb(lch.to_oklab(), gamut)
}

/// OKLCH → gamma-encoded device RGB
#[inline]
pub fn oklch_to_rgb(lch: Oklch, gamut: Gamut) -> Rgb {
    oklch_to_linear_rgb(lch, gamut).to_encoded()
}

/// Gamma-encoded device RGB → Oklab
#[inline]
pub fn rgb_to_oklab(rgb: Rgb, gamut: Gamut) -> Oklab {
    let linear = rgb.to_linear();
    let xyz = Xyz::from_array(gamut.linear_to_xyz().multiply_vec(linear.to_array()));
    Oklab::from_xyz(xyz)
}

/// Gamma-encoded device RGB → OKLCH
#[inline]
pub fn rgb_to_oklch(rgb: Rgb, gamut: Gamut) -> Oklch {
    rgb_to_oklab(rgb, gamut).to_oklch()
}

/// OKLCH → sRGB
#[inline]
pub fn oklch_to_srgb(lch: Oklch) -> Rgb {
    oklch_to_rgb(lch, Gamut::Srgb)
}

/// sRGB → OKLCH
#[inline]
pub fn srgb_to_oklch(rgb: Rgb) -> Oklch {
    rgb_to_oklch(rgb, Gamut::Srgb)
}

/// OKLCH → Display P3
#[inline]
pub fn oklch_to_display_p3(lch: Oklch) -> Rgb {
    oklch_to_rgb(lch, Gamut::DisplayP3)
}

/// Display P3 → OKLCH
#[inline]
pub fn display_p3_to_oklch(rgb: Rgb) -> Oklch {
    rgb_to_oklch(rgb, Gamut::DisplayP3)
}

/// Re-express a device color from one gamut's primaries in another's
///
/// Goes through XYZ only, so the result may fall outside [0, 1] when the
/// target gamut is the smaller one.
pub fn rgb_to_rgb(rgb: Rgb, from: Gamut, to: Gamut) -> Rgb {
    if from == to {
        return rgb;
    }
    let xyz = from.linear_to_xyz().multiply_vec(rgb.to_linear().to_array());
    LinearRgb::from_array(to.xyz_to_linear().multiply_vec(xyz)).to_encoded()
}

/// Convert a slice of OKLCH colors to device RGB
///
/// `output` must be at least as long as `input`; extra entries are left
/// untouched.
pub fn oklch_to_rgb_batch(input: &[Oklch], gamut: Gamut, output: &mut [Rgb]) -> Result<()> {
    if output.len() < input.len() {
        return Err(Error::BufferSize {
            expected: input.len(),
            actual: output.len(),
        });
    }

    let lab: Vec<Oklab> = input.iter().map(Oklch::to_oklab).collect();
    let mut lms = vec![[0.0; 3]; input.len()];
    simd::matrix_multiply_vec3_batch(&OKLAB_TO_LMS.m, cast_slice(&lab), &mut lms);
    simd::apply_cube_batch(&mut lms);

    let lms_to_device = gamut.xyz_to_linear().multiply(&LMS_TO_XYZ);
    let out: &mut [[f64; 3]] = cast_slice_mut(&mut output[..input.len()]);
    simd::matrix_multiply_vec3_batch(&lms_to_device.m, &lms, out);
    simd::apply_srgb_encode_batch(out);
    Ok(())
}

/// Convert a slice of device RGB colors to OKLCH
///
/// `output` must be at least as long as `input`.
pub fn rgb_to_oklch_batch(input: &[Rgb], gamut: Gamut, output: &mut [Oklch]) -> Result<()> {
    if output.len() < input.len() {
        return Err(Error::BufferSize {
            expected: input.len(),
            actual: output.len(),
        });
    }

    let mut linear: Vec<[f64; 3]> = cast_slice(input).to_vec();
    simd::apply_srgb_decode_batch(&mut linear);

    let device_to_lms = XYZ_TO_LMS.multiply(gamut.linear_to_xyz());
    let mut lms = vec![[0.0; 3]; input.len()];
    simd::matrix_multiply_vec3_batch(&device_to_lms.m, &linear, &mut lms);
    simd::apply_cbrt_batch(&mut lms);

    let mut lab = vec![[0.0; 3]; input.len()];
    simd::matrix_multiply_vec3_batch(&LMS_TO_OKLAB.m, &lms, &mut lab);
    for (dst, src) in output.iter_mut().zip(&lab) {
        *dst = Oklab::from_array(*src).to_oklch();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_and_black() {
        for gamut in Gamut::ALL {
            let white = oklch_to_rgb(Oklch::WHITE, gamut);
            assert!(white.approx_eq(&Rgb::WHITE, 1e-4), "{gamut}: {white:?}");

            let black = oklch_to_rgb(Oklch::BLACK, gamut);
            assert!(black.approx_eq(&Rgb::BLACK, 1e-12), "{gamut}: {black:?}");
        }
    }

    #[test]
    fn test_xyz_entry_points() {
        let white = oklab_to_xyz(Oklab::new(1.0, 0.0, 0.0));
        assert!((white.luminance() - 1.0).abs() < 1e-6, "{white:?}");
        assert!(white.approx_eq(&Xyz::new(0.95047, 1.0, 1.0883), 1e-4), "{white:?}");

        let lab = xyz_to_oklab(white);
        assert!(lab.distance(&Oklab::new(1.0, 0.0, 0.0)) < 1e-9);
    }

    #[test]
    fn test_known_srgb_values() {
        // Reference values from the Oklab reference implementation
        let red = srgb_to_oklch(Rgb::new(1.0, 0.0, 0.0));
        assert!((red.l - 0.62796).abs() < 1e-3, "{red:?}");
        assert!((red.c - 0.25768).abs() < 1e-3, "{red:?}");
        assert!((red.h - 29.23).abs() < 0.1, "{red:?}");

        let blue = srgb_to_oklch(Rgb::new(0.0, 0.0, 1.0));
        assert!((blue.l - 0.45201).abs() < 1e-3, "{blue:?}");
        assert!((blue.c - 0.31321).abs() < 1e-3, "{blue:?}");
        assert!((blue.h - 264.05).abs() < 0.1, "{blue:?}");
    }

    #[test]
    fn test_roundtrip_srgb() {
        let lch = Oklch::new(0.7, 0.1, 200.0);
        let back = srgb_to_oklch(oklch_to_srgb(lch));
        assert!(lch.approx_eq(&back, 1e-4), "{lch:?} vs {back:?}");
    }

    #[test]
    fn test_roundtrip_display_p3() {
        let lch = Oklch::new(0.85, 0.3, 145.0);
        let back = display_p3_to_oklch(oklch_to_display_p3(lch));
        assert!(lch.approx_eq(&back, 1e-4), "{lch:?} vs {back:?}");
    }

    #[test]
    fn test_out_of_gamut_is_not_clamped() {
        let rgb = oklch_to_srgb(Oklch::new(0.85, 0.35, 145.0));
        assert!(!rgb.is_in_gamut());
    }

    #[test]
    fn test_rgb_to_rgb() {
        let srgb_red = Rgb::new(1.0, 0.0, 0.0);
        let p3 = rgb_to_rgb(srgb_red, Gamut::Srgb, Gamut::DisplayP3);
        // sRGB red sits inside P3, away from its red primary
        assert!(p3.is_in_gamut());
        assert!(p3.r < 1.0 && p3.g > 0.0);

        let back = rgb_to_rgb(p3, Gamut::DisplayP3, Gamut::Srgb);
        assert!(back.approx_eq(&srgb_red, 1e-9));
        assert_eq!(rgb_to_rgb(srgb_red, Gamut::Srgb, Gamut::Srgb), srgb_red);
    }

    #[test]
    fn test_batch_matches_scalar() {
        let colors: Vec<Oklch> = (0..50)
            .map(|i| Oklch::new(i as f64 / 49.0, 0.12, i as f64 * 7.3))
            .collect();

        for gamut in Gamut::ALL {
            let mut rgb = vec![Rgb::default(); colors.len()];
            oklch_to_rgb_batch(&colors, gamut, &mut rgb).unwrap();
            for (lch, batch) in colors.iter().zip(&rgb) {
                let scalar = oklch_to_rgb(*lch, gamut);
                assert!(batch.approx_eq(&scalar, 1e-9), "{lch:?}: {batch:?} vs {scalar:?}");
            }

            let mut back = vec![Oklch::default(); rgb.len()];
            rgb_to_oklch_batch(&rgb, gamut, &mut back).unwrap();
            for (batch, rgb) in back.iter().zip(&rgb) {
                let scalar = rgb_to_oklch(*rgb, gamut);
                assert!(batch.approx_eq(&scalar, 1e-9), "{batch:?} vs {scalar:?}");
            }
        }
    }

    #[test]
    fn test_batch_rejects_short_output() {
        let colors = [Oklch::new(0.5, 0.1, 10.0); 4];
        let mut rgb = [Rgb::default(); 3];
        assert_eq!(
            oklch_to_rgb_batch(&colors, Gamut::Srgb, &mut rgb),
            Err(Error::BufferSize {
                expected: 4,
                actual: 3
            })
        );
    }
}
