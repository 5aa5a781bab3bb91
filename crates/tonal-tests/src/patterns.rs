//! Sample generation
//!
//! All random patterns are seeded so failures reproduce.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tonal_core::{DEFAULT_EPSILON, Gamut, Oklch, Rgb, max_chroma};

/// Device-space sample sets
#[derive(Debug, Clone, Copy)]
pub enum SamplePattern {
    /// RGB cube corners (8 colors)
    ColorCube,
    /// Evenly spaced grid with `n` steps per channel
    Grid(usize),
    /// Grayscale ramp with `n` steps
    Grayscale(usize),
    /// Uniform random colors with seed
    Random { seed: u64, count: usize },
}

/// Generate gamma-encoded RGB samples in [0, 1]
pub fn generate_rgb(pattern: SamplePattern) -> Vec<Rgb> {
    match pattern {
        SamplePattern::ColorCube => (0..8)
            .map(|i| Rgb::new((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64))
            .collect(),
        SamplePattern::Grid(n) => {
            let steps = n.max(2);
            let last = (steps - 1) as f64;
            let mut out = Vec::with_capacity(steps * steps * steps);
            for r in 0..steps {
                for g in 0..steps {
                    for b in 0..steps {
                        out.push(Rgb::new(r as f64 / last, g as f64 / last, b as f64 / last));
                    }
                }
            }
            out
        }
        SamplePattern::Grayscale(n) => {
            let last = (n.max(2) - 1) as f64;
            (0..n.max(2))
                .map(|i| {
                    let v = i as f64 / last;
                    Rgb::new(v, v, v)
                })
                .collect()
        }
        SamplePattern::Random { seed, count } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    Rgb::new(
                        rng.gen_range(0.0..=1.0),
                        rng.gen_range(0.0..=1.0),
                        rng.gen_range(0.0..=1.0),
                    )
                })
                .collect()
        }
    }
}

/// Random OKLCH colors strictly inside `gamut`
///
/// Lightness stays within `[0.02, 0.98]` and chroma within
/// `[0, fill * max_chroma]`, so every sample sits away from the boundary.
pub fn random_oklch_in_gamut(seed: u64, count: usize, gamut: Gamut, fill: f64) -> Vec<Oklch> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let l = rng.gen_range(0.02..0.98);
            let h = rng.gen_range(0.0..360.0);
            let limit = max_chroma(l, h, gamut, DEFAULT_EPSILON) * fill;
            let c = if limit > 0.0 { rng.gen_range(0.0..=limit) } else { 0.0 };
            Oklch::new(l, c, h)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_sizes() {
        assert_eq!(generate_rgb(SamplePattern::ColorCube).len(), 8);
        assert_eq!(generate_rgb(SamplePattern::Grid(5)).len(), 125);
        assert_eq!(generate_rgb(SamplePattern::Grayscale(256)).len(), 256);
        assert_eq!(generate_rgb(SamplePattern::Random { seed: 1, count: 10 }).len(), 10);
    }

    #[test]
    fn test_random_is_reproducible() {
        let pattern = SamplePattern::Random {
            seed: 42,
            count: 16,
        };
        let a = generate_rgb(pattern);
        let b = generate_rgb(pattern);
        assert_eq!(a, b);
        assert!(a.iter().all(Rgb::is_in_gamut));
    }

    #[test]
    fn test_oklch_samples_in_gamut() {
        for gamut in Gamut::ALL {
            for lch in random_oklch_in_gamut(7, 200, gamut, 0.9) {
                assert!(tonal_core::is_in_gamut(lch, gamut), "{gamut}: {lch:?}");
            }
        }
    }
}
