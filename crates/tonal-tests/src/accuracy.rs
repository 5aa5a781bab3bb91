//! Accuracy measurement in Oklab distance
//!
//! ΔEOK is the Euclidean distance in Oklab. Since Oklab is scaled so that
//! L spans [0, 1], a ΔEOK of 0.02 is roughly one just-noticeable step.

use tonal_core::{Oklab, Oklch};

/// Statistics from a batch of differences
#[derive(Debug, Clone, PartialEq)]
pub struct DiffStats {
    pub mean: f64,
    pub max: f64,
    /// 95th percentile
    pub p95: f64,
    pub count: usize,
}

impl DiffStats {
    /// Summarize a set of non-negative differences
    ///
    /// NaN entries sort last and therefore surface as the maximum.
    pub fn from_diffs(mut diffs: Vec<f64>) -> Self {
        if diffs.is_empty() {
            return Self {
                mean: 0.0,
                max: 0.0,
                p95: 0.0,
                count: 0,
            };
        }
        diffs.sort_by(|a, b| a.total_cmp(b));

        let count = diffs.len();
        let mean = diffs.iter().sum::<f64>() / count as f64;
        let p95_idx = ((count as f64 * 0.95) as usize).min(count - 1);

        Self {
            mean,
            max: diffs[count - 1],
            p95: diffs[p95_idx],
            count,
        }
    }

    /// All differences at or below `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

/// Oklab distance between two OKLCH colors
///
/// Hue is irrelevant for achromatic colors, which the Cartesian form
/// handles without special cases.
pub fn delta_e_ok(a: Oklch, b: Oklch) -> f64 {
    a.to_oklab().distance(&b.to_oklab())
}

/// Oklab distance between two Oklab colors
pub fn delta_e_ok_lab(a: Oklab, b: Oklab) -> f64 {
    a.distance(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let stats = DiffStats::from_diffs((1..=100).map(|i| i as f64).collect());
        assert_eq!(stats.count, 100);
        assert_eq!(stats.max, 100.0);
        assert_eq!(stats.p95, 96.0);
        assert!((stats.mean - 50.5).abs() < 1e-12);
        assert!(stats.within(100.0));
        assert!(!stats.within(99.0));
    }

    #[test]
    fn test_empty_stats() {
        let stats = DiffStats::from_diffs(Vec::new());
        assert_eq!(stats.count, 0);
        assert!(stats.within(0.0));
    }

    #[test]
    fn test_delta_e_ignores_achromatic_hue() {
        let a = Oklch::new(0.5, 0.0, 10.0);
        let b = Oklch::new(0.5, 0.0, 200.0);
        assert_eq!(delta_e_ok(a, b), 0.0);

        let c = Oklch::new(0.6, 0.0, 0.0);
        assert!((delta_e_ok(a, c) - 0.1).abs() < 1e-12);
    }
}
