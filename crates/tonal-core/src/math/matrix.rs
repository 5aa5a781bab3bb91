//! Matrix operations for color space transforms
//!
//! Two layers live here:
//! - a generic NxN inversion kernel ([`invert`]) used to derive and check
//!   basis-change matrices
//! - the fixed [`Matrix3x3`] type used on the hot conversion path
//!
//! All operations use f64. Matrices are row-major: `m[row][col]`.

use std::ops::{Index, Mul};

use crate::error::{Error, Result};

/// Relative singularity tolerance
///
/// A pivot counts as zero when its magnitude is at most this times the
/// largest entry of the input; a 2x2 determinant is compared against the
/// square of that entry. Uniformly scaling a matrix never changes whether
/// it is reported singular.
pub const SINGULAR_EPSILON: f64 = 1e-12;

fn max_abs_entry<R: AsRef<[f64]>>(matrix: &[R]) -> f64 {
    matrix
        .iter()
        .flat_map(|row| row.as_ref().iter())
        .fold(0.0, |acc: f64, v| acc.max(v.abs()))
}

/// Invert a square matrix
///
/// 2x2 matrices use the closed form. Larger matrices use Gauss-Jordan
/// elimination with partial pivoting on the augmented table `[A | I]`,
/// reducing it to `[I | A⁻¹]`.
///
/// # Errors
///
/// - [`Error::NotSquare`] if any row length differs from the row count
/// - [`Error::SingularMatrix`] if the determinant or a pivot is zero
pub fn invert<R: AsRef<[f64]>>(matrix: &[R]) -> Result<Vec<Vec<f64>>> {
    let n = matrix.len();
    if let Some(row) = matrix.iter().find(|row| row.as_ref().len() != n) {
        return Err(Error::NotSquare {
            rows: n,
            cols: row.as_ref().len(),
        });
    }

    let scale = max_abs_entry(matrix);
    if !(scale.is_finite() && scale > 0.0) {
        return Err(Error::SingularMatrix);
    }

    if n == 2 {
        let (a, b) = (matrix[0].as_ref()[0], matrix[0].as_ref()[1]);
        let (c, d) = (matrix[1].as_ref()[0], matrix[1].as_ref()[1]);
        let det = a * d - b * c;
        if !(det.abs() > SINGULAR_EPSILON * scale * scale) {
            return Err(Error::SingularMatrix);
        }
        return Ok(vec![vec![d / det, -b / det], vec![-c / det, a / det]]);
    }

    gauss_jordan_inverse(matrix, SINGULAR_EPSILON * scale)
}

fn gauss_jordan_inverse<R: AsRef<[f64]>>(matrix: &[R], tolerance: f64) -> Result<Vec<Vec<f64>>> {
    let n = matrix.len();
    let mut augmented: Vec<Vec<f64>> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut wide = Vec::with_capacity(2 * n);
            wide.extend_from_slice(row.as_ref());
            wide.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
            wide
        })
        .collect();

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| augmented[a][col].abs().total_cmp(&augmented[b][col].abs()))
            .unwrap_or(col);
        if !(augmented[pivot_row][col].abs() > tolerance) {
            return Err(Error::SingularMatrix);
        }
        augmented.swap(col, pivot_row);

        let pivot = augmented[col][col];
        for x in augmented[col].iter_mut() {
            *x /= pivot;
        }

        let pivot_values = augmented[col].clone();
        for (r, row) in augmented.iter_mut().enumerate() {
            if r == col {
                continue;
            }
            let factor = row[col];
            if factor == 0.0 {
                continue;
            }
            for (x, p) in row.iter_mut().zip(&pivot_values) {
                *x -= factor * p;
            }
        }
    }

    Ok(augmented.into_iter().map(|row| row[n..].to_vec()).collect())
}

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        Self { m }
    }

    /// Transpose this matrix
    #[inline]
    pub fn transpose(&self) -> Self {
        Self {
            m: [
                [self.m[0][0], self.m[1][0], self.m[2][0]],
                [self.m[0][1], self.m[1][1], self.m[2][1]],
                [self.m[0][2], self.m[1][2], self.m[2][2]],
            ],
        }
    }

    /// Calculate the determinant
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Invert through the Gauss-Jordan kernel
    pub fn inverse(&self) -> Result<Self> {
        let rows = invert(&self.m)?;
        let mut m = [[0.0; 3]; 3];
        for (dst, src) in m.iter_mut().zip(rows) {
            dst.copy_from_slice(&src);
        }
        Ok(Self { m })
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

// ============================================================================
// Oklab basis changes (https://bottosson.github.io/posts/oklab)
// ============================================================================

/// XYZ (D65) to linear LMS cone response
pub const XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.633851707],
]);

/// Linear LMS to XYZ (D65), inverse of [`XYZ_TO_LMS`]
pub const LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [1.2270138511035211, -0.5577999806518221, 0.2812561489664678],
    [-0.04058017842328059, 1.11225686961683, -0.0716766786656012],
    [-0.0763812845057069, -0.4214819784180127, 1.5861632204407947],
]);

/// Nonlinear (cube-rooted) LMS to Oklab
pub const LMS_TO_OKLAB: Matrix3x3 = Matrix3x3::new([
    [0.2104542553, 0.793617785, -0.0040720468],
    [1.9779984951, -2.428592205, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.808675766],
]);

/// Oklab to nonlinear LMS, inverse of [`LMS_TO_OKLAB`]
pub const OKLAB_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.9999999984505197, 0.3963377921737678, 0.21580375806075877],
    [1.0000000088817607, -0.10556134232365633, -0.06385417477170588],
    [1.0000000546724106, -0.08948418209496574, -1.2914855378640917],
]);

// ============================================================================
// Device primaries
//
// Built from the published xy chromaticities, scaled so that RGB white lands
// on LMS_TO_XYZ × (1, 1, 1). That white is D65 as Oklab's matrices encode
// it (Z ≈ 1.0883), which makes OKLCH L = 1 decode to exactly (1, 1, 1).
// ============================================================================

/// Linear sRGB to XYZ
///
/// Primaries from IEC 61966-2-1:1999
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.41256544575533943, 0.3575682031845128, 0.1803363704783144],
    [0.2127290579675969, 0.7151364063690256, 0.07213454819132577],
    [0.019339005269781537, 0.11918940106150426, 0.9497715511857893],
]);

/// XYZ to linear sRGB, inverse of [`SRGB_TO_XYZ`]
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.239597980126425, -1.536732375188176, -0.49839968925021927],
    [-0.9692873759322502, 1.8760521594424513, 0.04155693268770946],
    [0.055674629670877274, -0.20414030879321668, 1.0578179637466683],
]);

/// Linear Display P3 to XYZ
///
/// DCI-P3 primaries with the D65 white
pub const DISPLAY_P3_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.48673652831155834, 0.2656598373734685, 0.19807365373313982],
    [0.22905248391132157, 0.6917180671233707, 0.07922946149325594],
    [0.0, 0.04511204785587201, 1.0431879096612031],
]);

/// XYZ to linear Display P3, inverse of [`DISPLAY_P3_TO_XYZ`]
pub const XYZ_TO_DISPLAY_P3: Matrix3x3 = Matrix3x3::new([
    [2.492648665805767, -0.931066776718747, -0.40257378894650664],
    [-0.8295134982817687, 1.7627161838487584, 0.023625384444733916],
    [0.035871823556440766, -0.07622762505743663, 0.9575784010483216],
]);

/// Every forward/inverse pair embedded above, with a label for diagnostics
pub const BASIS_PAIRS: [(&str, Matrix3x3, Matrix3x3); 4] = [
    ("xyz/lms", XYZ_TO_LMS, LMS_TO_XYZ),
    ("lms/oklab", LMS_TO_OKLAB, OKLAB_TO_LMS),
    ("srgb/xyz", SRGB_TO_XYZ, XYZ_TO_SRGB),
    ("display-p3/xyz", DISPLAY_P3_TO_XYZ, XYZ_TO_DISPLAY_P3),
];
