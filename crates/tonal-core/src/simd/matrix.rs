//! Matrix-vector kernels

use multiversion::multiversion;

/// Multiply a row-major 3x3 matrix by every vector in `input`
///
/// Results go to the matching slots of `output`; slots past `input.len()`
/// are left alone. Panics if `output` is shorter than `input`.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn matrix_multiply_vec3_batch(
    matrix: &[[f64; 3]; 3],
    input: &[[f64; 3]],
    output: &mut [[f64; 3]],
) {
    assert!(output.len() >= input.len());

    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = *matrix;

    for (&[x, y, z], out) in input.iter().zip(output.iter_mut()) {
        *out = [
            m00 * x + m01 * y + m02 * z,
            m10 * x + m11 * y + m12 * z,
            m20 * x + m21 * y + m22 * z,
        ];
    }
}
