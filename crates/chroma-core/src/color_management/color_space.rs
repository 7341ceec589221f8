//! sRGB (D65) ↔ CIE XYZ 3x3 matrix transforms.

use glam::{Mat3, Vec3};

/// A 3x3 color matrix for linear color space conversions, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f32; 3]; 3]);

impl ColorMatrix {
    /// Linear sRGB → XYZ, D65 primaries.
    pub const SRGB_TO_XYZ: Self = Self([
        [0.412383, 0.357585, 0.18048],
        [0.212635, 0.71517, 0.072192],
        [0.01933, 0.119195, 0.950528],
    ]);

    /// XYZ → linear sRGB. Inverse of [`ColorMatrix::SRGB_TO_XYZ`] to six digits.
    pub const XYZ_TO_SRGB: Self = Self([
        [3.24103, -1.53741, -0.49862],
        [-0.969242, 1.87596, 0.041555],
        [0.055632, -0.203979, 1.05698],
    ]);

    /// Returns the identity matrix (no-op transform).
    pub fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Apply this matrix to an RGB triplet.
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let v = Vec3::from_array(rgb);
        self.0.map(|row| Vec3::from_array(row).dot(v))
    }

    /// The matrix that applies `self` first, then `next`.
    pub fn then(&self, next: &ColorMatrix) -> ColorMatrix {
        let product = next.to_mat3() * self.to_mat3();
        Self(product.transpose().to_cols_array_2d())
    }

    fn to_mat3(self) -> Mat3 {
        // glam is column-major; our rows become its columns, hence the transpose.
        Mat3::from_cols_array_2d(&self.0).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_noop() {
        let rgb = [0.3, 0.6, 0.9];
        assert_eq!(ColorMatrix::identity().apply(rgb), rgb);
    }

    #[test]
    fn test_apply_uses_rows() {
        let xyz = ColorMatrix::SRGB_TO_XYZ.apply([1.0, 0.0, 0.0]);
        assert_eq!(xyz, [0.412383, 0.212635, 0.01933]);
    }

    #[test]
    fn test_forward_then_inverse_is_near_identity() {
        let product = ColorMatrix::SRGB_TO_XYZ.then(&ColorMatrix::XYZ_TO_SRGB);
        let identity = ColorMatrix::identity();
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (product.0[i][j] - identity.0[i][j]).abs() < 1e-4,
                    "entry ({i}, {j}) = {}",
                    product.0[i][j]
                );
            }
        }
    }

    #[test]
    fn test_then_matches_sequential_apply() {
        let rgb = [0.25, 0.5, 0.75];
        let composed = ColorMatrix::SRGB_TO_XYZ.then(&ColorMatrix::XYZ_TO_SRGB);
        let sequential = ColorMatrix::XYZ_TO_SRGB.apply(ColorMatrix::SRGB_TO_XYZ.apply(rgb));
        let direct = composed.apply(rgb);
        for c in 0..3 {
            assert!((direct[c] - sequential[c]).abs() < 1e-5);
        }
    }
}
