//! Oklab perceptual color space.
//!
//! Linear sRGB is taken to an LMS-like cone space by [`M1`], compressed with
//! a cube root, then mixed into `(L, a, b)` by [`M2`]. Components use native
//! Oklab units: `L` in [0, 1], `a` and `b` roughly within ±0.4.
//!
//! The inverse matrices are derived from [`M1`] and [`M2`] on first use, so
//! a round trip is exact to f64 rounding.
//!
//! # Reference
//!
//! Björn Ottosson, "A perceptual color space for image processing" (2020).

use crate::linear::{decode, encode};
use std::sync::LazyLock;
use tinct_core::{Color, Components};
use tinct_math::{Mat3, Vec3};

/// Linear sRGB to LMS.
pub const M1: Mat3 = Mat3::from_rows([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Nonlinear LMS to Oklab.
pub const M2: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// Oklab to nonlinear LMS, the exact inverse of [`M2`].
pub static M2_INV: LazyLock<Mat3> = LazyLock::new(|| M2.inverse().unwrap_or(Mat3::IDENTITY));

/// LMS to linear sRGB, the exact inverse of [`M1`].
pub static M1_INV: LazyLock<Mat3> = LazyLock::new(|| M1.inverse().unwrap_or(Mat3::IDENTITY));

/// Converts linear sRGB to Oklab.
#[inline]
pub fn linear_to_oklab(rgb: Vec3) -> Vec3 {
    let lms = (M1 * rgb).map(f64::cbrt);
    M2 * lms
}

/// Converts Oklab to linear sRGB.
#[inline]
pub fn oklab_to_linear(lab: Vec3) -> Vec3 {
    let lms = (*M2_INV * lab).map(|v| v * v * v);
    *M1_INV * lms
}

/// Sets a color from Oklab.
pub fn from_oklab(color: &mut Color, l: f64, a: f64, b: f64, alpha: Option<f64>) -> &mut Color {
    encode(color, oklab_to_linear(Vec3::new(l, a, b)), alpha)
}

/// Returns the Oklab components of a color.
pub fn to_oklab(color: &Color) -> Components {
    Components::new(linear_to_oklab(decode(color)).to_array(), color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_green() {
        let lab = to_oklab(&Color::rgb(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(lab[0], 0.86644, epsilon = 1e-5);
        assert_abs_diff_eq!(lab[1], -0.23389, epsilon = 1e-5);
        assert_abs_diff_eq!(lab[2], 0.1795, epsilon = 1e-4);
    }

    #[test]
    fn test_white() {
        let lab = to_oklab(&Color::rgb(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(lab[0], 1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(lab[1], 0.0, epsilon = 1e-7);
        assert_abs_diff_eq!(lab[2], 0.0, epsilon = 1e-7);
    }

    #[test]
    fn test_roundtrip() {
        let src = Color::rgba(0.6, 0.4, 0.0, 0.2);
        let lab = to_oklab(&src);
        let mut out = Color::default();
        from_oklab(&mut out, lab[0], lab[1], lab[2], lab.alpha);
        for i in 0..3 {
            assert_abs_diff_eq!(out[i], src[i], epsilon = 1e-10);
        }
        assert_eq!(out.alpha, Some(0.2));
    }

    #[test]
    fn test_inverses_are_exact() {
        for (m, inv) in [(M1, *M1_INV), (M2, *M2_INV)] {
            let id = m * inv;
            for r in 0..3 {
                for c in 0..3 {
                    let expected = if r == c { 1.0 } else { 0.0 };
                    assert_abs_diff_eq!(id.m[r][c], expected, epsilon = 1e-14);
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_cube_corners() {
        // yellow drifted furthest with the rounded published inverses
        for rgb in [
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 0.0, 1.0],
        ] {
            let back = oklab_to_linear(linear_to_oklab(Vec3::from_array(rgb)));
            for i in 0..3 {
                assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-10);
            }
        }
    }
}
