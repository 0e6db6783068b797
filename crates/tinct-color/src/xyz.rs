//! CIE XYZ tristimulus values.
//!
//! Two reference whites are exposed:
//!
//! - **D65** ([`from_xyz`] / [`to_xyz`]) - the native white of sRGB, CSS `xyz`
//! - **D50** ([`from_xyz_d50`] / [`to_xyz_d50`]) - CSS `xyz-d50`, Bradford-adapted
//!
//! Y of the reference white is 1.

use crate::linear::{decode, encode};
use tinct_core::{Color, Components};
use tinct_math::{Mat3, Vec3};
use tinct_primaries::matrices;

#[inline]
fn from_xyz_with<'a>(color: &'a mut Color, m: &Mat3, xyz: Vec3, a: Option<f64>) -> &'a mut Color {
    encode(color, *m * xyz, a)
}

#[inline]
fn to_xyz_with(color: &Color, m: &Mat3) -> Components {
    Components::new((*m * decode(color)).to_array(), color.alpha)
}

/// Sets a color from XYZ (D65).
pub fn from_xyz(color: &mut Color, x: f64, y: f64, z: f64, a: Option<f64>) -> &mut Color {
    from_xyz_with(color, &matrices().xyz_d65_to_srgb, Vec3::new(x, y, z), a)
}

/// Returns the XYZ (D65) tristimulus value of a color.
pub fn to_xyz(color: &Color) -> Components {
    to_xyz_with(color, &matrices().srgb_to_xyz_d65)
}

/// Sets a color from XYZ (D50).
pub fn from_xyz_d50(color: &mut Color, x: f64, y: f64, z: f64, a: Option<f64>) -> &mut Color {
    from_xyz_with(color, &matrices().xyz_d50_to_srgb, Vec3::new(x, y, z), a)
}

/// Returns the XYZ (D50) tristimulus value of a color.
pub fn to_xyz_d50(color: &Color) -> Components {
    to_xyz_with(color, &matrices().srgb_to_xyz_d50)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_red_d65() {
        let xyz = to_xyz(&Color::rgb(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(xyz[0], 0.41239, epsilon = 1e-5);
        assert_abs_diff_eq!(xyz[1], 0.21264, epsilon = 1e-5);
        assert_abs_diff_eq!(xyz[2], 0.01933, epsilon = 1e-5);
    }

    #[test]
    fn test_white_d50() {
        let xyz = to_xyz_d50(&Color::rgb(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(xyz[0], 0.96422, epsilon = 1e-4);
        assert_abs_diff_eq!(xyz[1], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(xyz[2], 0.82521, epsilon = 1e-4);
    }

    #[test]
    fn test_d50_roundtrip() {
        let src = Color::rgb(0.6, 0.4, 0.0);
        let xyz = to_xyz_d50(&src);
        let mut out = Color::default();
        from_xyz_d50(&mut out, xyz[0], xyz[1], xyz[2], None);
        for i in 0..3 {
            assert_abs_diff_eq!(out[i], src[i], epsilon = 1e-10);
        }
        assert_eq!(out.alpha, Some(1.0));
    }

    #[test]
    fn test_setter_result_is_usable() {
        let d65 = to_xyz(&Color::rgb(0.6, 0.4, 0.0));
        let mut out = Color::default();
        let back = to_xyz(from_xyz(&mut out, d65[0], d65[1], d65[2], None));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], d65[i], epsilon = 1e-10);
        }
    }
}
