//! CIE L*a*b*.
//!
//! Components are normalized: `L/100`, `a/100`, `b/100`. Pure sRGB red is
//! roughly `(0.5429, 0.8080, 0.6989)` against D50 and `(0.5324, 0.8009, 0.6720)`
//! against D65.
//!
//! The default [`from_lab`] / [`to_lab`] pair uses the D50 white, as CSS
//! `lab()` does. [`from_lab_d65`] / [`to_lab_d65`] are the D65 variant.
//!
//! # Reference
//!
//! CIE 15:2004, with the exact rational ε and κ constants.

use crate::linear::{decode, encode};
use tinct_core::{Color, Components};
use tinct_math::{Mat3, Vec3};
use tinct_primaries::matrices;

/// ε = (6/29)^3
pub const EPSILON: f64 = 216.0 / 24389.0;
/// κ = (29/3)^3
pub const KAPPA: f64 = 24389.0 / 27.0;

#[inline]
fn compress(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn expand(f: f64) -> f64 {
    let f3 = f * f * f;
    if f3 > EPSILON {
        f3
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

/// Converts XYZ to normalized Lab against the given reference white.
pub fn xyz_to_lab(xyz: Vec3, white: Vec3) -> Vec3 {
    let fx = compress(xyz.x / white.x);
    let fy = compress(xyz.y / white.y);
    let fz = compress(xyz.z / white.z);

    Vec3::new(
        (116.0 * fy - 16.0) / 100.0,
        5.0 * (fx - fy),
        2.0 * (fy - fz),
    )
}

/// Converts normalized Lab to XYZ against the given reference white.
pub fn lab_to_xyz(lab: Vec3, white: Vec3) -> Vec3 {
    let l = lab.x * 100.0;
    let fy = (l + 16.0) / 116.0;
    let fx = lab.y / 5.0 + fy;
    let fz = fy - lab.z / 2.0;

    let y = if l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        l / KAPPA
    };

    Vec3::new(expand(fx) * white.x, y * white.y, expand(fz) * white.z)
}

#[inline]
fn from_lab_with<'a>(
    color: &'a mut Color,
    lab: Vec3,
    white: Vec3,
    xyz_to_rgb: &Mat3,
    a: Option<f64>,
) -> &'a mut Color {
    encode(color, *xyz_to_rgb * lab_to_xyz(lab, white), a)
}

#[inline]
fn to_lab_with(color: &Color, rgb_to_xyz: &Mat3, white: Vec3) -> Components {
    let xyz = *rgb_to_xyz * decode(color);
    Components::new(xyz_to_lab(xyz, white).to_array(), color.alpha)
}

/// Sets a color from normalized Lab (D50).
pub fn from_lab(color: &mut Color, l: f64, a: f64, b: f64, alpha: Option<f64>) -> &mut Color {
    let m = matrices();
    from_lab_with(color, Vec3::new(l, a, b), m.d50, &m.xyz_d50_to_srgb, alpha)
}

/// Returns the normalized Lab (D50) components of a color.
pub fn to_lab(color: &Color) -> Components {
    let m = matrices();
    to_lab_with(color, &m.srgb_to_xyz_d50, m.d50)
}

/// Sets a color from normalized Lab (D65).
pub fn from_lab_d65(color: &mut Color, l: f64, a: f64, b: f64, alpha: Option<f64>) -> &mut Color {
    let m = matrices();
    from_lab_with(color, Vec3::new(l, a, b), m.d65, &m.xyz_d65_to_srgb, alpha)
}

/// Returns the normalized Lab (D65) components of a color.
pub fn to_lab_d65(color: &Color) -> Components {
    let m = matrices();
    to_lab_with(color, &m.srgb_to_xyz_d65, m.d65)
}
