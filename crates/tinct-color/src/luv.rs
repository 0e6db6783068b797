//! CIE L*u*v* (D65) and the sRGB gamut bounds used by HSLuv and HPLuv.
//!
//! Components are normalized: `L/100`, `u/100`, `v/100`. The reference white
//! is always D65.
//!
//! # Gamut Bounds
//!
//! At a fixed lightness, each of the six faces `r, g, b ∈ {0, 1}` of the
//! sRGB cube projects to a straight line in the (u, v) plane. [`get_bounds`]
//! returns them as `(slope, intercept)` pairs; the displayable chroma region
//! is the polygon they enclose around the origin.
//!
//! # Reference
//!
//! Alexei Boronine, HSLuv (<https://www.hsluv.org>).

use crate::TAU;
use crate::lch::wrap_hue;
use crate::linear::{decode, encode};
use tinct_core::{Color, Components};
use tinct_math::Vec3;
use tinct_primaries::{D65, matrices};

/// Y threshold of the linear segment, (6/29)^3.
pub const EPSILON: f64 = 216.0 / 24389.0;
/// Slope of the linear segment on the normalized L scale, (29/3)^3 / 100.
pub const KAPPA: f64 = 24389.0 / 27.0 / 100.0;

/// Chroma below this has no defined hue.
pub const CHROMA_EPSILON: f64 = 1e-10;

/// A boundary line `v = slope * u + intercept` in the (u, v) plane.
///
/// The intercept is in CIE units (0..100 scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Slope
    pub slope: f64,
    /// Intercept
    pub intercept: f64,
}

/// D65 white `(u', v')` chromaticity.
fn ref_uv() -> (f64, f64) {
    let (x, y) = D65.xy;
    let d = -2.0 * x + 12.0 * y + 3.0;
    (4.0 * x / d, 9.0 * y / d)
}

#[inline]
fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        1.16 * y.cbrt() - 0.16
    }
}

#[inline]
fn l_to_y(l: f64) -> f64 {
    if l <= 0.08 {
        l / KAPPA
    } else {
        let f = (l + 0.16) / 1.16;
        f * f * f
    }
}

/// Converts XYZ (D65) to normalized Luv.
pub fn xyz_to_luv(xyz: Vec3) -> Vec3 {
    let l = y_to_l(xyz.y);
    let divider = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if l == 0.0 || divider == 0.0 {
        return Vec3::ZERO;
    }

    let (ref_u, ref_v) = ref_uv();
    let u = 4.0 * xyz.x / divider;
    let v = 9.0 * xyz.y / divider;

    Vec3::new(l, 13.0 * l * (u - ref_u), 13.0 * l * (v - ref_v))
}

/// Converts normalized Luv to XYZ (D65).
pub fn luv_to_xyz(luv: Vec3) -> Vec3 {
    let l = luv.x;
    if l == 0.0 {
        return Vec3::ZERO;
    }

    let (ref_u, ref_v) = ref_uv();
    let u = luv.y / (13.0 * l) + ref_u;
    let v = luv.z / (13.0 * l) + ref_v;

    let y = l_to_y(l);
    let x = 9.0 * y * u / (4.0 * v);
    let z = (9.0 * y - 15.0 * v * y - v * x) / (3.0 * v);

    Vec3::new(x, y, z)
}

/// Cartesian Luv to polar `(L, C, h)`, hue in turns.
pub fn luv_to_lch(luv: Vec3) -> Vec3 {
    let c = luv.y.hypot(luv.z);
    let h = if c < CHROMA_EPSILON {
        0.0
    } else {
        wrap_hue(luv.z.atan2(luv.y) / TAU)
    };
    Vec3::new(luv.x, c, h)
}

/// Polar `(L, C, h)` to Cartesian Luv.
pub fn lch_to_luv(lch: Vec3) -> Vec3 {
    let (sin, cos) = (lch.z * TAU).sin_cos();
    Vec3::new(lch.x, lch.y * cos, lch.y * sin)
}

/// Returns the six sRGB gamut boundary lines at normalized lightness `l`.
pub fn get_bounds(l: f64) -> [Line; 6] {
    let l100 = l * 100.0;
    let sub1 = (l100 + 16.0).powi(3) / 1560896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let m = &matrices().xyz_d65_to_srgb;
    let mut lines = [Line {
        slope: 0.0,
        intercept: 0.0,
    }; 6];

    for (c, row) in m.m.iter().enumerate() {
        let [m1, m2, m3] = *row;
        for t in 0..2 {
            let t = t as f64;
            let top1 = (284517.0 * m1 - 94839.0 * m3) * sub2;
            let top2 = (838422.0 * m3 + 769860.0 * m2 + 731718.0 * m1) * l100 * sub2
                - 769860.0 * t * l100;
            let bottom = (632260.0 * m3 - 126452.0 * m2) * sub2 + 126452.0 * t;

            lines[c * 2 + t as usize] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }

    lines
}

/// Largest normalized chroma displayable at lightness `l` and hue `h` (turns).
///
/// The shortest ray from the origin at angle `h` to a boundary line.
pub fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    let (sin, cos) = (h * TAU).sin_cos();
    get_bounds(l)
        .iter()
        .map(|line| line.intercept / (sin - line.slope * cos))
        .filter(|len| *len >= 0.0)
        .fold(f64::MAX, f64::min)
        / 100.0
}

/// Largest normalized chroma displayable at lightness `l` for every hue.
///
/// The smallest distance from the origin to a boundary line.
pub fn max_safe_chroma_for_l(l: f64) -> f64 {
    get_bounds(l)
        .iter()
        .map(|line| line.intercept.abs() / (line.slope * line.slope + 1.0).sqrt())
        .fold(f64::MAX, f64::min)
        / 100.0
}

/// Sets a color from normalized Luv.
pub fn from_luv(color: &mut Color, l: f64, u: f64, v: f64, a: Option<f64>) -> &mut Color {
    let xyz = luv_to_xyz(Vec3::new(l, u, v));
    encode(color, matrices().xyz_d65_to_srgb * xyz, a)
}

/// Returns the normalized Luv components of a color.
pub fn to_luv(color: &Color) -> Components {
    let xyz = matrices().srgb_to_xyz_d65 * decode(color);
    Components::new(xyz_to_luv(xyz).to_array(), color.alpha)
}
