//! sRGB gamut geometry in Oklab, used by Okhsl and Okhsv.
//!
//! For a fixed hue the sRGB gamut in the (L, C) plane is approximated by a
//! triangle between black, white and the *cusp*, the point of maximum
//! chroma. The upper edge is curved and refined with a Halley step.
//!
//! All hue arguments `(a, b)` must be normalized so that `a² + b² = 1`.
//!
//! # Reference
//!
//! Björn Ottosson, "Okhsv and Okhsl" (2021).

use crate::oklab::{M1_INV, M2_INV, oklab_to_linear};
use tinct_math::Vec3;

// ============================================================================
// Toe
// ============================================================================

const K1: f64 = 0.206;
const K2: f64 = 0.03;
const K3: f64 = (1.0 + K1) / (1.0 + K2);

/// Remaps Oklab lightness to a scale closer to CIE L*.
///
/// Strictly increasing on [0, 1] with `toe(0) = 0` and `toe(1) = 1`.
#[inline]
pub fn toe(x: f64) -> f64 {
    let t = K3 * x - K1;
    0.5 * (t + (t * t + 4.0 * K2 * K3 * x).sqrt())
}

/// Inverse of [`toe`].
#[inline]
pub fn toe_inv(x: f64) -> f64 {
    (x * x + K1 * x) / (K3 * (x + K2))
}

// ============================================================================
// Cusp
// ============================================================================

/// Lightness and chroma of the most saturated in-gamut color at a hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cusp {
    /// Oklab lightness
    pub l: f64,
    /// Oklab chroma
    pub c: f64,
}

/// Chroma bounds at a given lightness and hue, see [`get_cs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaBounds {
    /// Chroma used near the neutral axis
    pub c0: f64,
    /// Chroma of the perceptual mid point
    pub c_mid: f64,
    /// Chroma at the gamut boundary
    pub c_max: f64,
}

/// Finds the maximum saturation `S = C / L` that stays in sRGB at a hue.
///
/// A polynomial estimate, specialized to whichever channel clips first,
/// polished by one step of Halley's method.
pub fn compute_max_saturation(a: f64, b: f64) -> f64 {
    let (k, w) = if -1.88170328 * a - 0.80936493 * b > 1.0 {
        // red clips
        (
            [1.19086277, 1.76576728, 0.59662641, 0.75515197, 0.56771245],
            M1_INV.row(0),
        )
    } else if 1.81444104 * a - 1.19445276 * b > 1.0 {
        // green clips
        (
            [0.73956515, -0.45954404, 0.08285427, 0.12541070, 0.14503204],
            M1_INV.row(1),
        )
    } else {
        // blue clips
        (
            [1.35733652, -0.00915799, -1.15130210, -0.50559606, 0.00692167],
            M1_INV.row(2),
        )
    };

    let mut s = k[0] + k[1] * a + k[2] * b + k[3] * a * a + k[4] * a * b;

    let k_lms = lms_slope(a, b);

    let lms_ = Vec3::ONE + k_lms * s;
    let lms = lms_.map(|v| v * v * v);
    let lms_ds = Vec3::new(
        3.0 * k_lms.x * lms_.x * lms_.x,
        3.0 * k_lms.y * lms_.y * lms_.y,
        3.0 * k_lms.z * lms_.z * lms_.z,
    );
    let lms_ds2 = Vec3::new(
        6.0 * k_lms.x * k_lms.x * lms_.x,
        6.0 * k_lms.y * k_lms.y * lms_.y,
        6.0 * k_lms.z * k_lms.z * lms_.z,
    );

    let f = w.dot(lms);
    let f1 = w.dot(lms_ds);
    let f2 = w.dot(lms_ds2);

    s -= f * f1 / (f1 * f1 - 0.5 * f * f2);
    s
}

/// How nonlinear LMS moves per unit of chroma along hue `(a, b)`.
#[inline]
fn lms_slope(a: f64, b: f64) -> Vec3 {
    Vec3::new(
        M2_INV.m[0][1] * a + M2_INV.m[0][2] * b,
        M2_INV.m[1][1] * a + M2_INV.m[1][2] * b,
        M2_INV.m[2][1] * a + M2_INV.m[2][2] * b,
    )
}

/// Finds the cusp for a hue.
pub fn find_cusp(a: f64, b: f64) -> Cusp {
    let s_cusp = compute_max_saturation(a, b);

    let rgb_at_max = oklab_to_linear(Vec3::new(1.0, s_cusp * a, s_cusp * b));
    let l = (1.0 / rgb_at_max.max_element()).cbrt();

    Cusp { l, c: l * s_cusp }
}

/// Returns `(S, T)`: the slopes of the lower and upper triangle edges.
///
/// `S = C_cusp / L_cusp` and `T = C_cusp / (1 - L_cusp)`.
pub fn get_st_max(a: f64, b: f64, cusp: Option<Cusp>) -> (f64, f64) {
    let cusp = cusp.unwrap_or_else(|| find_cusp(a, b));
    (cusp.c / cusp.l, cusp.c / (1.0 - cusp.l))
}

// ============================================================================
// Gamut Intersection
// ============================================================================

/// Invalid Halley roots are replaced by this, so only clipping channels count.
const NO_ROOT: f64 = 1e6;

/// Finds where the line `L = L0 (1 - t) + t L1`, `C = t C1` leaves sRGB.
///
/// Returns `t`. Below the cusp the triangle edge is exact; above it the
/// triangle estimate is refined by one Halley step per RGB channel, keeping
/// the smallest valid root.
pub fn find_gamut_intersection(a: f64, b: f64, l1: f64, c1: f64, l0: f64, cusp: Option<Cusp>) -> f64 {
    let cusp = cusp.unwrap_or_else(|| find_cusp(a, b));

    if (l1 - l0) * cusp.c - (cusp.l - l0) * c1 <= 0.0 {
        // lower half
        return cusp.c * l0 / (c1 * cusp.l + cusp.c * (l0 - l1));
    }

    // upper half: start from the triangle
    let mut t = cusp.c * (l0 - 1.0) / (c1 * (cusp.l - 1.0) + cusp.c * (l0 - l1));

    let d_l = l1 - l0;
    let d_c = c1;

    let k_lms = lms_slope(a, b);
    let lms_dt = Vec3::splat(d_l) + k_lms * d_c;

    let l = l0 * (1.0 - t) + t * l1;
    let c = t * c1;

    let lms_ = Vec3::splat(l) + k_lms * c;
    let lms = lms_.map(|v| v * v * v);
    let lms_dt1 = Vec3::new(
        3.0 * lms_dt.x * lms_.x * lms_.x,
        3.0 * lms_dt.y * lms_.y * lms_.y,
        3.0 * lms_dt.z * lms_.z * lms_.z,
    );
    let lms_dt2 = Vec3::new(
        6.0 * lms_dt.x * lms_dt.x * lms_.x,
        6.0 * lms_dt.y * lms_dt.y * lms_.y,
        6.0 * lms_dt.z * lms_dt.z * lms_.z,
    );

    let mut best = NO_ROOT;
    for i in 0..3 {
        let w = M1_INV.row(i);
        let f = w.dot(lms) - 1.0;
        let f1 = w.dot(lms_dt1);
        let f2 = w.dot(lms_dt2);

        let u = f1 / (f1 * f1 - 0.5 * f * f2);
        let root = if u >= 0.0 { -f * u } else { NO_ROOT };
        best = best.min(root);
    }

    t += best;
    t
}

// ============================================================================
// Okhsl Chroma Bounds
// ============================================================================

/// Computes the chroma bounds Okhsl interpolates between.
///
/// `c_max` is the gamut boundary, `c_mid` a smooth blend of two fitted
/// approximations scaled to the real boundary, `c0` a hue-independent
/// estimate near grey.
pub fn get_cs(l: f64, a: f64, b: f64) -> ChromaBounds {
    let cusp = find_cusp(a, b);

    let c_max = find_gamut_intersection(a, b, l, 1.0, l, Some(cusp));
    let (s_max, t_max) = get_st_max(a, b, Some(cusp));

    let s_mid = 0.11516993
        + 1.0
            / (7.44778970
                + 4.15901240 * b
                + a * (-2.19557347
                    + 1.75198401 * b
                    + a * (-2.13704948 - 10.02301043 * b
                        + a * (-4.24894561 + 5.38770819 * b + 4.69891013 * a))));

    let t_mid = 0.11239642
        + 1.0
            / (1.61320320 - 0.68124379 * b
                + a * (0.40370612
                    + 0.90148123 * b
                    + a * (-0.27087943
                        + 0.61223990 * b
                        + a * (0.00299215 - 0.45399568 * b - 0.14661872 * a))));

    let k = c_max / (l * s_max).min((1.0 - l) * t_max);

    let ca = l * s_mid;
    let cb = (1.0 - l) * t_mid;
    let c_mid = 0.9 * k * (1.0 / (1.0 / ca.powi(4) + 1.0 / cb.powi(4))).sqrt().sqrt();

    let ca = l * 0.4;
    let cb = (1.0 - l) * 0.8;
    let c0 = (1.0 / (1.0 / (ca * ca) + 1.0 / (cb * cb))).sqrt();

    ChromaBounds { c0, c_mid, c_max }
}
