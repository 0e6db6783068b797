//! Okhsv: an HSV-like model built on Oklab.
//!
//! `(h, s, v)` all in [0, 1]. Each hue slice of the sRGB gamut is mapped
//! onto a square: `v = 1` follows the upper gamut edge through the cusp,
//! `s = 1` the lower edge from black to the cusp.

use crate::TAU;
use crate::lch::wrap_hue;
use crate::linear::decode;
use crate::ok_gamut::{get_st_max, toe, toe_inv};
use crate::oklab::{from_oklab, linear_to_oklab, oklab_to_linear};
use tinct_core::{Color, Components};
use tinct_math::Vec3;

const S0: f64 = 0.5;
/// Saturation below this is reported as achromatic.
const EPSILON_S: f64 = 1e-4;

/// `cbrt(1 / max(r, g, b))` of the linear sRGB color at `(l, c)` along hue
/// `(a, b)`: the factor that brings the value ramp back onto the gamut.
#[inline]
fn value_scale(l: f64, c: f64, a: f64, b: f64) -> f64 {
    let rgb = oklab_to_linear(Vec3::new(l, a * c, b * c));
    (1.0 / rgb.max_element().max(0.0)).cbrt()
}

/// Sets a color from Okhsv.
pub fn from_okhsv(color: &mut Color, h: f64, s: f64, v: f64, alpha: Option<f64>) -> &mut Color {
    let mut l = toe_inv(v);
    let mut a = 0.0;
    let mut b = 0.0;

    if l != 0.0 && s != 0.0 {
        let (b_, a_) = (TAU * h).sin_cos();

        let (s_max, t_max) = get_st_max(a_, b_, None);
        let k = 1.0 - S0 / s_max;

        let denom = S0 + t_max - t_max * k * s;
        let lv = 1.0 - s * S0 / denom;
        let cv = s * t_max * S0 / denom;

        l = v * lv;
        let mut c = v * cv;

        // compensate for the toe and the curved top of the gamut
        let lvt = toe_inv(lv);
        let cvt = cv * lvt / lv;

        let l_new = toe_inv(l);
        c = c * l_new / l;
        l = l_new;

        let scale = value_scale(lvt, cvt, a_, b_);
        l *= scale;
        c *= scale;

        a = c * a_;
        b = c * b_;
    }

    from_oklab(color, l, a, b, alpha)
}

/// Returns the Okhsv components of a color.
pub fn to_okhsv(color: &Color) -> Components {
    let lab = linear_to_oklab(decode(color));

    let mut l = lab.x;
    let c = lab.y.hypot(lab.z);
    let mut h = wrap_hue(0.5 + 0.5 * (-lab.z).atan2(-lab.y) / std::f64::consts::PI);

    let (s, v) = if l != 0.0 && l != 1.0 && c != 0.0 {
        let a_ = lab.y / c;
        let b_ = lab.z / c;
        let (s_max, t_max) = get_st_max(a_, b_, None);

        let t = t_max / (c + l * t_max);
        let lv = t * l;
        let cv = t * c;

        let lvt = toe_inv(lv);
        let cvt = cv * lvt / lv;

        l /= value_scale(lvt, cvt, a_, b_);

        let s = (S0 + t_max) * cv / (t_max * S0 + t_max * (1.0 - S0 / s_max) * cv);
        (s, toe(l) / lv)
    } else {
        (0.0, toe(l))
    };

    if s.abs() < EPSILON_S || v == 0.0 {
        h = 0.0;
    }

    Components::new([h, s, v], color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn roundtrip(src: Color) {
        let hsv = to_okhsv(&src);
        let mut out = Color::rgb(0.5, 0.5, 0.5);
        from_okhsv(&mut out, hsv[0], hsv[1], hsv[2], hsv.alpha);
        for i in 0..3 {
            assert_abs_diff_eq!(out[i], src[i], epsilon = 1e-6);
        }
        assert_eq!(out.alpha, src.alpha);
    }

    #[test]
    fn test_roundtrip() {
        roundtrip(Color::rgb(0.6, 0.4, 0.0));
        roundtrip(Color::rgb(0.4, 0.6, 0.0));
        roundtrip(Color::rgba(0.0, 0.4, 0.6, 0.1));
        roundtrip(Color::rgb(1.0, 0.0, 0.4));
        roundtrip(Color::rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_primaries_are_fully_saturated() {
        for c in [
            Color::rgb(1.0, 0.0, 0.0),
            Color::rgb(0.0, 1.0, 0.0),
            Color::rgb(0.0, 0.0, 1.0),
        ] {
            let hsv = to_okhsv(&c);
            assert_abs_diff_eq!(hsv[1], 1.0, epsilon = 1e-3);
            assert_abs_diff_eq!(hsv[2], 1.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_black_and_white() {
        let black = to_okhsv(&Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(black.values, [0.0, 0.0, 0.0]);

        let white = to_okhsv(&Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(white[0], 0.0);
        assert_abs_diff_eq!(white[1], 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(white[2], 1.0, epsilon = 1e-6);

        let mut c = Color::rgb(0.2, 0.3, 0.4);
        from_okhsv(&mut c, 0.7, 0.0, 1.0, None);
        for i in 0..3 {
            assert_abs_diff_eq!(c[i], 1.0, epsilon = 1e-6);
        }
        assert_eq!(c.alpha, None);
    }
}
