//! Okhsl: an HSL-like model built on Oklab.
//!
//! `(h, s, l)` all in [0, 1]. Lightness goes through [`toe`] so that steps
//! look even; saturation is piecewise-interpolated through the chroma bounds
//! of [`get_cs`], reaching 1 exactly at the sRGB gamut boundary.

use crate::TAU;
use crate::lch::wrap_hue;
use crate::linear::decode;
use crate::ok_gamut::{get_cs, toe, toe_inv};
use crate::oklab::{from_oklab, linear_to_oklab};
use tinct_core::{Color, Components};

/// Saturation below this is reported as achromatic.
const EPSILON_S: f64 = 1e-4;
/// Lightness within this of 1 is reported as white.
const EPSILON_L: f64 = 1e-7;

/// Sets a color from Okhsl.
pub fn from_okhsl(color: &mut Color, h: f64, s: f64, l: f64, a: Option<f64>) -> &mut Color {
    if l >= 1.0 {
        return color.assign([1.0; 3], a);
    }
    if l <= 0.0 {
        return color.assign([0.0; 3], a);
    }

    let (b_, a_) = (TAU * h).sin_cos();
    let big_l = toe_inv(l);

    if s <= 0.0 {
        return from_oklab(color, big_l, 0.0, 0.0, a);
    }

    let cs = get_cs(big_l, a_, b_);

    let (t, k0, k1, k2) = if s < 0.8 {
        let k1 = 0.8 * cs.c0;
        (1.25 * s, 0.0, k1, 1.0 - k1 / cs.c_mid)
    } else {
        let k1 = 0.2 * cs.c_mid * cs.c_mid * 1.25 * 1.25 / cs.c0;
        (5.0 * (s - 0.8), cs.c_mid, k1, 1.0 - k1 / (cs.c_max - cs.c_mid))
    };

    let c = k0 + t * k1 / (1.0 - k2 * t);

    from_oklab(color, big_l, c * a_, c * b_, a)
}

/// Returns the Okhsl components of a color.
pub fn to_okhsl(color: &Color) -> Components {
    let lab = linear_to_oklab(decode(color));

    let big_l = lab.x;
    let c = lab.y.hypot(lab.z);
    let l = toe(big_l);

    if c == 0.0 || l <= 0.0 || l >= 1.0 {
        return Components::new([0.0, 0.0, l.clamp(0.0, 1.0)], color.alpha);
    }

    let a_ = lab.y / c;
    let b_ = lab.z / c;
    let h = wrap_hue(0.5 + 0.5 * (-lab.z).atan2(-lab.y) / std::f64::consts::PI);

    let cs = get_cs(big_l, a_, b_);

    let s = if c < cs.c_mid {
        let k1 = 0.8 * cs.c0;
        let k2 = 1.0 - k1 / cs.c_mid;
        let t = c / (k1 + k2 * c);
        t * 0.8
    } else {
        let k0 = cs.c_mid;
        let k1 = 0.2 * cs.c_mid * cs.c_mid * 1.25 * 1.25 / cs.c0;
        let k2 = 1.0 - k1 / (cs.c_max - cs.c_mid);
        let t = (c - k0) / (k1 + k2 * (c - k0));
        0.8 + 0.2 * t
    };

    if s.abs() < EPSILON_S || (1.0 - l).abs() < EPSILON_L {
        return Components::new([0.0, 0.0, l], color.alpha);
    }

    Components::new([h, s, l], color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn roundtrip(src: Color, eps: f64) {
        let hsl = to_okhsl(&src);
        let mut out = Color::rgb(0.5, 0.5, 0.5);
        from_okhsl(&mut out, hsl[0], hsl[1], hsl[2], hsl.alpha);
        for i in 0..3 {
            assert_abs_diff_eq!(out[i], src[i], epsilon = eps);
        }
        assert_eq!(out.alpha, src.alpha);
    }

    #[test]
    fn test_roundtrip() {
        roundtrip(Color::rgb(0.6, 0.4, 0.0), 1e-6);
        roundtrip(Color::rgb(0.4, 0.6, 0.0), 1e-6);
        roundtrip(Color::rgba(0.0, 0.4, 0.6, 0.5), 1e-6);
        roundtrip(Color::rgb(1.0, 0.0, 0.4), 1e-6);
        roundtrip(Color::rgb(0.3, 0.3, 0.3), 1e-6);
    }

    #[test]
    fn test_black_and_white() {
        let black = to_okhsl(&Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(black.values, [0.0, 0.0, 0.0]);

        let white = to_okhsl(&Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(white[0], 0.0);
        assert_eq!(white[1], 0.0);
        assert_abs_diff_eq!(white[2], 1.0, epsilon = 1e-6);

        let mut c = Color::rgb(0.5, 0.5, 0.5);
        from_okhsl(&mut c, 0.3, 1.0, 1.0, None);
        assert_eq!(c.rgb, [1.0, 1.0, 1.0]);
        from_okhsl(&mut c, 0.3, 1.0, 0.0, Some(0.2));
        assert_eq!(c.to_vec(), vec![0.0, 0.0, 0.0, 0.2]);
    }

    #[test]
    fn test_grey_is_achromatic() {
        let grey = to_okhsl(&Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(grey[0], 0.0);
        assert_eq!(grey[1], 0.0);
    }

    #[test]
    fn test_full_saturation_is_gamut_edge() {
        let mut c = Color::default();
        for i in 0..12 {
            from_okhsl(&mut c, i as f64 / 12.0, 1.0, 0.5, None);
            let linear = decode(&c);
            let (min, max) = (linear.min_element(), linear.max_element());
            assert!(max < 1.0 + 1e-2);
            assert!(min > -1e-2);
            assert!(min.abs() < 1e-2 || (max - 1.0).abs() < 1e-2);
        }
    }
}
