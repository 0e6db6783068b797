//! HSLuv: LCHuv with chroma rescaled to the sRGB gamut at each hue.
//!
//! `(h, s, l)` all in [0, 1]. `s = 1` is the most saturated sRGB color at
//! that hue and lightness.

use crate::lchuv::{from_lchuv, to_lchuv};
use crate::luv::max_chroma_for_lh;
use tinct_core::{Color, Components};

/// Lightness above this is treated as white.
pub(crate) const L_MAX: f64 = 0.999999999;
/// Lightness below this is treated as black.
pub(crate) const L_MIN: f64 = 1e-10;

/// HSLuv to normalized LCHuv.
pub fn hsluv_to_lch([h, s, l]: [f64; 3]) -> [f64; 3] {
    if l > L_MAX {
        return [1.0, 0.0, h];
    }
    if l < L_MIN {
        return [0.0, 0.0, h];
    }
    [l, max_chroma_for_lh(l, h) * s, h]
}

/// Normalized LCHuv to HSLuv.
pub fn lch_to_hsluv([l, c, h]: [f64; 3]) -> [f64; 3] {
    if l > L_MAX {
        return [h, 0.0, 1.0];
    }
    if l < L_MIN {
        return [h, 0.0, 0.0];
    }
    [h, c / max_chroma_for_lh(l, h), l]
}

/// Sets a color from HSLuv.
pub fn from_hsluv(color: &mut Color, h: f64, s: f64, l: f64, a: Option<f64>) -> &mut Color {
    let [l, c, h] = hsluv_to_lch([h, s, l]);
    from_lchuv(color, l, c, h, a)
}

/// Returns the HSLuv components of a color.
pub fn to_hsluv(color: &Color) -> Components {
    let lch = to_lchuv(color);
    Components::new(lch_to_hsluv(lch.values), lch.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries_are_fully_saturated() {
        for c in [
            Color::rgb(1.0, 0.0, 0.0),
            Color::rgb(0.0, 1.0, 0.0),
            Color::rgb(0.0, 0.0, 1.0),
        ] {
            assert_abs_diff_eq!(to_hsluv(&c)[1], 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_black_and_white() {
        let black = to_hsluv(&Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(black.values, [0.0, 0.0, 0.0]);

        let white = to_hsluv(&Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(white[0], 0.0);
        assert_eq!(white[1], 0.0);
        assert_abs_diff_eq!(white[2], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_boundaries_keep_hue() {
        assert_eq!(hsluv_to_lch([0.3, 0.5, 1.0]), [1.0, 0.0, 0.3]);
        assert_eq!(hsluv_to_lch([0.3, 0.5, 0.0]), [0.0, 0.0, 0.3]);
        assert_eq!(lch_to_hsluv([0.0, 0.2, 0.7]), [0.7, 0.0, 0.0]);
    }

    #[test]
    fn test_roundtrip() {
        for src in [
            Color::rgb(0.6, 0.4, 0.0),
            Color::rgba(0.0, 0.4, 0.6, 0.25),
            Color::rgb(1.0, 0.0, 0.4),
        ] {
            let hsluv = to_hsluv(&src);
            let mut out = Color::rgb(0.0, 0.0, 0.0);
            from_hsluv(&mut out, hsluv[0], hsluv[1], hsluv[2], hsluv.alpha);
            for i in 0..3 {
                assert_abs_diff_eq!(out[i], src[i], epsilon = 1e-9);
            }
            assert_eq!(out.alpha, src.alpha);
        }
    }
}
