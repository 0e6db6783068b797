//! HPLuv: LCHuv with chroma rescaled to the hue-independent safe range.
//!
//! `(h, s, l)` with `h` and `l` in [0, 1]. Saturation is relative to the
//! largest chroma displayable at *every* hue, so `s ≤ 1` gives pastels with
//! no hue distortion and saturated colors exceed 1.

use crate::hsluv::{L_MAX, L_MIN};
use crate::lchuv::{from_lchuv, to_lchuv};
use crate::luv::max_safe_chroma_for_l;
use tinct_core::{Color, Components};

/// HPLuv to normalized LCHuv.
pub fn hpluv_to_lch([h, s, l]: [f64; 3]) -> [f64; 3] {
    if l > L_MAX {
        return [1.0, 0.0, h];
    }
    if l < L_MIN {
        return [0.0, 0.0, h];
    }
    [l, max_safe_chroma_for_l(l) * s, h]
}

/// Normalized LCHuv to HPLuv.
pub fn lch_to_hpluv([l, c, h]: [f64; 3]) -> [f64; 3] {
    if l > L_MAX {
        return [h, 0.0, 1.0];
    }
    if l < L_MIN {
        return [h, 0.0, 0.0];
    }
    [h, c / max_safe_chroma_for_l(l), l]
}

/// Sets a color from HPLuv.
pub fn from_hpluv(color: &mut Color, h: f64, s: f64, l: f64, a: Option<f64>) -> &mut Color {
    let [l, c, h] = hpluv_to_lch([h, s, l]);
    from_lchuv(color, l, c, h, a)
}

/// Returns the HPLuv components of a color.
pub fn to_hpluv(color: &Color) -> Components {
    let lch = to_lchuv(color);
    Components::new(lch_to_hpluv(lch.values), lch.alpha)
}
