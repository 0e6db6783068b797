//! CIE LCh, the polar form of [`lab`](crate::lab) (D50).
//!
//! `(L, C, h)` with `L` and `C` in the same /100 unit as Lab and `h` in turns.
//! No chroma rescaling is applied.
//!
//! The polar helpers here are shared with [`oklch`](crate::oklch).

use crate::TAU;
use crate::lab::{from_lab, to_lab};
use tinct_core::{Color, Components};

/// Below this, on both `a` and `b`, a color is treated as achromatic.
pub const ACHROMATIC_EPSILON: f64 = 250.0 / 1e7;

/// Wraps a hue in turns into [0, 1).
#[inline]
pub(crate) fn wrap_hue(h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    if h >= 1.0 { 0.0 } else { h }
}

/// Cartesian `(L, a, b)` to polar `(L, C, h)`.
///
/// Achromatic input yields `C = 0` and `h = 0` exactly.
pub fn lab_to_lch([l, a, b]: [f64; 3]) -> [f64; 3] {
    if a.abs() < ACHROMATIC_EPSILON && b.abs() < ACHROMATIC_EPSILON {
        return [l, 0.0, 0.0];
    }
    [l, a.hypot(b), wrap_hue(b.atan2(a) / TAU)]
}

/// Polar `(L, C, h)` to Cartesian `(L, a, b)`.
pub fn lch_to_lab([l, c, h]: [f64; 3]) -> [f64; 3] {
    let (sin, cos) = (h * TAU).sin_cos();
    [l, c * cos, c * sin]
}

/// Sets a color from normalized LCh (D50).
pub fn from_lch(color: &mut Color, l: f64, c: f64, h: f64, a: Option<f64>) -> &mut Color {
    let [l, la, lb] = lch_to_lab([l, c, h]);
    from_lab(color, l, la, lb, a)
}

/// Returns the normalized LCh (D50) components of a color.
pub fn to_lch(color: &Color) -> Components {
    let lab = to_lab(color);
    Components::new(lab_to_lch(lab.values), lab.alpha)
}
