//! LCHuv, the polar form of [`luv`](crate::luv).
//!
//! `(L, C, h)` with `L` and `C` divided by 100 and `h` in turns.

use crate::luv::{from_luv, lch_to_luv, luv_to_lch, to_luv};
use tinct_core::{Color, Components};
use tinct_math::Vec3;

/// Sets a color from normalized LCHuv.
pub fn from_lchuv(color: &mut Color, l: f64, c: f64, h: f64, a: Option<f64>) -> &mut Color {
    let luv = lch_to_luv(Vec3::new(l, c, h));
    from_luv(color, luv.x, luv.y, luv.z, a)
}

/// Returns the normalized LCHuv components of a color.
pub fn to_lchuv(color: &Color) -> Components {
    let luv = to_luv(color);
    Components::new(luv_to_lch(Vec3::from_array(luv.values)).to_array(), luv.alpha)
}
