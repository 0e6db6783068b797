//! Oklch, the polar form of [`oklab`](crate::oklab).
//!
//! `(L, C, h)` with `C` in native Oklab units and `h` in turns.

use crate::lch::{lab_to_lch, lch_to_lab};
use crate::oklab::{from_oklab, to_oklab};
use tinct_core::{Color, Components};

/// Sets a color from Oklch.
pub fn from_oklch(color: &mut Color, l: f64, c: f64, h: f64, a: Option<f64>) -> &mut Color {
    let [l, la, lb] = lch_to_lab([l, c, h]);
    from_oklab(color, l, la, lb, a)
}

/// Returns the Oklch components of a color.
pub fn to_oklch(color: &Color) -> Components {
    let lab = to_oklab(color);
    Components::new(lab_to_lch(lab.values), lab.alpha)
}
