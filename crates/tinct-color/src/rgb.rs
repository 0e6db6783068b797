//! sRGB, the storage model itself.
//!
//! These exist so sRGB can be addressed like every other model, e.g. from
//! [`ColorModel`](crate::ColorModel) dispatch.

use tinct_core::{Color, Components};

/// Sets a color from sRGB-encoded components.
#[inline]
pub fn from_rgb(color: &mut Color, r: f64, g: f64, b: f64, a: Option<f64>) -> &mut Color {
    color.assign([r, g, b], a)
}

/// Returns the sRGB-encoded components of a color.
#[inline]
pub fn to_rgb(color: &Color) -> Components {
    Components::new(color.rgb, color.alpha)
}
