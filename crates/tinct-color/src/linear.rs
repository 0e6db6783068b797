//! Linear-light sRGB.
//!
//! Decodes the sRGB transfer curve. Alpha is never transformed.

use tinct_core::{Color, Components};
use tinct_math::Vec3;
use tinct_transfer::srgb;

/// Decodes a color's RGB into linear light.
#[inline]
pub(crate) fn decode(color: &Color) -> Vec3 {
    Vec3::from_array(srgb::eotf_rgb(color.rgb))
}

/// Encodes linear light into the color and applies the alpha contract.
#[inline]
pub(crate) fn encode(color: &mut Color, linear: Vec3, a: Option<f64>) -> &mut Color {
    color.assign(srgb::oetf_rgb(linear.to_array()), a)
}

/// Sets a color from linear-light sRGB components.
pub fn from_linear(color: &mut Color, r: f64, g: f64, b: f64, a: Option<f64>) -> &mut Color {
    encode(color, Vec3::new(r, g, b), a)
}

/// Returns the linear-light sRGB components of a color.
pub fn to_linear(color: &Color) -> Components {
    Components::new(decode(color).to_array(), color.alpha)
}
