//! Display P3.
//!
//! DCI-P3 primaries, D65 white and the sRGB transfer curve. Conversion goes
//! through XYZ (D65); sRGB colors map inside [0, 1] while P3 values outside
//! the sRGB gamut decode to sRGB components outside [0, 1].

use crate::linear::{decode, encode};
use tinct_core::{Color, Components};
use tinct_math::Vec3;
use tinct_primaries::matrices;
use tinct_transfer::srgb;

/// Sets a color from gamma-encoded Display P3 components.
pub fn from_p3(color: &mut Color, r: f64, g: f64, b: f64, a: Option<f64>) -> &mut Color {
    let m = matrices();
    let linear_p3 = Vec3::from_array(srgb::eotf_rgb([r, g, b]));
    let xyz = m.p3_to_xyz_d65 * linear_p3;
    encode(color, m.xyz_d65_to_srgb * xyz, a)
}

/// Returns the gamma-encoded Display P3 components of a color.
pub fn to_p3(color: &Color) -> Components {
    let m = matrices();
    let xyz = m.srgb_to_xyz_d65 * decode(color);
    let linear_p3 = m.xyz_d65_to_p3 * xyz;
    Components::new(srgb::oetf_rgb(linear_p3.to_array()), color.alpha)
}
