//! # tinct-color
//!
//! The conversion engine: every color model tinct supports, as pairs of
//! `from_*` / `to_*` functions over [`Color`].
//!
//! # Conventions
//!
//! - A [`Color`] holds sRGB-encoded components in [0, 1].
//! - Every model tuple is normalized to a [0, 1] scale. Hue is in turns,
//!   CIE Lab and Luv components are divided by 100.
//! - `from_*` writes into an existing color and returns it for chaining.
//! - `to_*` returns a fresh [`Components`] tuple.
//! - Alpha follows the contract described in [`tinct_core::color`]:
//!   explicit alpha overrides, otherwise the source alpha is carried through.
//!
//! # Models
//!
//! | Module | Model | Notes |
//! |--------|-------|-------|
//! | [`rgb`] | sRGB | identity |
//! | [`linear`] | linear sRGB | sRGB transfer decoded |
//! | [`p3`] | Display P3 | D65, sRGB transfer |
//! | [`xyz`] | CIE XYZ | D65 and D50 (Bradford) |
//! | [`lab`] | CIE Lab | D50 default, D65 variant |
//! | [`lch`] | CIE LCh | polar Lab (D50) |
//! | [`oklab`] | Oklab | |
//! | [`oklch`] | Oklch | polar Oklab |
//! | [`okhsl`], [`okhsv`] | Okhsl, Okhsv | gamut-aware, see [`ok_gamut`] |
//! | [`hsl`], [`hsv`], [`hwb`] | HSL, HSV, HWB | hexcone models |
//! | [`luv`] | CIE Luv | D65, plus the HSLuv gamut bounds |
//! | [`lchuv`] | LCHuv | polar Luv |
//! | [`hsluv`], [`hpluv`] | HSLuv, HPLuv | |
//!
//! [`ColorModel`] enumerates them all for dynamic dispatch.
//!
//! # Usage
//!
//! ```rust
//! use tinct_color::{from_okhsl, to_hsl};
//! use tinct_core::Color;
//!
//! let mut c = Color::default();
//! from_okhsl(&mut c, 0.5, 0.8, 0.6, None);
//! let hsl = to_hsl(&c);
//! assert_eq!(hsl.alpha, Some(1.0));
//! ```
//!
//! # Dependencies
//!
//! - [`tinct-core`] - Color and Components types
//! - [`tinct-math`] - Vec3/Mat3 transforms
//! - [`tinct-transfer`] - sRGB encode/decode
//! - [`tinct-primaries`] - RGB/XYZ matrices and white points
//!
//! # Used By
//!
//! - `tinct-format` - CSS serializers
//! - `tinct-cli` - `convert` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hpluv;
pub mod hsl;
pub mod hsluv;
pub mod hsv;
pub mod hwb;
pub mod lab;
pub mod lch;
pub mod lchuv;
pub mod linear;
pub mod luv;
pub mod model;
pub mod ok_gamut;
pub mod okhsl;
pub mod okhsv;
pub mod oklab;
pub mod oklch;
pub mod p3;
pub mod rgb;
pub mod xyz;

pub use hpluv::{from_hpluv, to_hpluv};
pub use hsl::{from_hsl, to_hsl};
pub use hsluv::{from_hsluv, to_hsluv};
pub use hsv::{from_hsv, to_hsv};
pub use hwb::{from_hwb, to_hwb};
pub use lab::{from_lab, from_lab_d65, to_lab, to_lab_d65};
pub use lch::{from_lch, to_lch};
pub use lchuv::{from_lchuv, to_lchuv};
pub use linear::{from_linear, to_linear};
pub use luv::{from_luv, to_luv};
pub use model::ColorModel;
pub use okhsl::{from_okhsl, to_okhsl};
pub use okhsv::{from_okhsv, to_okhsv};
pub use oklab::{from_oklab, to_oklab};
pub use oklch::{from_oklch, to_oklch};
pub use p3::{from_p3, to_p3};
pub use rgb::{from_rgb, to_rgb};
pub use xyz::{from_xyz, from_xyz_d50, to_xyz, to_xyz_d50};

pub use tinct_core::{Color, Components};

/// A full turn in radians.
pub(crate) const TAU: f64 = std::f64::consts::TAU;
