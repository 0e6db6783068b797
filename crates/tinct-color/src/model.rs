//! Closed enumeration of the supported color models.
//!
//! [`ColorModel`] is the dynamic entry point: pick a model at runtime (from
//! a CLI flag, a config value) and convert through it with static dispatch.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::ColorModel;
//! use tinct_core::Color;
//!
//! let model: ColorModel = "oklch".parse().unwrap();
//! let lch = model.to_components(&Color::rgb(1.0, 0.0, 0.0));
//!
//! let mut back = Color::rgb(0.0, 0.0, 0.0);
//! model.apply(&mut back, lch.values, lch.alpha);
//! assert!((back[0] - 1.0).abs() < 1e-6);
//! ```

use crate::*;
use std::fmt;
use std::str::FromStr;
use tinct_core::{Color, Components, Error};
use tracing::trace;

/// A color model tinct can convert to and from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// sRGB (storage model)
    Rgb,
    /// Linear-light sRGB
    Linear,
    /// Display P3
    P3,
    /// CIE XYZ, D50
    XyzD50,
    /// CIE XYZ, D65
    XyzD65,
    /// CIE Lab, D50
    Lab,
    /// CIE Lab, D65
    LabD65,
    /// CIE LCh, D50
    Lch,
    /// Oklab
    Oklab,
    /// Oklch
    Oklch,
    /// Okhsl
    Okhsl,
    /// Okhsv
    Okhsv,
    /// HSL
    Hsl,
    /// HSV
    Hsv,
    /// HWB
    Hwb,
    /// CIE Luv, D65
    Luv,
    /// LCHuv
    Lchuv,
    /// HSLuv
    Hsluv,
    /// HPLuv
    Hpluv,
}

type FromFn = fn(&mut Color, f64, f64, f64, Option<f64>) -> &mut Color;
type ToFn = fn(&Color) -> Components;

impl ColorModel {
    /// All models, in display order.
    pub const ALL: [ColorModel; 19] = [
        Self::Rgb,
        Self::Linear,
        Self::P3,
        Self::XyzD50,
        Self::XyzD65,
        Self::Lab,
        Self::LabD65,
        Self::Lch,
        Self::Oklab,
        Self::Oklch,
        Self::Okhsl,
        Self::Okhsv,
        Self::Hsl,
        Self::Hsv,
        Self::Hwb,
        Self::Luv,
        Self::Lchuv,
        Self::Hsluv,
        Self::Hpluv,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Linear => "linear",
            Self::P3 => "p3",
            Self::XyzD50 => "xyz-d50",
            Self::XyzD65 => "xyz-d65",
            Self::Lab => "lab",
            Self::LabD65 => "lab-d65",
            Self::Lch => "lch",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
            Self::Okhsl => "okhsl",
            Self::Okhsv => "okhsv",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Hwb => "hwb",
            Self::Luv => "luv",
            Self::Lchuv => "lchuv",
            Self::Hsluv => "hsluv",
            Self::Hpluv => "hpluv",
        }
    }

    /// Component labels, e.g. `["h", "s", "l"]`.
    pub const fn labels(self) -> [&'static str; 3] {
        match self {
            Self::Rgb | Self::Linear | Self::P3 => ["r", "g", "b"],
            Self::XyzD50 | Self::XyzD65 => ["x", "y", "z"],
            Self::Lab | Self::LabD65 | Self::Oklab => ["l", "a", "b"],
            Self::Lch | Self::Oklch | Self::Lchuv => ["l", "c", "h"],
            Self::Okhsl | Self::Hsl | Self::Hsluv | Self::Hpluv => ["h", "s", "l"],
            Self::Okhsv | Self::Hsv => ["h", "s", "v"],
            Self::Hwb => ["h", "w", "b"],
            Self::Luv => ["l", "u", "v"],
        }
    }

    fn from_fn(self) -> FromFn {
        match self {
            Self::Rgb => from_rgb,
            Self::Linear => from_linear,
            Self::P3 => from_p3,
            Self::XyzD50 => from_xyz_d50,
            Self::XyzD65 => from_xyz,
            Self::Lab => from_lab,
            Self::LabD65 => from_lab_d65,
            Self::Lch => from_lch,
            Self::Oklab => from_oklab,
            Self::Oklch => from_oklch,
            Self::Okhsl => from_okhsl,
            Self::Okhsv => from_okhsv,
            Self::Hsl => from_hsl,
            Self::Hsv => from_hsv,
            Self::Hwb => from_hwb,
            Self::Luv => from_luv,
            Self::Lchuv => from_lchuv,
            Self::Hsluv => from_hsluv,
            Self::Hpluv => from_hpluv,
        }
    }

    fn to_fn(self) -> ToFn {
        match self {
            Self::Rgb => to_rgb,
            Self::Linear => to_linear,
            Self::P3 => to_p3,
            Self::XyzD50 => to_xyz_d50,
            Self::XyzD65 => to_xyz,
            Self::Lab => to_lab,
            Self::LabD65 => to_lab_d65,
            Self::Lch => to_lch,
            Self::Oklab => to_oklab,
            Self::Oklch => to_oklch,
            Self::Okhsl => to_okhsl,
            Self::Okhsv => to_okhsv,
            Self::Hsl => to_hsl,
            Self::Hsv => to_hsv,
            Self::Hwb => to_hwb,
            Self::Luv => to_luv,
            Self::Lchuv => to_lchuv,
            Self::Hsluv => to_hsluv,
            Self::Hpluv => to_hpluv,
        }
    }

    /// Converts a color into this model.
    pub fn to_components(self, color: &Color) -> Components {
        let out = (self.to_fn())(color);
        trace!(model = self.name(), ?color, ?out, "to_components");
        out
    }

    /// Converts a color into this model, writing into `out`.
    ///
    /// `out` keeps its own alpha when `color` has none.
    pub fn to_buffer<'a>(self, color: &Color, out: &'a mut Components) -> &'a mut Components {
        self.to_components(color).write_into(out)
    }

    /// Sets `color` from values in this model.
    pub fn apply<'a>(self, color: &'a mut Color, values: [f64; 3], alpha: Option<f64>) -> &'a mut Color {
        trace!(model = self.name(), ?values, ?alpha, "apply");
        let [v0, v1, v2] = values;
        (self.from_fn())(color, v0, v1, v2, alpha)
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorModel {
    type Err = Error;

    /// Parses a model name, case-insensitively.
    ///
    /// `-` and `_` are interchangeable; a few common aliases are accepted
    /// (`srgb`, `xyz`, `lab-d50`, `display-p3`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        let model = match key.as_str() {
            "srgb" => Self::Rgb,
            "srgb-linear" | "linear-srgb" => Self::Linear,
            "display-p3" => Self::P3,
            "xyz" => Self::XyzD65,
            "lab-d50" => Self::Lab,
            "lch-d50" => Self::Lch,
            other => Self::ALL
                .into_iter()
                .find(|m| m.name() == other)
                .ok_or_else(|| Error::UnknownModel(s.to_string()))?,
        };
        Ok(model)
    }
}
