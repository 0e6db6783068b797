//! CSS Color Level 4 serializers.
//!
//! Output always uses the modern space-separated syntax with an optional
//! `/ alpha` suffix; the legacy comma form (`rgba(r, g, b, a)`) is never
//! produced. Alpha is written when present and not exactly 1.
//!
//! Values are truncated, not rounded, to `precision` decimals (default 5):
//! `floor((x + f64::EPSILON) * 10^p) / 10^p`. This is the only place where
//! normalized components are scaled to degrees and percentages.
//! A value computed a hair below an integer stays below it, so a hue of
//! 200 degrees can print as `199.99999`. Precision is capped at
//! [`MAX_PRECISION`].
//!
//! # Example
//!
//! ```rust
//! use tinct_core::Color;
//! use tinct_format::css::{to_css_hsl, to_css_rgb};
//!
//! let c = Color::rgba(0.6, 0.4, 0.0, 0.5);
//! assert_eq!(to_css_rgb(&c, None), "color(srgb 0.6 0.4 0 / 0.5)");
//! assert_eq!(to_css_hsl(&c, Some(2)), "hsl(40 100% 30% / 0.5)");
//! ```

use std::fmt;
use std::str::FromStr;
use tinct_color as conv;
use tinct_core::{Color, Components, Error};

/// Default number of decimals.
pub const DEFAULT_PRECISION: u32 = 5;

/// Largest precision honored; f64 carries no more significant decimals.
pub const MAX_PRECISION: u32 = 15;

fn truncate(x: f64, precision: u32) -> f64 {
    let p = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    // + 0.0 turns -0 into 0
    ((x + f64::EPSILON) * p).floor() / p + 0.0
}

/// Scales and truncates the three values of a tuple.
fn coords(c: &Components, scale: [f64; 3], precision: Option<u32>) -> [f64; 3] {
    let p = precision.unwrap_or(DEFAULT_PRECISION);
    [0, 1, 2].map(|i| truncate(c.values[i] * scale[i], p))
}

fn alpha_suffix(alpha: Option<f64>) -> String {
    match alpha {
        Some(a) if a != 1.0 => format!(" / {a}"),
        _ => String::new(),
    }
}

fn color_fn(space: &str, c: &Components, precision: Option<u32>) -> String {
    let [x, y, z] = coords(c, [1.0; 3], precision);
    let out = format!("color({space} {x} {y} {z}{})", alpha_suffix(c.alpha));
    tracing::trace!(css = %out, "serialized");
    out
}

// ============================================================================
// RGB Spaces
// ============================================================================

/// `color(srgb r g b)`.
pub fn to_css_rgb(color: &Color, precision: Option<u32>) -> String {
    color_fn("srgb", &conv::to_rgb(color), precision)
}

/// `color(srgb-linear r g b)`.
pub fn to_css_rgb_linear(color: &Color, precision: Option<u32>) -> String {
    color_fn("srgb-linear", &conv::to_linear(color), precision)
}

/// `color(display-p3 r g b)`.
pub fn to_css_p3(color: &Color, precision: Option<u32>) -> String {
    color_fn("display-p3", &conv::to_p3(color), precision)
}

/// `hsl(h s% l%)`, hue in degrees.
pub fn to_css_hsl(color: &Color, precision: Option<u32>) -> String {
    let c = conv::to_hsl(color);
    let [h, s, l] = coords(&c, [360.0, 100.0, 100.0], precision);
    format!("hsl({h} {s}% {l}%{})", alpha_suffix(c.alpha))
}

/// `hwb(h w% b%)`, hue in degrees.
pub fn to_css_hwb(color: &Color, precision: Option<u32>) -> String {
    let c = conv::to_hwb(color);
    let [h, w, b] = coords(&c, [360.0, 100.0, 100.0], precision);
    format!("hwb({h} {w}% {b}%{})", alpha_suffix(c.alpha))
}

// ============================================================================
// CIE Spaces
// ============================================================================

/// `lab(L% a b)` against D50.
pub fn to_css_lab(color: &Color, precision: Option<u32>) -> String {
    let c = conv::to_lab(color);
    let [l, a, b] = coords(&c, [100.0; 3], precision);
    format!("lab({l}% {a} {b}{})", alpha_suffix(c.alpha))
}

/// `lab-d65(L% a b)`.
pub fn to_css_lab_d65(color: &Color, precision: Option<u32>) -> String {
    let c = conv::to_lab_d65(color);
    let [l, a, b] = coords(&c, [100.0; 3], precision);
    format!("lab-d65({l}% {a} {b}{})", alpha_suffix(c.alpha))
}

/// `lch(L% C h)` against D50, hue in degrees.
pub fn to_css_lch(color: &Color, precision: Option<u32>) -> String {
    let c = conv::to_lch(color);
    let [l, ch, h] = coords(&c, [100.0, 100.0, 360.0], precision);
    format!("lch({l}% {ch} {h}{})", alpha_suffix(c.alpha))
}

/// `oklab(L% a b)`.
pub fn to_css_oklab(color: &Color, precision: Option<u32>) -> String {
    let c = conv::to_oklab(color);
    let [l, a, b] = coords(&c, [100.0, 1.0, 1.0], precision);
    format!("oklab({l}% {a} {b}{})", alpha_suffix(c.alpha))
}

/// `oklch(L% C h)`, hue in degrees.
pub fn to_css_oklch(color: &Color, precision: Option<u32>) -> String {
    let c = conv::to_oklch(color);
    let [l, ch, h] = coords(&c, [100.0, 1.0, 360.0], precision);
    format!("oklch({l}% {ch} {h}{})", alpha_suffix(c.alpha))
}

/// `color(xyz-d50 x y z)`.
pub fn to_css_xyz_d50(color: &Color, precision: Option<u32>) -> String {
    color_fn("xyz-d50", &conv::to_xyz_d50(color), precision)
}

/// `color(xyz x y z)`, D65.
pub fn to_css_xyz(color: &Color, precision: Option<u32>) -> String {
    color_fn("xyz", &conv::to_xyz(color), precision)
}

// ============================================================================
// Dispatch
// ============================================================================

/// The CSS serializations, for picking one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssFormat {
    /// `color(srgb ...)`
    Rgb,
    /// `color(srgb-linear ...)`
    RgbLinear,
    /// `color(display-p3 ...)`
    P3,
    /// `hsl(...)`
    Hsl,
    /// `hwb(...)`
    Hwb,
    /// `lab(...)`
    Lab,
    /// `lab-d65(...)`
    LabD65,
    /// `lch(...)`
    Lch,
    /// `oklab(...)`
    Oklab,
    /// `oklch(...)`
    Oklch,
    /// `color(xyz-d50 ...)`
    XyzD50,
    /// `color(xyz ...)`
    Xyz,
}

impl CssFormat {
    /// All formats.
    pub const ALL: [CssFormat; 12] = [
        Self::Rgb,
        Self::RgbLinear,
        Self::P3,
        Self::Hsl,
        Self::Hwb,
        Self::Lab,
        Self::LabD65,
        Self::Lch,
        Self::Oklab,
        Self::Oklch,
        Self::XyzD50,
        Self::Xyz,
    ];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::RgbLinear => "rgb-linear",
            Self::P3 => "p3",
            Self::Hsl => "hsl",
            Self::Hwb => "hwb",
            Self::Lab => "lab",
            Self::LabD65 => "lab-d65",
            Self::Lch => "lch",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
            Self::XyzD50 => "xyz-d50",
            Self::Xyz => "xyz",
        }
    }

    /// Serializes `color` in this format.
    pub fn format(self, color: &Color, precision: Option<u32>) -> String {
        let f: fn(&Color, Option<u32>) -> String = match self {
            Self::Rgb => to_css_rgb,
            Self::RgbLinear => to_css_rgb_linear,
            Self::P3 => to_css_p3,
            Self::Hsl => to_css_hsl,
            Self::Hwb => to_css_hwb,
            Self::Lab => to_css_lab,
            Self::LabD65 => to_css_lab_d65,
            Self::Lch => to_css_lch,
            Self::Oklab => to_css_oklab,
            Self::Oklch => to_css_oklch,
            Self::XyzD50 => to_css_xyz_d50,
            Self::Xyz => to_css_xyz,
        };
        f(color, precision)
    }
}

impl fmt::Display for CssFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CssFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "srgb" => Ok(Self::Rgb),
            "srgb-linear" => Ok(Self::RgbLinear),
            "display-p3" => Ok(Self::P3),
            other => Self::ALL
                .into_iter()
                .find(|f| f.name() == other)
                .ok_or_else(|| Error::UnknownModel(s.to_string())),
        }
    }
}
