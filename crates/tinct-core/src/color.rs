//! Color and component value types.
//!
//! # Types
//!
//! - [`Color`] - sRGB-encoded RGB triplet with optional alpha
//! - [`Components`] - a model tuple (HSL, Lab, Oklch, ...) produced by a conversion
//!
//! # Alpha Contract
//!
//! Alpha is optional and "no alpha" is distinct from "alpha = 1":
//!
//! - An explicitly supplied alpha always overrides.
//! - Otherwise an alpha already carried by the source is propagated unchanged.
//! - Otherwise the result has no alpha, or keeps the destination's alpha when
//!   writing in place.
//!
//! Only [`Color::create`] (and [`Default`]) assign a default alpha of 1.
//!
//! ```rust
//! use tinct_core::Color;
//!
//! let mut c = Color::rgb(0.1, 0.2, 0.3);
//! assert_eq!(c.alpha(), None);
//!
//! c.set_alpha(None);
//! assert_eq!(c.alpha(), None);
//!
//! c.set_alpha(Some(0.5));
//! assert_eq!(c.alpha(), Some(0.5));
//!
//! assert_eq!(Color::create(0.1, 0.2, 0.3, None).alpha(), Some(1.0));
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A color: three sRGB-encoded components in [0, 1] plus optional alpha.
///
/// Components are positional (`[0]` = R, `[1]` = G, `[2]` = B). Values outside
/// [0, 1] are allowed transiently, e.g. when decoding a wide-gamut Lab value.
///
/// # Example
///
/// ```rust
/// use tinct_core::Color;
///
/// let red = Color::rgba(1.0, 0.0, 0.0, 0.4);
/// assert_eq!(red[0], 1.0);
/// assert_eq!(red.to_vec(), vec![1.0, 0.0, 0.0, 0.4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// R, G, B components (sRGB-encoded).
    pub rgb: [f64; 3],
    /// Optional alpha component.
    pub alpha: Option<f64>,
}

impl Color {
    /// Creates a new color, defaulting alpha to 1 when none is supplied.
    ///
    /// This is the only constructor that assigns a default alpha.
    #[inline]
    pub const fn create(r: f64, g: f64, b: f64, a: Option<f64>) -> Self {
        let alpha = match a {
            Some(a) => a,
            None => 1.0,
        };
        Self {
            rgb: [r, g, b],
            alpha: Some(alpha),
        }
    }

    /// Creates a color without alpha.
    #[inline]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: None,
        }
    }

    /// Creates a color with alpha.
    #[inline]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: Some(a),
        }
    }

    /// Returns the alpha component, if any.
    #[inline]
    pub const fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// Overrides alpha when `a` is `Some`, otherwise leaves it untouched.
    #[inline]
    pub fn set_alpha(&mut self, a: Option<f64>) -> &mut Self {
        if let Some(a) = a {
            self.alpha = Some(a);
        }
        self
    }

    /// Returns a copy with the given alpha.
    #[inline]
    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.alpha = Some(a);
        self
    }

    /// Returns a copy of this color.
    #[inline]
    pub const fn copy(&self) -> Self {
        *self
    }

    /// Sets this color from another one.
    ///
    /// The RGB components are always copied; alpha only when `other` has one.
    #[inline]
    pub fn set(&mut self, other: &Color) -> &mut Self {
        self.rgb = other.rgb;
        self.set_alpha(other.alpha)
    }

    /// Overwrites the first three components and applies the alpha contract.
    #[inline]
    pub fn assign(&mut self, rgb: [f64; 3], a: Option<f64>) -> &mut Self {
        self.rgb = rgb;
        self.set_alpha(a)
    }

    /// Returns the components as a vector of 3 or 4 values.
    pub fn to_vec(&self) -> Vec<f64> {
        let mut v = self.rgb.to_vec();
        if let Some(a) = self.alpha {
            v.push(a);
        }
        v
    }

    /// Fails with [`Error::NonFinite`] if any component is NaN or infinite.
    ///
    /// Conversions do not call this themselves; non-finite input simply
    /// propagates. Callers that prefer to fail fast can validate first.
    pub fn validate(&self) -> Result<()> {
        for (i, v) in self.rgb.iter().copied().chain(self.alpha).enumerate() {
            if !v.is_finite() {
                return Err(Error::non_finite(i, v));
            }
        }
        Ok(())
    }
}

impl Default for Color {
    /// Opaque black, as produced by `Color::create(0, 0, 0, None)`.
    fn default() -> Self {
        Self::create(0.0, 0.0, 0.0, None)
    }
}

impl Index<usize> for Color {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.rgb[i]
    }
}

impl IndexMut<usize> for Color {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.rgb[i]
    }
}

impl From<[f64; 3]> for Color {
    fn from(rgb: [f64; 3]) -> Self {
        Self { rgb, alpha: None }
    }
}

impl From<[f64; 4]> for Color {
    fn from(c: [f64; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.rgb, self.alpha)
    }
}

/// A model tuple: three model-specific values plus optional alpha.
///
/// The meaning and range of `values` depend on the model that produced it.
/// Hue is always expressed in turns ([0, 1)).
///
/// # Example
///
/// ```rust
/// use tinct_core::Components;
///
/// let hsl = Components::new([40.0 / 360.0, 1.0, 0.3], None);
/// assert_eq!(hsl.to_vec().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Components {
    /// The three model values.
    pub values: [f64; 3],
    /// Optional alpha component.
    pub alpha: Option<f64>,
}

impl Components {
    /// Creates a new tuple.
    #[inline]
    pub const fn new(values: [f64; 3], alpha: Option<f64>) -> Self {
        Self { values, alpha }
    }

    /// Writes this tuple into `out`.
    ///
    /// The destination keeps its own alpha when this tuple has none.
    #[inline]
    pub fn write_into<'a>(&self, out: &'a mut Components) -> &'a mut Components {
        out.values = self.values;
        if let Some(a) = self.alpha {
            out.alpha = Some(a);
        }
        out
    }

    /// Returns the values as a vector of 3 or 4 numbers.
    pub fn to_vec(&self) -> Vec<f64> {
        let mut v = self.values.to_vec();
        if let Some(a) = self.alpha {
            v.push(a);
        }
        v
    }
}

impl Index<usize> for Components {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl IndexMut<usize> for Components {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.values[i]
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.values, self.alpha)
    }
}

fn write_tuple(f: &mut fmt::Formatter<'_>, v: &[f64; 3], alpha: Option<f64>) -> fmt::Result {
    let prec = f.precision().unwrap_or(5);
    write!(f, "({:.*}, {:.*}, {:.*}", prec, v[0], prec, v[1], prec, v[2])?;
    if let Some(a) = alpha {
        write!(f, ", {:.*}", prec, a)?;
    }
    write!(f, ")")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_alpha() {
        assert_eq!(
            Color::create(0.1, 0.2, 0.3, Some(0.4)).to_vec(),
            vec![0.1, 0.2, 0.3, 0.4]
        );
        assert_eq!(
            Color::create(0.1, 0.2, 0.3, None).to_vec(),
            vec![0.1, 0.2, 0.3, 1.0]
        );
        assert_eq!(Color::default(), Color::rgba(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_copy_is_independent() {
        let a = Color::rgb(0.1, 0.2, 0.3);
        let mut b = a.copy();
        b[0] = 0.9;
        assert_eq!(a[0], 0.1);
        assert_eq!(b.alpha(), None);
    }

    #[test]
    fn test_set_keeps_destination_alpha() {
        let mut dst = Color::default();
        dst.set(&Color::rgb(0.1, 0.2, 0.3));
        assert_eq!(dst.to_vec(), vec![0.1, 0.2, 0.3, 1.0]);

        dst.set(&Color::rgba(0.1, 0.2, 0.3, 0.4));
        assert_eq!(dst.alpha(), Some(0.4));

        let mut bare = Color::rgb(0.0, 0.0, 0.0);
        bare.set(&Color::rgb(0.1, 0.2, 0.3));
        assert_eq!(bare.alpha(), None);
    }

    #[test]
    fn test_write_into_keeps_alpha() {
        let mut out = Components::new([0.0; 3], Some(0.7));
        Components::new([1.0, 2.0, 3.0], None).write_into(&mut out);
        assert_eq!(out.values, [1.0, 2.0, 3.0]);
        assert_eq!(out.alpha, Some(0.7));

        Components::new([1.0, 2.0, 3.0], Some(0.2)).write_into(&mut out);
        assert_eq!(out.alpha, Some(0.2));
    }

    #[test]
    fn test_validate() {
        assert!(Color::rgb(0.1, 0.2, 0.3).validate().is_ok());
        let err = Color::rgba(0.1, f64::INFINITY, 0.3, 1.0).validate().unwrap_err();
        assert_eq!(err, Error::non_finite(1, f64::INFINITY));
        assert!(Color::rgba(0.1, 0.2, 0.3, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{:.2}", Color::rgba(1.0, 0.0, 0.4, 0.5)), "(1.00, 0.00, 0.40, 0.50)");
        assert_eq!(format!("{:.1}", Components::new([0.5; 3], None)), "(0.5, 0.5, 0.5)");
    }
}
