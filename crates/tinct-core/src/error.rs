//! Error types for tinct operations.
//!
//! Numeric conversions are total functions and never fail. Only textual or
//! byte-level input (hex strings, byte arrays, model names) and the optional
//! strict finiteness check surface an [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use tinct_core::{Error, Result};
//!
//! fn parse_digit(c: char) -> Result<u8> {
//!     c.to_digit(16)
//!         .map(|d| d as u8)
//!         .ok_or_else(|| Error::invalid_format(c.to_string(), "not a hex digit"))
//! }
//!
//! assert!(parse_digit('g').is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `tinct-format` - Hex and byte codecs
//! - `tinct-color` - Model name parsing
//! - `tinct-cli` - Wrapped into `anyhow` errors

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or validating colors.
///
/// # Categories
///
/// - **Format errors**: [`InvalidFormat`](Error::InvalidFormat)
/// - **Numeric errors**: [`NonFinite`](Error::NonFinite)
/// - **Lookup errors**: [`UnknownModel`](Error::UnknownModel), [`UnknownPreset`](Error::UnknownPreset)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Textual or byte input could not be decoded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_core::Error;
    ///
    /// let err = Error::invalid_format("#GG0000", "non-hex character 'G'");
    /// assert!(err.to_string().contains("#GG0000"));
    /// ```
    #[error("invalid color format '{input}': {reason}")]
    InvalidFormat {
        /// The offending input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// A component is NaN or infinite.
    #[error("component {component} is not finite ({value})")]
    NonFinite {
        /// Positional index of the component (3 = alpha)
        component: usize,
        /// The value found
        value: f64,
    },

    /// A color model name did not match any supported model.
    #[error("unknown color model: {0}")]
    UnknownModel(String),

    /// A preset name did not match any named color.
    #[error("unknown preset color: {0}")]
    UnknownPreset(String),
}

impl Error {
    /// Creates an [`Error::InvalidFormat`] error.
    #[inline]
    pub fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::NonFinite`] error.
    #[inline]
    pub fn non_finite(component: usize, value: f64) -> Self {
        Self::NonFinite { component, value }
    }

    /// Returns `true` if this is a decoding error.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format() {
        let err = Error::invalid_format("#12345", "expected 3, 4, 6 or 8 hex digits");
        let msg = err.to_string();
        assert!(msg.contains("#12345"));
        assert!(msg.contains("hex digits"));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_non_finite() {
        let err = Error::non_finite(3, f64::NAN);
        assert!(err.to_string().contains("component 3"));
        assert!(!err.is_format_error());
    }

    #[test]
    fn test_unknown_model() {
        let err = Error::UnknownModel("cmyk".into());
        assert_eq!(err.to_string(), "unknown color model: cmyk");
    }
}
