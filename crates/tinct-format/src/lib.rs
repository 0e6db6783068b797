//! # tinct-format
//!
//! Text and byte encodings for tinct colors.
//!
//! - [`bytes`] - 8-bit integer components
//! - [`hex`] - `#RRGGBB[AA]` strings and shorthands
//! - [`css`] - CSS Color Level 4 serializers
//!
//! Encodings are lossy: components are quantized to 8 bits (bytes, hex) or
//! truncated to a decimal precision (CSS).
//!
//! # Usage
//!
//! ```rust
//! use tinct_core::Color;
//! use tinct_format::{from_hex, to_css_oklch, to_hex};
//!
//! let mut c = Color::default();
//! from_hex(&mut c, "#F06").unwrap();
//! assert_eq!(to_hex(&c), "#FF0066");
//! assert!(to_css_oklch(&c, None).starts_with("oklch("));
//! ```
//!
//! # Dependencies
//!
//! - [`tinct-core`] - Color type and errors
//! - [`tinct-color`] - conversions behind the CSS serializers
//! - [`tracing`] - debug logging of rejected input
//!
//! # Used By
//!
//! - `tinct-cli` - color arguments and CSS output

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bytes;
pub mod css;
pub mod hex;

pub use bytes::{from_bytes, to_bytes};
pub use css::*;
pub use hex::{from_hex, to_hex, to_hex_with};
