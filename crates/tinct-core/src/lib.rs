//! # tinct-core
//!
//! Core value types for the tinct color conversion library.
//!
//! - [`Color`] - sRGB-encoded RGB with optional alpha, the canonical representation
//! - [`Components`] - a model tuple (HSL, Lab, Oklch, ...) produced by a conversion
//! - [`presets`] - named constant colors
//! - [`Error`], [`Result`] - decoding and validation errors
//!
//! ## Crate Structure
//!
//! ```text
//! tinct-core (this crate)
//!    ^
//!    |
//!    +-- tinct-color (conversion engine)
//!    +-- tinct-format (hex, bytes, CSS)
//!    +-- tinct-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod presets;

pub use color::{Color, Components};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::{Color, Components};
    pub use crate::error::{Error, Result};
    pub use crate::presets;
}
