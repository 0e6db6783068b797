//! # tinct-math
//!
//! Math primitives for color conversion:
//!
//! - [`Mat3`] - 3x3 matrices for color space transformations
//! - [`Vec3`] - 3D vectors for XYZ/RGB/LMS triplets
//! - Chromatic adaptation ([`adapt_matrix`], [`BRADFORD`])
//!
//! # Design
//!
//! All values are `f64`; conversions are expected to round-trip to ~1e-9.
//! Matrix inversion is delegated to [`glam`]'s `DMat3`.
//! Matrices use **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tinct_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.0, 0.0);
//! assert_eq!(xyz.y, 0.2126729);
//! ```
//!
//! # Used By
//!
//! - `tinct-primaries` - RGB/XYZ matrix generation
//! - `tinct-color` - Oklab bases and matrix transforms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
