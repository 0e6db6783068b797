//! # tinct-transfer
//!
//! Transfer functions converting between linear light and display-encoded values.
//!
//! # Terminology
//!
//! - **OETF**: Linear -> Encoded
//! - **EOTF**: Encoded -> Linear
//!
//! # Usage
//!
//! ```rust
//! use tinct_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `tinct-color` - every conversion that goes through linear light

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
