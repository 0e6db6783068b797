//! Chromatic Adaptation Transforms (CAT).
//!
//! Used to fold a D65 to D50 adaptation into the sRGB to XYZ-D50 matrices.
//!
//! # Usage
//!
//! ```rust
//! use tinct_math::{adapt_matrix, BRADFORD, Vec3};
//!
//! let d65 = Vec3::new(0.95047, 1.0, 1.08883);
//! let d50 = Vec3::new(0.96422, 1.0, 0.82521);
//! let d65_to_d50 = adapt_matrix(BRADFORD, d65, d50);
//!
//! let result = d65_to_d50 * d65;
//! assert!((result.z - d50.z).abs() < 1e-9);
//! ```

use crate::{Mat3, Vec3};

/// Bradford chromatic adaptation matrix.
///
/// Transforms XYZ to a "sharpened" cone response space.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Computes a chromatic adaptation matrix between two white points.
///
/// The resulting matrix transforms XYZ values from the source illuminant
/// to the destination illuminant: `M^-1 * S * M`.
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let method_inv = method.inverse().unwrap_or(Mat3::IDENTITY);

    let src_cone = method * src_white;
    let dst_cone = method * dst_white;

    let ratio = dst_cone / src_cone;
    let scale = Mat3::diagonal(ratio.x, ratio.y, ratio.z);

    method_inv * scale * method
}
