//! # tinct-primaries
//!
//! Color primaries, reference illuminants, and RGB-XYZ matrix generation.
//!
//! Matrices are derived from the chromaticity coordinates of the primaries
//! and white point rather than hard-coded, so every forward/inverse pair is an
//! exact inverse up to floating point. The common set is computed once and
//! shared read-only through [`matrices`].
//!
//! # Included Color Spaces
//!
//! | Color Space | White | Use |
//! |-------------|-------|-----|
//! | sRGB | D65 | Canonical color storage |
//! | Display P3 | D65 | Wide-gamut displays, CSS `display-p3` |
//!
//! # Usage
//!
//! ```rust
//! use tinct_primaries::{SRGB, rgb_to_xyz_matrix};
//! use tinct_math::Vec3;
//!
//! let matrix = rgb_to_xyz_matrix(&SRGB);
//! let xyz = matrix * Vec3::new(1.0, 0.0, 0.0);
//! assert!((xyz.y - 0.2126).abs() < 1e-4);
//! ```
//!
//! # Dependencies
//!
//! - [`tinct-math`] - Matrix operations and Bradford adaptation
//!
//! # Used By
//!
//! - `tinct-color` - XYZ, Lab, Luv and P3 conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::sync::LazyLock;
use tinct_math::{BRADFORD, Mat3, Vec3, adapt_matrix};

/// RGB color space primaries definition.
///
/// Defines a color space by its three primary colors (R, G, B) and white point,
/// all specified as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

/// A reference white: a named CIE xy chromaticity.
///
/// The tristimulus value is derived with `Y = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illuminant {
    /// Illuminant name
    pub name: &'static str,
    /// (x, y) chromaticity
    pub xy: (f64, f64),
}

impl Illuminant {
    /// XYZ tristimulus value with `Y = 1`.
    #[inline]
    pub fn xyz(&self) -> Vec3 {
        xy_to_xyz(self.xy.0, self.xy.1)
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// D50 white point chromaticity (~5000K).
pub const D50_XY: (f64, f64) = (0.34567, 0.35850);

/// CIE Standard Illuminant D65.
pub const D65: Illuminant = Illuminant {
    name: "D65",
    xy: D65_XY,
};

/// CIE Standard Illuminant D50.
pub const D50: Illuminant = Illuminant {
    name: "D50",
    xy: D50_XY,
};

// ============================================================================
// Standard Color Space Primaries
// ============================================================================

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Display P3 primaries (D65 white point).
///
/// DCI-P3 primaries with a D65 white point and the sRGB transfer curve.
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Display P3",
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white point maps correctly
/// 3. Multiply primaries by scaling factors
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = primaries.white_xyz();

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // S = M^-1 * W
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries).inverse().unwrap_or(Mat3::IDENTITY)
}

// ============================================================================
// Shared Matrix Set
// ============================================================================

/// The matrices used by the conversion engine.
///
/// All RGB sides are **linear** light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrices {
    /// Linear sRGB to XYZ (D65).
    pub srgb_to_xyz_d65: Mat3,
    /// XYZ (D65) to linear sRGB.
    pub xyz_d65_to_srgb: Mat3,
    /// Linear sRGB to XYZ (D50), Bradford adaptation folded in.
    pub srgb_to_xyz_d50: Mat3,
    /// XYZ (D50) to linear sRGB.
    pub xyz_d50_to_srgb: Mat3,
    /// Linear Display P3 to XYZ (D65).
    pub p3_to_xyz_d65: Mat3,
    /// XYZ (D65) to linear Display P3.
    pub xyz_d65_to_p3: Mat3,
    /// D65 white tristimulus.
    pub d65: Vec3,
    /// D50 white tristimulus.
    pub d50: Vec3,
}

impl Matrices {
    fn compute() -> Self {
        let d65 = D65.xyz();
        let d50 = D50.xyz();

        let srgb_to_xyz_d65 = rgb_to_xyz_matrix(&SRGB);
        let srgb_to_xyz_d50 = adapt_matrix(BRADFORD, d65, d50) * srgb_to_xyz_d65;
        let p3_to_xyz_d65 = rgb_to_xyz_matrix(&DISPLAY_P3);

        Self {
            srgb_to_xyz_d65,
            xyz_d65_to_srgb: srgb_to_xyz_d65.inverse().unwrap_or(Mat3::IDENTITY),
            srgb_to_xyz_d50,
            xyz_d50_to_srgb: srgb_to_xyz_d50.inverse().unwrap_or(Mat3::IDENTITY),
            p3_to_xyz_d65,
            xyz_d65_to_p3: p3_to_xyz_d65.inverse().unwrap_or(Mat3::IDENTITY),
            d65,
            d50,
        }
    }
}

static MATRICES: LazyLock<Matrices> = LazyLock::new(Matrices::compute);

/// Returns the process-wide, read-only matrix set.
#[inline]
pub fn matrices() -> &'static Matrices {
    &MATRICES
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_srgb_matrix() {
        let m = rgb_to_xyz_matrix(&SRGB);
        // CSS Color 4 reference values
        assert_abs_diff_eq!(m.m[0][0], 0.41239079926595934, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[1][0], 0.21263900587151027, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[2][2], 0.9505321522496607, epsilon = 1e-6);
    }

    #[test]
    fn test_p3_matrix() {
        let m = rgb_to_xyz_matrix(&DISPLAY_P3);
        assert_abs_diff_eq!(m.m[0][0], 0.4865709486482162, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[1][1], 0.6917385218365064, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[2][0], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_white_maps_to_illuminant() {
        let m = matrices();
        let w65 = m.srgb_to_xyz_d65 * Vec3::ONE;
        let w50 = m.srgb_to_xyz_d50 * Vec3::ONE;
        for i in 0..3 {
            assert_abs_diff_eq!(w65[i], m.d65[i], epsilon = 1e-12);
            assert_abs_diff_eq!(w50[i], m.d50[i], epsilon = 1e-12);
        }
        assert_abs_diff_eq!(m.d50.x, 0.96422, epsilon = 1e-4);
        assert_abs_diff_eq!(m.d50.z, 0.82521, epsilon = 1e-4);
    }

    #[test]
    fn test_roundtrip() {
        let m = matrices();
        let rgb = Vec3::new(0.5, 0.3, 0.8);
        for (fwd, inv) in [
            (m.srgb_to_xyz_d65, m.xyz_d65_to_srgb),
            (m.srgb_to_xyz_d50, m.xyz_d50_to_srgb),
            (m.p3_to_xyz_d65, m.xyz_d65_to_p3),
        ] {
            let back = inv * (fwd * rgb);
            for i in 0..3 {
                assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-12);
            }
        }
    }
}
