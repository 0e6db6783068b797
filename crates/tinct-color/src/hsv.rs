//! HSV (hue, saturation, value), the hexcone model on sRGB.
//!
//! All components in [0, 1]; hue in turns.

use crate::hsl::{hexcone_hue, min_max};
use tinct_core::{Color, Components};

/// Sets a color from HSV.
pub fn from_hsv(color: &mut Color, h: f64, s: f64, v: f64, a: Option<f64>) -> &mut Color {
    let h6 = h * 6.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let rgb = match (i as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    color.assign(rgb, a)
}

/// Returns the HSV components of a color.
///
/// Greys yield hue 0; black also yields saturation 0.
pub fn to_hsv(color: &Color) -> Components {
    let (min, max) = min_max(color.rgb);
    let d = max - min;
    let s = if max == 0.0 { 0.0 } else { d / max };

    let h = if max == min {
        0.0
    } else {
        hexcone_hue(color.rgb, max, d)
    };

    Components::new([h, s, max], color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_redish() {
        let hsv = to_hsv(&Color::rgb(0.6, 0.4, 0.0));
        assert_abs_diff_eq!(hsv[0], 40.0 / 360.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hsv[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hsv[2], 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(to_hsv(&Color::rgb(0.0, 0.0, 0.0)).values, [0.0, 0.0, 0.0]);
        assert_eq!(to_hsv(&Color::rgb(1.0, 1.0, 1.0)).values, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hue_wraps() {
        let mut a = Color::default();
        let mut b = Color::default();
        from_hsv(&mut a, 1.0, 1.0, 1.0, None);
        from_hsv(&mut b, 0.0, 1.0, 1.0, None);
        assert_eq!(a, b);
        from_hsv(&mut a, -0.5, 1.0, 1.0, None);
        from_hsv(&mut b, 0.5, 1.0, 1.0, None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_roundtrip() {
        for src in [
            Color::rgb(0.6, 0.4, 0.0),
            Color::rgb(0.0, 0.4, 0.6),
            Color::rgba(1.0, 0.0, 0.4, 0.9),
            Color::rgb(0.2, 0.25, 0.3),
        ] {
            let hsv = to_hsv(&src);
            let mut out = Color::default();
            from_hsv(&mut out, hsv[0], hsv[1], hsv[2], hsv.alpha);
            for i in 0..3 {
                assert_abs_diff_eq!(out[i], src[i], epsilon = 1e-12);
            }
        }
    }
}
