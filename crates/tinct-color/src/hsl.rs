//! HSL (hue, saturation, lightness), the hexcone model on sRGB.
//!
//! All components in [0, 1]; hue in turns.

use tinct_core::{Color, Components};

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Hue in turns of an RGB triplet whose max and min differ by `d > 0`.
pub(crate) fn hexcone_hue([r, g, b]: [f64; 3], max: f64, d: f64) -> f64 {
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

/// Returns `(min, max)` of an RGB triplet.
#[inline]
pub(crate) fn min_max(rgb: [f64; 3]) -> (f64, f64) {
    (rgb[0].min(rgb[1]).min(rgb[2]), rgb[0].max(rgb[1]).max(rgb[2]))
}

/// Sets a color from HSL.
pub fn from_hsl(color: &mut Color, h: f64, s: f64, l: f64, a: Option<f64>) -> &mut Color {
    if s == 0.0 {
        return color.assign([l; 3], a);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    color.assign(
        [
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        ],
        a,
    )
}

/// Returns the HSL components of a color.
///
/// Greys (`max == min`) yield hue and saturation 0.
pub fn to_hsl(color: &Color) -> Components {
    let (min, max) = min_max(color.rgb);
    let l = (max + min) / 2.0;

    if max == min {
        return Components::new([0.0, 0.0, l], color.alpha);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    Components::new([hexcone_hue(color.rgb, max, d), s, l], color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_redish() {
        let hsl = to_hsl(&Color::rgb(0.6, 0.4, 0.0));
        assert_abs_diff_eq!(hsl[0], 40.0 / 360.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hsl[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hsl[2], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(to_hsl(&Color::rgb(0.0, 0.0, 0.0)).values, [0.0, 0.0, 0.0]);
        assert_eq!(to_hsl(&Color::rgb(1.0, 1.0, 1.0)).values, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_roundtrip() {
        for src in [
            Color::rgb(0.6, 0.4, 0.0),
            Color::rgb(0.4, 0.6, 0.0),
            Color::rgb(0.0, 0.4, 0.6),
            Color::rgba(1.0, 0.0, 0.4, 0.4),
            Color::rgb(0.9, 0.8, 0.7),
        ] {
            let hsl = to_hsl(&src);
            let mut out = Color::default();
            from_hsl(&mut out, hsl[0], hsl[1], hsl[2], hsl.alpha);
            for i in 0..3 {
                assert_abs_diff_eq!(out[i], src[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_alpha_kept_in_place() {
        let mut c = Color::rgba(0.0, 0.0, 0.0, 0.3);
        from_hsl(&mut c, 0.0, 1.0, 0.5, None);
        assert_eq!(c.to_vec(), vec![1.0, 0.0, 0.0, 0.3]);
    }
}
