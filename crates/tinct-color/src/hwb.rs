//! HWB (hue, whiteness, blackness).
//!
//! Shares its hue with [`hsl`](crate::hsl). Whiteness is `min(r, g, b)`,
//! blackness `1 - max(r, g, b)`.

use crate::hsl::{from_hsl, min_max, to_hsl};
use tinct_core::{Color, Components};

/// Sets a color from HWB.
///
/// When `w + b >= 1` the result is the grey `w / (w + b)`.
pub fn from_hwb(color: &mut Color, h: f64, w: f64, b: f64, a: Option<f64>) -> &mut Color {
    if w + b >= 1.0 {
        let grey = w / (w + b);
        return color.assign([grey; 3], a);
    }

    from_hsl(color, h, 1.0, 0.5, a);
    for v in color.rgb.iter_mut() {
        *v = *v * (1.0 - w - b) + w;
    }
    color
}

/// Returns the HWB components of a color.
pub fn to_hwb(color: &Color) -> Components {
    let (min, max) = min_max(color.rgb);
    Components::new([to_hsl(color)[0], min, 1.0 - max], color.alpha)
}
