//! 8-bit byte codec.
//!
//! `byte = round(x * 255)`, `x = byte / 255`. Alpha travels as an optional
//! fourth byte.

use tinct_core::{Color, Error, Result};

#[inline]
fn quantize(x: f64) -> u8 {
    // `as` saturates: out-of-range values clamp, NaN maps to 0
    (x * 255.0).round() as u8
}

/// Sets a color from 3 or 4 bytes.
///
/// The fourth byte, when present, sets alpha; otherwise alpha is untouched.
///
/// # Errors
///
/// [`Error::InvalidFormat`] for any other length.
pub fn from_bytes<'a>(color: &'a mut Color, bytes: &[u8]) -> Result<&'a mut Color> {
    let (rgb, alpha) = match *bytes {
        [r, g, b] => ([r, g, b], None),
        [r, g, b, a] => ([r, g, b], Some(a)),
        _ => {
            tracing::debug!(len = bytes.len(), "rejected byte color");
            return Err(Error::invalid_format(
                format!("{bytes:?}"),
                format!("expected 3 or 4 bytes, got {}", bytes.len()),
            ));
        }
    };

    let rgb = rgb.map(|v| v as f64 / 255.0);
    Ok(color.assign(rgb, alpha.map(|a| a as f64 / 255.0)))
}

/// Returns 3 bytes, or 4 when the color carries alpha.
pub fn to_bytes(color: &Color) -> Vec<u8> {
    color.to_vec().into_iter().map(quantize).collect()
}
