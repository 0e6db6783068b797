//! Hexadecimal color strings.
//!
//! Input: `#?` followed by 3, 4, 6 or 8 hex digits, case-insensitive.
//! Three and four digit forms double each digit (`F06` == `FF0066`).
//!
//! Output: uppercase `#RRGGBB`, or `#RRGGBBAA` when alpha is present and
//! not exactly 1.

use tinct_core::{Color, Error, Result};

fn invalid(input: &str, reason: impl Into<String>) -> Error {
    let reason = reason.into();
    tracing::debug!(input, %reason, "rejected hex color");
    Error::invalid_format(input, reason)
}

/// Sets a color from a hex string.
///
/// Alpha is written when the string has an alpha digit group, or when the
/// color already carries alpha (which then becomes 1 for strings without one).
///
/// # Errors
///
/// [`Error::InvalidFormat`] on a wrong digit count or a non-hex character.
///
/// # Example
///
/// ```rust
/// use tinct_core::Color;
/// use tinct_format::from_hex;
///
/// let mut c = Color::default();
/// from_hex(&mut c, "#FF006666").unwrap();
/// assert_eq!(c.to_vec(), vec![1.0, 0.0, 0.4, 0.4]);
/// ```
pub fn from_hex<'a>(color: &'a mut Color, hex: &str) -> Result<&'a mut Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let mut nibbles = [0u8; 8];
    let mut len = 0;
    for ch in digits.chars() {
        if len == nibbles.len() {
            return Err(invalid(hex, "too many hex digits"));
        }
        let d = ch
            .to_digit(16)
            .ok_or_else(|| invalid(hex, format!("non-hex character '{ch}'")))?;
        nibbles[len] = d as u8;
        len += 1;
    }

    let byte = |hi: u8, lo: u8| ((hi << 4) | lo) as f64 / 255.0;
    let n = &nibbles;
    let (rgb, alpha) = match len {
        3 => ([byte(n[0], n[0]), byte(n[1], n[1]), byte(n[2], n[2])], None),
        4 => (
            [byte(n[0], n[0]), byte(n[1], n[1]), byte(n[2], n[2])],
            Some(byte(n[3], n[3])),
        ),
        6 => ([byte(n[0], n[1]), byte(n[2], n[3]), byte(n[4], n[5])], None),
        8 => (
            [byte(n[0], n[1]), byte(n[2], n[3]), byte(n[4], n[5])],
            Some(byte(n[6], n[7])),
        ),
        _ => return Err(invalid(hex, format!("expected 3, 4, 6 or 8 hex digits, got {len}"))),
    };

    let alpha = alpha.or(color.alpha.map(|_| 1.0));
    Ok(color.assign(rgb, alpha))
}

/// Formats a color as hex, including alpha when present and not 1.
pub fn to_hex(color: &Color) -> String {
    to_hex_with(color, true)
}

/// Formats a color as hex; `include_alpha = false` always gives 6 digits.
pub fn to_hex_with(color: &Color, include_alpha: bool) -> String {
    let [r, g, b] = color.rgb.map(quantize);
    let mut out = format!("#{r:02X}{g:02X}{b:02X}");
    if include_alpha {
        if let Some(a) = color.alpha.filter(|a| *a != 1.0) {
            out.push_str(&format!("{:02X}", quantize(a)));
        }
    }
    out
}

#[inline]
fn quantize(x: f64) -> u8 {
    (x * 255.0).round() as u8
}
