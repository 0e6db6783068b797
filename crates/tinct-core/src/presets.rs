//! Named preset colors.
//!
//! Presets are plain constant values. Looking one up returns a fresh copy, so
//! mutating the result never affects other call sites.
//!
//! ```rust
//! use tinct_core::presets::{self, RED};
//!
//! let mut c = presets::lookup("Red").unwrap();
//! c[1] = 0.5;
//! assert_eq!(RED.rgb, [1.0, 0.0, 0.0]);
//! ```

use crate::color::Color;
use crate::error::{Error, Result};

/// Fully transparent black.
pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
/// Alias of [`TRANSPARENT`].
pub const NONE: Color = TRANSPARENT;
/// Opaque black.
pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
/// Opaque white.
pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
/// 25% grey.
pub const DARK_GREY: Color = Color::rgba(0.25, 0.25, 0.25, 1.0);
/// 50% grey.
pub const GREY: Color = Color::rgba(0.5, 0.5, 0.5, 1.0);
/// Pure red.
pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
/// Pure green.
pub const GREEN: Color = Color::rgba(0.0, 1.0, 0.0, 1.0);
/// Pure blue.
pub const BLUE: Color = Color::rgba(0.0, 0.0, 1.0, 1.0);
/// Yellow.
pub const YELLOW: Color = Color::rgba(1.0, 1.0, 0.0, 1.0);
/// Pink (magenta).
pub const PINK: Color = Color::rgba(1.0, 0.0, 1.0, 1.0);
/// Cyan.
pub const CYAN: Color = Color::rgba(0.0, 1.0, 1.0, 1.0);
/// Orange.
pub const ORANGE: Color = Color::rgba(1.0, 0.5, 0.0, 1.0);

/// All presets keyed by lowercase name.
pub const PRESETS: &[(&str, Color)] = &[
    ("transparent", TRANSPARENT),
    ("none", NONE),
    ("black", BLACK),
    ("white", WHITE),
    ("darkgrey", DARK_GREY),
    ("grey", GREY),
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("pink", PINK),
    ("cyan", CYAN),
    ("orange", ORANGE),
];

/// Looks up a preset by name (case-insensitive, `-`/`_`/spaces ignored).
pub fn lookup(name: &str) -> Result<Color> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect();
    let key = match key.as_str() {
        "gray" => "grey",
        "darkgray" => "darkgrey",
        other => other,
    };

    PRESETS
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, c)| *c)
        .ok_or_else(|| Error::UnknownPreset(name.to_string()))
}
