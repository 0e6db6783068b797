//! CLI command implementations

pub mod convert;
pub mod css;
pub mod models;

use crate::ColorInput;
use anyhow::{Context, Result, bail};
use tinct_color::ColorModel;
use tinct_core::{Color, presets};
use tracing::{debug, trace};

/// Resolves a command-line color.
///
/// Without `--from` the single value is a preset name or a hex string; with
/// `--from` it is 3 or 4 numbers in that model.
pub fn parse_color(input: &ColorInput) -> Result<Color> {
    trace!(values = ?input.values, from = ?input.from, "parse_color");

    let Some(name) = input.from.as_deref() else {
        let [text] = input.values.as_slice() else {
            bail!(
                "Expected one hex color or preset name, got {} values (use --from for model values)",
                input.values.len()
            );
        };
        return parse_named(text);
    };

    let model: ColorModel = name
        .parse()
        .with_context(|| format!("Unknown source model: {name}"))?;

    let nums = input
        .values
        .iter()
        .map(|v| v.parse::<f64>().with_context(|| format!("Not a number: {v}")))
        .collect::<Result<Vec<_>>>()?;

    let (values, alpha) = match nums.as_slice() {
        &[a, b, c] => ([a, b, c], None),
        &[a, b, c, alpha] => ([a, b, c], Some(alpha)),
        _ => bail!("--from {model} expects 3 or 4 values, got {}", nums.len()),
    };

    let mut color = Color::rgb(0.0, 0.0, 0.0);
    model.apply(&mut color, values, alpha);
    debug!(%model, ?values, ?alpha, %color, "Parsed model values");
    Ok(color)
}

fn parse_named(text: &str) -> Result<Color> {
    if let Ok(color) = presets::lookup(text) {
        debug!(preset = text, %color, "Resolved preset");
        return Ok(color);
    }

    let mut color = Color::rgb(0.0, 0.0, 0.0);
    tinct_format::from_hex(&mut color, text)
        .with_context(|| format!("Not a preset or hex color: {text}"))?;
    debug!(hex = text, %color, "Parsed hex");
    Ok(color)
}
