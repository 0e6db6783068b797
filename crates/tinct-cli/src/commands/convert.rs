//! Model conversion command.
//!
//! Prints the color's tuple in each requested model, one per line.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use tinct_color::ColorModel;
use tracing::{info, trace};

/// Runs the convert command.
pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(values = ?args.input.values, to = ?args.to, "convert::run");

    let color = super::parse_color(&args.input)?;
    let models = resolve_models(&args.to)?;
    info!(%color, models = models.len(), "Converting color");

    if verbose > 0 {
        println!("Input: {color} (hex {})", tinct_format::to_hex(&color));
    }

    for model in models {
        let values = model.to_components(&color);
        println!("{:<8} {:.*}", model.name(), args.precision, values);
        if verbose > 1 {
            println!("         [{}]", model.labels().join(", "));
        }
    }

    Ok(())
}

/// Parses `--to` names; empty means every model.
fn resolve_models(names: &[String]) -> Result<Vec<ColorModel>> {
    if names.is_empty() {
        return Ok(ColorModel::ALL.to_vec());
    }
    names
        .iter()
        .map(|n| {
            n.parse::<ColorModel>()
                .with_context(|| format!("Unknown target model: {n}"))
        })
        .collect()
}
