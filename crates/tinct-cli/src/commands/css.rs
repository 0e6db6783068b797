//! CSS output command.

use crate::CssArgs;
use anyhow::{Context, Result};
use tinct_format::CssFormat;
use tracing::{info, trace};

/// Runs the css command.
pub fn run(args: CssArgs, verbose: u8) -> Result<()> {
    trace!(values = ?args.input.values, format = ?args.format, "css::run");

    let color = super::parse_color(&args.input)?;
    let formats = if args.format.is_empty() || args.format.iter().any(|f| f == "all") {
        CssFormat::ALL.to_vec()
    } else {
        args.format
            .iter()
            .map(|f| {
                f.parse::<CssFormat>()
                    .with_context(|| format!("Unknown CSS format: {f}"))
            })
            .collect::<Result<Vec<_>>>()?
    };
    info!(%color, formats = formats.len(), precision = ?args.precision, "Serializing CSS");

    for format in formats {
        let css = format.format(&color, args.precision);
        if verbose > 0 {
            println!("{:<11} {css}", format.name());
        } else {
            println!("{css}");
        }
    }

    Ok(())
}
