//! Lists supported models and CSS formats.

use anyhow::Result;
use tinct_color::ColorModel;
use tinct_format::CssFormat;

/// Runs the models command.
pub fn run(verbose: u8) -> Result<()> {
    println!("Models:");
    for model in ColorModel::ALL {
        if verbose > 0 {
            println!("  {:<8} ({})", model.name(), model.labels().join(", "));
        } else {
            println!("  {}", model.name());
        }
    }

    println!("CSS formats:");
    for format in CssFormat::ALL {
        println!("  {format}");
    }

    Ok(())
}
