//! tinct - color conversion from the command line
//!
//! Converts a color between models and prints CSS Color 4 strings.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tinct")]
#[command(author, version, about = "Color conversion between RGB, CIE and Ok* models")]
#[command(long_about = "
Converts colors between sRGB, linear, Display P3, XYZ, Lab, LCh, Oklab,
Oklch, Okhsl, Okhsv, HSL, HSV, HWB, Luv, LCHuv, HSLuv and HPLuv.

All model values are normalized: hue in turns, Lab/Luv divided by 100.

Examples:
  tinct convert '#F06'                     # Every model
  tinct convert orange --to oklch,hsluv    # Selected models
  tinct convert --from hsl 0.5 1 0.5 --to rgb
  tinct css '#F06' --format oklch -p 3
  tinct models
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color into one or more models
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Print CSS Color 4 strings for a color
    Css(CssArgs),

    /// List supported models and CSS formats
    #[command(visible_alias = "ls")]
    Models,
}

/// A color given on the command line.
#[derive(Args)]
struct ColorInput {
    /// Hex string (#F06, FF006680), preset name, or model values with --from
    #[arg(required = true, num_args = 1..=4, allow_negative_numbers = true)]
    values: Vec<String>,

    /// Model of the given values (e.g. hsl, oklch)
    #[arg(short, long)]
    from: Option<String>,
}

#[derive(Args)]
struct ConvertArgs {
    #[command(flatten)]
    input: ColorInput,

    /// Target models, comma separated (default: all)
    #[arg(short, long, value_delimiter = ',')]
    to: Vec<String>,

    /// Decimal places in the output
    #[arg(short, long, default_value = "5")]
    precision: usize,
}

#[derive(Args)]
struct CssArgs {
    #[command(flatten)]
    input: ColorInput,

    /// CSS formats, comma separated (default: all)
    #[arg(long, value_delimiter = ',')]
    format: Vec<String>,

    /// Decimal places (truncated)
    #[arg(short, long)]
    precision: Option<u32>,
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Css(args) => commands::css::run(args, cli.verbose),
        Commands::Models => commands::models::run(cli.verbose),
    }
}
