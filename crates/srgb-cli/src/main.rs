//! srgb-gen - sRGB decode table generator
//!
//! Emits `srgb.h` and its matching C source for 8-bit sRGB to linear lookups.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod generate;
mod output;

use output::Destination;

#[derive(Parser, Debug)]
#[command(name = "srgb-gen")]
#[command(author, version, about = "Generate sRGB to linear lookup tables as C source")]
#[command(long_about = "
Generates two lookup tables mapping 8-bit sRGB values to linear light
(gamma 2.2), at 16-bit and 8-bit output precision, as a C source file
and the matching header.

Examples:
  srgb-gen srgb.c srgb.h            # Write both files
  srgb-gen - srgb.h > srgb.c        # Source to stdout
  RUST_LOG=debug srgb-gen srgb.c srgb.h
")]
struct Cli {
    /// Output C source file ('-' for stdout)
    c_output: Destination,

    /// Output header file ('-' for stdout)
    h_output: Destination,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    generate::run(&cli.c_output, &cli.h_output)
}
