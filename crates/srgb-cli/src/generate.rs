//! Table generation command

use crate::output::{self, Destination};
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Context, Result, bail};
use srgb_lut::{build_tables, codegen};

/// Builds the tables and writes header then source.
pub fn run(c_output: &Destination, h_output: &Destination) -> Result<()> {
    if *c_output == Destination::Stdout && *h_output == Destination::Stdout {
        bail!("Source and header cannot both be written to stdout");
    }
    if c_output == h_output {
        bail!("Source and header outputs must differ: {}", c_output);
    }

    let tables = build_tables().context("Failed to build decode tables")?;
    let rendered = codegen::render(&tables.table16, &tables.table8)
        .context("Failed to render C output")?;

    info!("Writing header to {}", h_output);
    output::write(h_output, rendered.header.as_bytes())?;

    info!("Writing source to {}", c_output);
    output::write(c_output, rendered.source.as_bytes())?;

    debug!(
        "Generated {} header bytes, {} source bytes",
        rendered.header.len(),
        rendered.source.len()
    );
    Ok(())
}
