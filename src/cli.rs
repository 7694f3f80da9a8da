//! Command-line surface: `sdef2swift <HEADER> <OUTPUT>`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::convert::{ConvertOptions, convert_with};

/// Convert an sdef-generated Objective-C header to Swift protocols
#[derive(Debug, Clone, Parser)]
#[command(name = "sdef2swift", version, about)]
pub struct Cli {
    /// Objective-C header produced by `sdef <app> | sdp -fh`
    pub header: PathBuf,

    /// Swift file to write; only created when the conversion succeeds
    pub output: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli)
}

/// Read, convert, then write; nothing is written if any step before fails
pub fn execute(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.header)
        .with_context(|| format!("reading {}", cli.header.display()))?;

    let conversion = convert_with(&source, &ConvertOptions::default())
        .with_context(|| format!("converting {}", cli.header.display()))?;

    fs::write(&cli.output, &conversion.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    info!(
        header = %cli.header.display(),
        output = %cli.output.display(),
        enums = conversion.header.enums.len(),
        interfaces = conversion.header.interfaces.len(),
        "wrote swift interface"
    );
    Ok(())
}
