//! noc-index CLI: prints the example link list for copy-paste.
//!
//! Reads `../noc-data.json` and writes one `<a>` line per example to stdout.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
