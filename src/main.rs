//! token-audit - Audit word-token frequencies in a log sample
//!
//! token-audit:
//! - Reads `samples/B.txt` under the project root
//! - Strips ANSI color codes and extracts word tokens
//! - Prints a frequency listing and writes `samples/tokens-audit.json`

use anyhow::Result;
use clap::Parser;

mod audit;
mod cli;
mod core;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose)?;

    let code = cli::run(cli)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
