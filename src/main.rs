mod cli;
mod engine;
mod model;
#[cfg(feature = "tui")]
mod pacer;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
