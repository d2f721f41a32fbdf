//! CLI entry point for the domino tile demo

use clap::Parser;
use dominoes::io::cli::{Cli, Runner};
use dominoes::io::logging;

fn main() -> dominoes::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbosity());
    let mut runner = Runner::new(cli)?;
    runner.run()
}
