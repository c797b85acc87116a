use anyhow::Result;
use clap::Parser;

use kappa_cli::app;
use kappa_cli::cli::Cli;

fn main() -> Result<()> {
    app::run(Cli::parse())
}
