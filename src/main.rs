use anyhow::Result;
use clap::Parser;
use cograph::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
