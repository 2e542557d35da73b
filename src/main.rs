use anyhow::Result;
use clap::Parser;
use locanda::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
