use anyhow::Result;
use clap::Parser;
use kopilka::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
