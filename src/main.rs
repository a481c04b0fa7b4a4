use anyhow::Result;
use clap::Parser;

use timecalc::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(cli)
}
