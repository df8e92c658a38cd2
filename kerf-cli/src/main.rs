//! kerf command-line entry point

use clap::Parser;
use kerf_cli::commands::Commands;

/// Word segmentation with per-character word-boundary overrides
#[derive(Debug, Parser)]
#[command(name = "kerf", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokenize(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
    }
}
