use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;

use commands::SourceArgs;

#[derive(Parser)]
#[command(name = "contig-cmd")]
#[command(about = "Command-line utility for reading, editing and printing sequences")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a sequence from a text stream and print it
    Show {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Read a sequence, apply operations in order and print the result
    Edit {
        #[command(flatten)]
        source: SourceArgs,

        /// Operation to apply, e.g. "insert_at 0 7" (can be specified multiple times)
        #[arg(long = "op", required = true)]
        ops: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Show { source } => commands::show::run(source),
        Commands::Edit { source, ops } => commands::edit::run(source, ops),
    }
}
