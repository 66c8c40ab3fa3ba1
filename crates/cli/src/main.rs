use clap::{Parser, Subcommand};
use anchor_cli::commands::{diff, encode, inspect_tx};

#[derive(Parser)]
#[command(name = "anchor")]
#[command(about = "Anchor tooling - checkpoint transactions and store mutation audits", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and encode a checkpoint transaction without broadcasting it
    Encode {
        /// State root, 32 bytes of hex
        #[arg(long)]
        root_hash: String,

        #[arg(long, allow_negative_numbers = true)]
        start_block: i64,

        #[arg(long, allow_negative_numbers = true)]
        end_block: i64,

        /// Proposer address, 20 bytes of hex
        #[arg(long)]
        proposer: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Decode hex transaction bytes back into a checkpoint
    InspectTx {
        tx: String,
    },
    /// Show the before/after values of a store key
    Diff {
        /// Store key, hex
        #[arg(long)]
        key: String,

        /// Value before the mutation, hex
        #[arg(long)]
        before: String,

        /// Value after the mutation, hex
        #[arg(long)]
        after: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            root_hash,
            start_block,
            end_block,
            proposer,
            json,
        } => encode::run(&root_hash, start_block, end_block, &proposer, json),
        Commands::InspectTx { tx } => inspect_tx::run(&tx),
        Commands::Diff { key, before, after } => diff::run(&key, &before, &after),
    }
}
