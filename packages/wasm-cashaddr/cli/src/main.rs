use anyhow::Result;
use clap::{Parser, Subcommand};

mod address;
mod input;
mod logging;

#[derive(Parser)]
#[command(name = "wasm-cashaddr-cli")]
#[command(about = "CLI tool for cashaddr encoding and decoding", long_about = None)]
#[command(version)]
struct Cli {
    /// Log decoding details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Address encoding and decoding operations
    Address {
        #[command(subcommand)]
        command: address::AddressCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Commands::Address { command } => address::handle_command(command),
    }
}
