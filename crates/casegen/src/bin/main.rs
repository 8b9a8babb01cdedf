//! casegen CLI binary entry point.
//!
//! This binary requires the `cli` feature to be enabled.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "casegen", version, about = "Expand casegen annotations outside the compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Expand(casegen::cli::expand::Args),
    Stringify(casegen::cli::stringify::Args),
    Config(casegen::cli::config::Args),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    casegen::cli::logging::init_logging()?;

    match cli.command {
        Commands::Expand(args) => casegen::cli::expand::execute(args),
        Commands::Stringify(args) => casegen::cli::stringify::execute(args),
        Commands::Config(args) => casegen::cli::config::execute(args),
    }
}
