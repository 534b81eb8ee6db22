//! cotalk CLI - slide deck generator.
//!
//! Provides commands for:
//! - `build`: Render the talk to a single HTML page
//! - `assets`: List the talk assets available to the build

mod commands;
mod error;
mod output;
mod talk;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AssetsArgs, BuildArgs};
use output::Output;

/// cotalk - renders the concurrency design talk as one HTML page.
#[derive(Parser)]
#[command(name = "cotalk", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the deck to HTML.
    Build(BuildArgs),
    /// List talk assets.
    Assets(AssetsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Assets(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
