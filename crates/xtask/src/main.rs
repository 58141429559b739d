//! Development tasks for the item workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Dump, Gradient, ParseValue};

/// Development tasks for the item workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for item definitions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Materialize and print item snapshots
    Dump(Dump),

    /// Preview a color or gradient token on some text
    Gradient(Gradient),

    /// Parse attribute value literals
    ParseValue(ParseValue),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ITEM_NAMESPACE and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Dump(cmd) => cmd.execute(),
        Command::Gradient(cmd) => cmd.execute(),
        Command::ParseValue(cmd) => cmd.execute(),
    }
}
