//! Binary crate for the `skycast` terminal weather lookup.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - The debounced lookup screen

use clap::Parser;

mod app;
mod cli;
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
