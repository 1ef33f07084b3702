// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use discquiz::cli::args::Args;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // stdout belongs to the menus
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                format!("discquiz={}", filter)
                    .parse()
                    .context("Invalid log directive")?,
            ),
        )
        .init();

    discquiz::run(args)
}
