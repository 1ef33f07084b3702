// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(disable_help_subcommand = true)]
pub struct Args {
    /// Path to the album catalog JSON file (optional)
    #[arg(short, long, value_name = "CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to the song notes JSON file (optional)
    #[arg(short, long, value_name = "NOTES", global = true)]
    pub notes: Option<PathBuf>,

    /// Path to the config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Menu to open (defaults to the quiz)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Take a multiple-choice album quiz
    Quiz,

    /// Add and remove albums and songs
    Catalog,

    /// Write, edit and search memory notes for songs
    Notes,

    /// Write a default config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
