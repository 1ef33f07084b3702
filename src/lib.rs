// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::application::{CatalogStore, NotesStore};
use crate::cli::args::{Args, Command};
use crate::infrastructure::{Config, JsonFileRepository};
use crate::ports::{Console, TerminalInput};
use anyhow::{bail, Result};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog and notes locations after applying flags and config
#[derive(Debug, Clone, PartialEq)]
pub struct DataPaths {
    pub catalog: PathBuf,
    pub notes: PathBuf,
}

impl DataPaths {
    /// Command-line flags win over the config file
    pub fn resolve(args: &Args, config: &Config) -> Self {
        Self {
            catalog: args
                .catalog
                .clone()
                .unwrap_or_else(|| config.files.catalog.clone()),
            notes: args
                .notes
                .clone()
                .unwrap_or_else(|| config.files.notes.clone()),
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting discquiz with arguments");

    match args.command.clone().unwrap_or(Command::Quiz) {
        Command::InitConfig { force } => {
            let path = match &args.config {
                Some(path) => path.clone(),
                None => Config::default_path()?,
            };
            init_config(&path, force)
        }
        command => run_menu(command, &args),
    }
}

fn run_menu(command: Command, args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let paths = DataPaths::resolve(args, &config);
    debug!(?paths, "Resolved data files");

    let mut console = Console::new(TerminalInput::new()?, io::stdout());

    match command {
        Command::Catalog => {
            let mut store = CatalogStore::open_catalog(JsonFileRepository::new(&paths.catalog))?;
            let exit = cli::catalog::run_catalog_menu(&mut console, &mut store)?;
            info!(?exit, "Catalog manager closed");
            Ok(())
        }
        Command::Notes => {
            let mut store = NotesStore::open(JsonFileRepository::new(&paths.notes))?;
            let exit = cli::notes::run_notes_menu(&mut console, &mut store)?;
            info!(?exit, "Notes manager closed");
            Ok(())
        }
        _ => {
            let catalog = CatalogStore::open_catalog(JsonFileRepository::new(&paths.catalog))?;
            let mut notes = NotesStore::open(JsonFileRepository::new(&paths.notes))?;
            cli::quiz::run_quiz(
                &mut console,
                catalog.catalog(),
                &mut notes,
                rand::rng(),
                config.quiz.question_limit(),
            )
        }
    }
}

/// An explicit config path must exist; the default location is optional
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(path),
            Err(e) => {
                debug!(error = %e, "No config directory, using defaults");
                Ok(Config::default())
            }
        },
    }
}

pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::create_default(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use super::*;
    use crate::util::testing;
    use clap::Parser;
    use tempfile::TempDir;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_flags_and_config_when_resolving_then_flags_win() {
        let args = Args::parse_from(["discquiz", "-c", "mine.json"]);
        let mut config = Config::default();
        config.files.notes = PathBuf::from("/data/notes.json");

        let paths = DataPaths::resolve(&args, &config);

        assert_eq!(paths.catalog, PathBuf::from("mine.json"));
        assert_eq!(paths.notes, PathBuf::from("/data/notes.json"));
    }

    #[test]
    fn given_no_flags_when_resolving_then_uses_defaults() {
        let args = Args::parse_from(["discquiz"]);

        let paths = DataPaths::resolve(&args, &Config::default());

        assert_eq!(paths.catalog, PathBuf::from("catalog.json"));
        assert_eq!(paths.notes, PathBuf::from("notes.json"));
    }

    #[test]
    fn given_existing_config_when_initializing_without_force_then_refuses() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[quiz]\nmax_questions = 5\n").unwrap();

        // Act
        let refused = init_config(&path, false);
        let forced = init_config(&path, true);

        // Assert
        assert!(refused.is_err());
        assert!(forced.is_ok());
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn given_missing_explicit_config_when_loading_then_fails() {
        let dir = TempDir::new().unwrap();

        let result = load_config(Some(&dir.path().join("absent.toml")));

        assert!(result.is_err());
    }
}
