// src/infrastructure/config.rs
use crate::constants::{DEFAULT_CATALOG_FILE, DEFAULT_MAX_QUESTIONS, DEFAULT_NOTES_FILE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for discquiz
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    #[serde(default = "default_notes")]
    pub notes: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct QuizConfig {
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
}

// Default value functions
fn default_catalog() -> PathBuf { PathBuf::from(DEFAULT_CATALOG_FILE) }
fn default_notes() -> PathBuf { PathBuf::from(DEFAULT_NOTES_FILE) }
fn default_max_questions() -> usize { DEFAULT_MAX_QUESTIONS }

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            notes: default_notes(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
        }
    }
}

impl QuizConfig {
    /// Upper bound for the question-count prompt, never below one
    pub fn question_limit(&self) -> usize {
        self.max_questions.max(1)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            debug!(?path, "Loading config");
            Self::load(path)
        } else {
            debug!(?path, "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// `<config dir>/discquiz/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(dir.join("discquiz").join("config.toml"))
    }
}
