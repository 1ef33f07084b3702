// src/infrastructure/json_file.rs
use crate::application::repository::{DocumentRepository, LoadStatus, Loaded};
use crate::constants::CORRUPT_BACKUP_SUFFIX;
use crate::domain::DomainError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Stores one document as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".");
        name.push(CORRUPT_BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    fn save_failed(&self, reason: impl ToString) -> DomainError {
        DomainError::SaveFailed {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl<T> DocumentRepository<T> for JsonFileRepository
where
    T: Serialize + DeserializeOwned + Default,
{
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load(&mut self) -> Result<Loaded<T>, DomainError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(Loaded {
                    document: T::default(),
                    status: LoadStatus::Missing,
                });
            }
            Err(e) => {
                return Err(DomainError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        match serde_json::from_str(&content) {
            Ok(document) => Ok(Loaded {
                document,
                status: LoadStatus::Loaded,
            }),
            Err(e) => Ok(Loaded {
                document: T::default(),
                status: LoadStatus::Corrupt(e.to_string()),
            }),
        }
    }

    #[instrument(level = "debug", skip_all, fields(path = %self.path.display()))]
    fn save(&mut self, document: &T) -> Result<(), DomainError> {
        let mut json = serde_json::to_string_pretty(document).map_err(|e| self.save_failed(e))?;
        json.push('\n');

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.save_failed(e))?;

        // Write next to the target and rename over it so a failed write never truncates it
        let mut temp = NamedTempFile::new_in(&dir).map_err(|e| self.save_failed(e))?;
        temp.write_all(json.as_bytes())
            .map_err(|e| self.save_failed(e))?;
        temp.persist(&self.path)
            .map_err(|e| self.save_failed(e.error))?;

        debug!(bytes = json.len(), "Wrote data file");
        Ok(())
    }

    fn preserve_original(&mut self) -> Result<Option<PathBuf>, DomainError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let backup = self.backup_path();
        fs::copy(&self.path, &backup).map_err(|e| {
            DomainError::Storage(format!(
                "Failed to back up {} to {}: {}",
                self.path.display(),
                backup.display(),
                e
            ))
        })?;
        Ok(Some(backup))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
