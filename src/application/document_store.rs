// src/application/document_store.rs
use crate::application::repository::{DocumentRepository, LoadStatus};
use crate::domain::DomainError;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// In-memory copy of a persisted document.
///
/// Edits only touch memory; [`DocumentStore::save`] writes the whole document back. A
/// document that was loaded from unparsable data refuses to save until
/// [`DocumentStore::confirm_overwrite`] has been called.
pub struct DocumentStore<T, R: DocumentRepository<T>> {
    repository: R,
    document: T,
    status: LoadStatus,
    dirty: bool,
    overwrite_confirmed: bool,
}

impl<T, R: DocumentRepository<T>> DocumentStore<T, R> {
    #[instrument(level = "debug", skip(repository), fields(location = %repository.location()))]
    pub fn open(mut repository: R) -> Result<Self, DomainError> {
        let loaded = repository.load()?;
        match &loaded.status {
            LoadStatus::Loaded => {}
            LoadStatus::Missing => {
                info!(location = %repository.location(), "No data file yet, starting empty")
            }
            LoadStatus::Corrupt(reason) => warn!(
                location = %repository.location(),
                %reason,
                "Data file is not valid JSON, starting empty"
            ),
        }

        Ok(Self {
            repository,
            document: loaded.document,
            status: loaded.status,
            dirty: false,
            overwrite_confirmed: false,
        })
    }

    pub fn document(&self) -> &T {
        &self.document
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn location(&self) -> String {
        self.repository.location()
    }

    /// True while a save would be refused because the source could not be parsed
    pub fn needs_overwrite_confirmation(&self) -> bool {
        matches!(self.status, LoadStatus::Corrupt(_)) && !self.overwrite_confirmed
    }

    pub(crate) fn document_mut(&mut self) -> &mut T {
        &mut self.document
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Apply an edit; the store is marked dirty only when the edit succeeds
    pub fn edit<O>(
        &mut self,
        change: impl FnOnce(&mut T) -> Result<O, DomainError>,
    ) -> Result<O, DomainError> {
        let output = change(&mut self.document)?;
        self.dirty = true;
        Ok(output)
    }

    /// Allow saving over an unparsable source, keeping a copy of it first
    pub fn confirm_overwrite(&mut self) -> Result<Option<PathBuf>, DomainError> {
        let backup = self.repository.preserve_original()?;
        if let Some(path) = &backup {
            warn!(backup = %path.display(), "Kept a copy of the unreadable data file");
        }
        self.overwrite_confirmed = true;
        Ok(backup)
    }

    /// Write the whole document. On failure the in-memory state is left as it was.
    pub fn save(&mut self) -> Result<(), DomainError> {
        if self.needs_overwrite_confirmation() {
            return Err(DomainError::CorruptSourceProtected(self.repository.location()));
        }
        self.repository.save(&self.document)?;
        self.dirty = false;
        self.status = LoadStatus::Loaded;
        info!(location = %self.repository.location(), "Saved");
        Ok(())
    }
}
