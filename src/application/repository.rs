// src/application/repository.rs
use crate::domain::DomainError;
use std::path::PathBuf;

/// How a document came back from its backing storage
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loaded,
    /// Nothing stored yet; the document starts empty
    Missing,
    /// Stored data could not be parsed; the document starts empty
    Corrupt(String),
}

#[derive(Debug)]
pub struct Loaded<T> {
    pub document: T,
    pub status: LoadStatus,
}

pub trait DocumentRepository<T> {
    /// Read the whole document.
    ///
    /// Missing and unparsable data are not errors: both yield `T::default()` with the
    /// matching [`LoadStatus`]. Only failures to reach the storage are returned as errors.
    fn load(&mut self) -> Result<Loaded<T>, DomainError>;

    /// Replace the stored document with `document`
    fn save(&mut self, document: &T) -> Result<(), DomainError>;

    /// Keep a copy of the unparsable original before it gets overwritten.
    /// Returns where the copy went, or `None` if there was nothing to keep.
    fn preserve_original(&mut self) -> Result<Option<PathBuf>, DomainError>;

    /// Human-readable location used in messages
    fn location(&self) -> String;
}
