// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Album name cannot be empty")]
    EmptyAlbumName,
    #[error("Song name cannot be empty")]
    EmptySongName,
    #[error("Album '{0}' needs at least one song")]
    EmptyAlbum(String),
    #[error("Album already exists: {0}")]
    DuplicateAlbum(String),
    #[error("Song '{song}' is already in album '{album}'")]
    DuplicateSong { song: String, album: String },
    #[error("Album not found: {0}")]
    AlbumNotFound(String),
    #[error("Song '{song}' not found in album '{album}'")]
    SongNotFound { song: String, album: String },
    #[error("Note cannot be empty")]
    EmptyNote,
    #[error("No note found for '{0}'")]
    NoteNotFound(String),
    #[error("Not enough catalog data for a quiz: {0}")]
    InsufficientCatalogData(String),
    #[error("Invalid choice {choice}: expected 1-{available}")]
    InvalidChoice { choice: usize, available: usize },
    #[error("Question for '{0}' was already answered")]
    AlreadyAnswered(String),
    #[error("Refusing to overwrite unreadable data file {0} without confirmation")]
    CorruptSourceProtected(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Failed to save {path}: {reason}")]
    SaveFailed { path: String, reason: String },
}
