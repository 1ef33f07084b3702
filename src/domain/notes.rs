// src/domain/notes.rs
use crate::domain::DomainError;
use crate::util::text::contains_ignore_case;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Free-text memory aids keyed by song name, persisted as `{"notes": {...}}`.
///
/// Notes are not tied to the catalog; a note may outlive the song it was written for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteBook {
    #[serde(default)]
    notes: IndexMap<String, String>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.notes.iter().map(|(song, note)| (song.as_str(), note.as_str()))
    }

    pub fn songs(&self) -> Vec<&str> {
        self.notes.keys().map(String::as_str).collect()
    }

    /// Add or replace the note for `song`, returning the note it replaced
    pub fn add_note(&mut self, song: &str, note: &str) -> Result<Option<String>, DomainError> {
        let song = song.trim();
        let note = note.trim();
        if song.is_empty() {
            return Err(DomainError::EmptySongName);
        }
        if note.is_empty() {
            return Err(DomainError::EmptyNote);
        }
        Ok(self.notes.insert(song.to_string(), note.to_string()))
    }

    pub fn get_note(&self, song: &str) -> Option<&str> {
        self.notes.get(song).map(String::as_str)
    }

    pub fn has_note(&self, song: &str) -> bool {
        self.notes.contains_key(song)
    }

    pub fn remove_note(&mut self, song: &str) -> Result<String, DomainError> {
        self.notes
            .shift_remove(song)
            .ok_or_else(|| DomainError::NoteNotFound(song.to_string()))
    }

    /// Case-insensitive substring search over song names and note text
    pub fn search(&self, term: &str) -> Vec<(&str, &str)> {
        self.iter()
            .filter(|(song, note)| contains_ignore_case(song, term) || contains_ignore_case(note, term))
            .collect()
    }
}
