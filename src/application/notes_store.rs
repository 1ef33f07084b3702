// src/application/notes_store.rs
use crate::application::document_store::DocumentStore;
use crate::application::repository::DocumentRepository;
use crate::domain::{DomainError, NoteBook};

pub type NotesStore<R> = DocumentStore<NoteBook, R>;

impl<R: DocumentRepository<NoteBook>> DocumentStore<NoteBook, R> {
    pub fn notes(&self) -> &NoteBook {
        self.document()
    }

    pub fn add_note(&mut self, song: &str, note: &str) -> Result<Option<String>, DomainError> {
        self.edit(|notes| notes.add_note(song, note))
    }

    pub fn get_note(&self, song: &str) -> Option<&str> {
        self.notes().get_note(song)
    }

    pub fn has_note(&self, song: &str) -> bool {
        self.notes().has_note(song)
    }

    pub fn remove_note(&mut self, song: &str) -> Result<String, DomainError> {
        self.edit(|notes| notes.remove_note(song))
    }

    pub fn search(&self, term: &str) -> Vec<(&str, &str)> {
        self.notes().search(term)
    }
}
