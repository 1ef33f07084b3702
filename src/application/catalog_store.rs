// src/application/catalog_store.rs
use crate::application::document_store::DocumentStore;
use crate::application::repository::DocumentRepository;
use crate::domain::{Catalog, DomainError, SongIndex};
use tracing::debug;

pub type CatalogStore<R> = DocumentStore<Catalog, R>;

impl<R: DocumentRepository<Catalog>> DocumentStore<Catalog, R> {
    /// Open the catalog and drop entries it could never have produced itself
    pub fn open_catalog(repository: R) -> Result<Self, DomainError> {
        let mut store = Self::open(repository)?;
        let dropped = store.document_mut().normalize();
        if dropped > 0 {
            store.mark_dirty();
        }
        debug!(
            albums = store.catalog().album_count(),
            songs = store.catalog().song_count(),
            dropped,
            "Catalog loaded"
        );
        Ok(store)
    }

    pub fn catalog(&self) -> &Catalog {
        self.document()
    }

    pub fn song_index(&self) -> SongIndex {
        SongIndex::from_catalog(self.catalog())
    }

    pub fn add_album(&mut self, name: &str, songs: Vec<String>) -> Result<(), DomainError> {
        self.edit(|catalog| catalog.add_album(name, songs))
    }

    pub fn add_song(&mut self, album: &str, song: &str) -> Result<(), DomainError> {
        self.edit(|catalog| catalog.add_song(album, song))
    }

    pub fn remove_song(&mut self, album: &str, song: &str) -> Result<(), DomainError> {
        self.edit(|catalog| catalog.remove_song(album, song))
    }

    pub fn remove_album(&mut self, album: &str) -> Result<Vec<String>, DomainError> {
        self.edit(|catalog| catalog.remove_album(album))
    }
}
