// src/domain/song_index.rs
use crate::constants::WRONG_CHOICES;
use crate::domain::Catalog;
use indexmap::IndexMap;
use tracing::warn;

/// Song name to owning album(s), derived once from a [`Catalog`].
///
/// A song listed under several albums keeps every owner in catalog order. The first owner
/// is treated as the answer, and all owners are kept out of that song's wrong-album pool.
#[derive(Debug, Clone, Default)]
pub struct SongIndex {
    albums: Vec<String>,
    owners: IndexMap<String, Vec<String>>,
}

impl SongIndex {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let albums: Vec<String> = catalog.album_names().into_iter().map(String::from).collect();

        let mut owners: IndexMap<String, Vec<String>> = IndexMap::new();
        for (song, album) in catalog.entries() {
            owners
                .entry(song.to_string())
                .or_default()
                .push(album.to_string());
        }

        for (song, albums) in owners.iter().filter(|(_, albums)| albums.len() > 1) {
            warn!(song = %song, ?albums, "Song appears in more than one album");
        }

        Self { albums, owners }
    }

    pub fn albums(&self) -> &[String] {
        &self.albums
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    /// Number of distinct song names
    pub fn song_count(&self) -> usize {
        self.owners.len()
    }

    pub fn songs(&self) -> impl Iterator<Item = &str> {
        self.owners.keys().map(String::as_str)
    }

    pub fn owners(&self, song: &str) -> Option<&[String]> {
        self.owners.get(song).map(Vec::as_slice)
    }

    /// The album a question about `song` expects as its answer
    pub fn album_of(&self, song: &str) -> Option<&str> {
        self.owners
            .get(song)
            .and_then(|albums| albums.first())
            .map(String::as_str)
    }

    pub fn is_ambiguous(&self, song: &str) -> bool {
        self.owners.get(song).is_some_and(|albums| albums.len() > 1)
    }

    /// Albums that can be offered as wrong answers for `song`
    pub fn wrong_album_pool(&self, song: &str) -> Vec<&str> {
        let owners = self.owners(song).unwrap_or_default();
        self.albums
            .iter()
            .filter(|album| !owners.contains(album))
            .map(String::as_str)
            .collect()
    }

    /// Songs with enough other albums to build a full set of choices
    pub fn playable_songs(&self) -> Vec<&str> {
        self.songs()
            .filter(|song| self.wrong_album_pool(song).len() >= WRONG_CHOICES)
            .collect()
    }
}
