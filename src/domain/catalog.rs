// src/domain/catalog.rs
use crate::domain::DomainError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Album name to ordered song list, persisted as `{"albums": {...}}`.
///
/// Album order and song order are insertion order. Edits through this type keep song
/// names unique across the whole catalog; files written by other tools may not, and
/// [`crate::domain::SongIndex`] copes with that.
///
/// Top-level keys other than `albums` are carried through untouched and written back on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    albums: IndexMap<String, Vec<String>>,
    #[serde(flatten)]
    extra: IndexMap<String, serde_json::Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    /// Total number of song entries, counting a song once per album it appears in
    pub fn song_count(&self) -> usize {
        self.albums.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn albums(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.albums
            .iter()
            .map(|(name, songs)| (name.as_str(), songs.as_slice()))
    }

    pub fn album_names(&self) -> Vec<&str> {
        self.albums.keys().map(String::as_str).collect()
    }

    pub fn songs(&self, album: &str) -> Option<&[String]> {
        self.albums.get(album).map(Vec::as_slice)
    }

    /// Every (song, album) pair in catalog order
    pub fn entries(&self) -> Vec<(&str, &str)> {
        self.albums
            .iter()
            .flat_map(|(album, songs)| songs.iter().map(move |song| (song.as_str(), album.as_str())))
            .collect()
    }

    /// Album that already holds `song`, if any
    pub fn find_song(&self, song: &str) -> Option<&str> {
        self.albums
            .iter()
            .find(|(_, songs)| songs.iter().any(|s| s == song))
            .map(|(album, _)| album.as_str())
    }

    /// Add a new album together with its songs.
    ///
    /// The album is only inserted when the name and every song pass validation, so a
    /// rejected call leaves the catalog untouched.
    pub fn add_album(&mut self, name: &str, songs: Vec<String>) -> Result<(), DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyAlbumName);
        }
        if self.albums.contains_key(name) {
            return Err(DomainError::DuplicateAlbum(name.to_string()));
        }
        if songs.is_empty() {
            return Err(DomainError::EmptyAlbum(name.to_string()));
        }

        let mut accepted: Vec<String> = Vec::with_capacity(songs.len());
        for song in songs {
            let song = song.trim().to_string();
            if song.is_empty() {
                return Err(DomainError::EmptySongName);
            }
            if accepted.contains(&song) {
                return Err(DomainError::DuplicateSong {
                    song,
                    album: name.to_string(),
                });
            }
            if let Some(owner) = self.find_song(&song) {
                return Err(DomainError::DuplicateSong {
                    song,
                    album: owner.to_string(),
                });
            }
            accepted.push(song);
        }

        self.albums.insert(name.to_string(), accepted);
        Ok(())
    }

    pub fn add_song(&mut self, album: &str, song: &str) -> Result<(), DomainError> {
        let song = song.trim();
        if song.is_empty() {
            return Err(DomainError::EmptySongName);
        }
        if !self.albums.contains_key(album) {
            return Err(DomainError::AlbumNotFound(album.to_string()));
        }
        if let Some(owner) = self.find_song(song) {
            return Err(DomainError::DuplicateSong {
                song: song.to_string(),
                album: owner.to_string(),
            });
        }

        if let Some(songs) = self.albums.get_mut(album) {
            songs.push(song.to_string());
        }
        Ok(())
    }

    pub fn remove_song(&mut self, album: &str, song: &str) -> Result<(), DomainError> {
        let songs = self
            .albums
            .get_mut(album)
            .ok_or_else(|| DomainError::AlbumNotFound(album.to_string()))?;

        let position = songs
            .iter()
            .position(|s| s == song)
            .ok_or_else(|| DomainError::SongNotFound {
                song: song.to_string(),
                album: album.to_string(),
            })?;

        songs.remove(position);
        Ok(())
    }

    /// Remove an album and return the songs it held
    pub fn remove_album(&mut self, album: &str) -> Result<Vec<String>, DomainError> {
        self.albums
            .shift_remove(album)
            .ok_or_else(|| DomainError::AlbumNotFound(album.to_string()))
    }

    /// Drop entries a hand-edited file may carry that the catalog never produces itself:
    /// blank song names and repeats within one album. Returns the number of entries dropped.
    pub fn normalize(&mut self) -> usize {
        let mut dropped = 0;
        for (album, songs) in self.albums.iter_mut() {
            let mut kept: Vec<String> = Vec::with_capacity(songs.len());
            for song in songs.drain(..) {
                if song.trim().is_empty() || kept.contains(&song) {
                    warn!(album = %album, song = %song, "Dropping invalid catalog entry");
                    dropped += 1;
                    continue;
                }
                kept.push(song);
            }
            *songs = kept;
        }
        dropped
    }
}
