// src/cli/catalog.rs
use crate::application::{CatalogStore, DocumentRepository};
use crate::cli::{read_menu_option, save_store, MenuExit};
use crate::domain::Catalog;
use crate::ports::{Console, LineSource, TerminalPresenter};
use anyhow::Result;
use std::io::Write;

const MENU: &str = "\
1. View all albums and songs
2. Add new album
3. Add songs to existing album
4. Remove song
5. Remove album
6. Save and exit
7. Exit without saving";

/// Catalog manager menu; returns once the user saves or leaves
pub fn run_catalog_menu<I, O, S>(
    console: &mut Console<I, O>,
    store: &mut CatalogStore<S>,
) -> Result<MenuExit>
where
    I: LineSource,
    O: Write,
    S: DocumentRepository<Catalog>,
{
    let presenter = TerminalPresenter::new();
    loop {
        let Some(choice) = read_menu_option(console, &presenter, "DATABASE MANAGER", MENU)? else {
            continue;
        };

        match choice {
            1 => console.say(presenter.catalog(store.catalog()))?,
            2 => add_album(console, store, &presenter)?,
            3 => add_songs(console, store, &presenter)?,
            4 => remove_song(console, store, &presenter)?,
            5 => remove_album(console, store, &presenter)?,
            6 => {
                if save_store(console, store)? {
                    console.say("Goodbye!")?;
                    return Ok(MenuExit::Saved);
                }
            }
            _ => {
                if store.is_dirty() {
                    console.say("Exiting without saving changes...")?;
                } else {
                    console.say("Goodbye!")?;
                }
                return Ok(MenuExit::Discarded);
            }
        }
    }
}

fn add_album<I: LineSource, O: Write, S: DocumentRepository<Catalog>>(
    console: &mut Console<I, O>,
    store: &mut CatalogStore<S>,
    presenter: &TerminalPresenter,
) -> Result<()> {
    console.say(presenter.banner("ADD NEW ALBUM"))?;

    let name = console.ask("Enter album name: ")?;
    if name.is_empty() {
        console.say("Album name cannot be empty!")?;
        return Ok(());
    }
    if store.catalog().songs(&name).is_some() {
        console.say(format!("Album '{name}' already exists!"))?;
        return Ok(());
    }

    let mut songs: Vec<String> = Vec::new();
    console.say(format!(
        "\nEnter songs for '{name}' (press Enter on an empty line to finish):"
    ))?;
    loop {
        let song = console.ask(&format!("Song {}: ", songs.len() + 1))?;
        if song.is_empty() {
            if songs.is_empty() {
                console.say("You must add at least one song!")?;
                continue;
            }
            break;
        }
        if songs.contains(&song) {
            console.say("This song is already in the album!")?;
            continue;
        }
        if let Some(owner) = store.catalog().find_song(&song) {
            console.say(format!("'{song}' is already in album '{owner}'!"))?;
            continue;
        }
        songs.push(song);
    }

    let count = songs.len();
    match store.add_album(&name, songs) {
        Ok(()) => console.say(format!("\nAlbum '{name}' added with {count} songs!")),
        Err(e) => console.say(format!("Could not add album: {e}")),
    }
}

fn add_songs<I: LineSource, O: Write, S: DocumentRepository<Catalog>>(
    console: &mut Console<I, O>,
    store: &mut CatalogStore<S>,
    presenter: &TerminalPresenter,
) -> Result<()> {
    console.say(presenter.banner("ADD SONGS TO EXISTING ALBUM"))?;
    if store.catalog().is_empty() {
        return console.say("No albums in database. Please add an album first.");
    }

    let albums: Vec<String> = store.catalog().album_names().into_iter().map(String::from).collect();
    console.say(presenter.album_menu(store.catalog()))?;
    let index = console.choose(&format!("\nSelect album (1-{}): ", albums.len()), albums.len())?;
    let album = &albums[index];

    console.say(format!("\nAdding songs to '{album}'..."))?;
    loop {
        let song = console.ask("Enter song name (or press Enter to finish): ")?;
        if song.is_empty() {
            break;
        }
        match store.add_song(album, &song) {
            Ok(()) => console.say(format!("Added '{song}' to '{album}'"))?,
            Err(e) => console.say(format!("{e}!"))?,
        }
    }
    console.say(format!("\nFinished adding songs to '{album}'"))
}

fn remove_song<I: LineSource, O: Write, S: DocumentRepository<Catalog>>(
    console: &mut Console<I, O>,
    store: &mut CatalogStore<S>,
    presenter: &TerminalPresenter,
) -> Result<()> {
    console.say(presenter.banner("REMOVE SONG"))?;

    let entries: Vec<(String, String)> = store
        .catalog()
        .entries()
        .into_iter()
        .map(|(song, album)| (song.to_string(), album.to_string()))
        .collect();
    if entries.is_empty() {
        return console.say("No songs in database.");
    }

    let listing: Vec<(&str, &str)> = entries
        .iter()
        .map(|(song, album)| (song.as_str(), album.as_str()))
        .collect();
    console.say(presenter.song_menu(&listing))?;
    let index = console.choose(
        &format!("\nSelect song to remove (1-{}): ", entries.len()),
        entries.len(),
    )?;
    let (song, album) = &entries[index];

    if console.confirm(&format!(
        "\nAre you sure you want to remove '{song}' from '{album}'? (y/n): "
    ))? {
        match store.remove_song(album, song) {
            Ok(()) => console.say(format!("Removed '{song}' from '{album}'")),
            Err(e) => console.say(format!("Could not remove song: {e}")),
        }
    } else {
        console.say("Removal cancelled.")
    }
}

fn remove_album<I: LineSource, O: Write, S: DocumentRepository<Catalog>>(
    console: &mut Console<I, O>,
    store: &mut CatalogStore<S>,
    presenter: &TerminalPresenter,
) -> Result<()> {
    console.say(presenter.banner("REMOVE ALBUM"))?;
    if store.catalog().is_empty() {
        return console.say("No albums in database.");
    }

    let albums: Vec<String> = store.catalog().album_names().into_iter().map(String::from).collect();
    console.say(presenter.album_menu(store.catalog()))?;
    let index = console.choose(
        &format!("\nSelect album to remove (1-{}): ", albums.len()),
        albums.len(),
    )?;
    let album = &albums[index];
    let song_count = store.catalog().songs(album).map_or(0, <[String]>::len);

    if console.confirm(&format!(
        "\nAre you sure you want to remove '{album}' with {song_count} songs? (y/n): "
    ))? {
        match store.remove_album(album) {
            Ok(_) => console.say(format!("Removed album '{album}'")),
            Err(e) => console.say(format!("Could not remove album: {e}")),
        }
    } else {
        console.say("Removal cancelled.")
    }
}
