// src/cli/notes.rs
use crate::application::{DocumentRepository, NotesStore};
use crate::cli::{read_menu_option, save_store, MenuExit};
use crate::domain::NoteBook;
use crate::ports::{Console, LineSource, TerminalPresenter};
use anyhow::Result;
use std::io::Write;

const MENU: &str = "\
1. View all notes
2. Add new note
3. Edit existing note
4. Remove note
5. Search notes
6. Save and exit
7. Exit without saving";

/// Notes manager menu; returns once the user saves or leaves
pub fn run_notes_menu<I, O, S>(
    console: &mut Console<I, O>,
    store: &mut NotesStore<S>,
) -> Result<MenuExit>
where
    I: LineSource,
    O: Write,
    S: DocumentRepository<NoteBook>,
{
    let presenter = TerminalPresenter::new();
    loop {
        let Some(choice) = read_menu_option(console, &presenter, "SONG NOTES MANAGER", MENU)? else {
            continue;
        };

        match choice {
            1 => view_notes(console, store, &presenter)?,
            2 => add_note(console, store, &presenter)?,
            3 => edit_note(console, store, &presenter)?,
            4 => remove_note(console, store, &presenter)?,
            5 => search_notes(console, store, &presenter)?,
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

fn view_notes<I: LineSource, O: Write, S: DocumentRepository<NoteBook>>(
    console: &mut Console<I, O>,
    store: &NotesStore<S>,
    presenter: &TerminalPresenter,
) -> Result<()> {
    console.say(presenter.banner("ALL SONG NOTES"))?;
    if store.notes().is_empty() {
        return console.say("No notes found.");
    }
    let notes: Vec<(&str, &str)> = store.notes().iter().collect();
    console.say(presenter.note_list(&notes))
}

fn add_note<I: LineSource, O: Write, S: DocumentRepository<NoteBook>>(
    console: &mut Console<I, O>,
    store: &mut NotesStore<S>,
    presenter: &TerminalPresenter,
) -> Result<()> {
    console.say(presenter.banner("ADD NEW NOTE"))?;

    let song = console.ask("Enter song name: ")?;
    if song.is_empty() {
        return console.say("Song name cannot be empty!");
    }
    if let Some(existing) = store.get_note(&song).map(str::to_string) {
        console.say(format!("Note already exists for '{song}': {existing}"))?;
        if !console.confirm("Do you want to overwrite it? (y/n): ")? {
            return Ok(());
        }
    }

    let note =
        console.ask("Enter your note (to help remember which album this song belongs to): ")?;
    if note.is_empty() {
        return console.say("Note cannot be empty!");
    }
    match store.add_note(&song, &note) {
        Ok(_) => console.say(format!("Note added for '{song}': {note}")),
        Err(e) => console.say(format!("Could not add note: {e}")),
    }
}

/// Let the user pick one of the songs that has a note
fn pick_song<I: LineSource, O: Write, S: DocumentRepository<NoteBook>>(
    console: &mut Console<I, O>,
    store: &NotesStore<S>,
    presenter: &TerminalPresenter,
    action: &str,
) -> Result<Option<String>> {
    let songs: Vec<String> = store.notes().songs().into_iter().map(String::from).collect();
    if songs.is_empty() {
        console.say(format!("No notes found to {action}."))?;
        return Ok(None);
    }

    let listing: Vec<&str> = songs.iter().map(String::as_str).collect();
    console.say(presenter.numbered("Songs with notes:", &listing))?;
    let prompt = match action {
        "edit" => format!("\nSelect song to edit (1-{}): ", songs.len()),
        _ => format!("\nSelect song to {action} note (1-{}): ", songs.len()),
    };
    let index = console.choose(&prompt, songs.len())?;
    Ok(songs.into_iter().nth(index))
}

fn edit_note<I: LineSource, O: Write, S: DocumentRepository<NoteBook>>(
    console: &mut Console<I, O>,
    store: &mut NotesStore<S>,
    presenter: &TerminalPresenter,
) -> Result<()> {
    console.say(presenter.banner("EDIT NOTE"))?;
    let Some(song) = pick_song(console, store, presenter, "edit")? else {
        return Ok(());
    };

    let current = store.get_note(&song).unwrap_or_default().to_string();
    console.say(format!("\nCurrent note for '{song}': {current}"))?;
    let note = console.ask("Enter new note: ")?;
    if note.is_empty() {
        return console.say("Note cannot be empty!");
    }
    match store.add_note(&song, &note) {
        Ok(_) => console.say(format!("Note updated for '{song}': {note}")),
        Err(e) => console.say(format!("Could not update note: {e}")),
    }
}

fn remove_note<I: LineSource, O: Write, S: DocumentRepository<NoteBook>>(
    console: &mut Console<I, O>,
    store: &mut NotesStore<S>,
    presenter: &TerminalPresenter,
) -> Result<()> {
    console.say(presenter.banner("REMOVE NOTE"))?;
    let Some(song) = pick_song(console, store, presenter, "remove")? else {
        return Ok(());
    };

    if !console.confirm(&format!(
        "\nAre you sure you want to remove the note for '{song}'? (y/n): "
    ))? {
        return console.say("Removal cancelled.");
    }
    match store.remove_note(&song) {
        Ok(_) => console.say(format!("Note removed for '{song}'")),
        Err(e) => console.say(format!("{e}")),
    }
}

fn search_notes<I: LineSource, O: Write, S: DocumentRepository<NoteBook>>(
    console: &mut Console<I, O>,
    store: &NotesStore<S>,
    presenter: &TerminalPresenter,
) -> Result<()> {
    console.say(presenter.banner("SEARCH NOTES"))?;
    if store.notes().is_empty() {
        return console.say("No notes found to search.");
    }

    let term = console.ask("Enter search term: ")?;
    if term.is_empty() {
        return console.say("Search term cannot be empty!");
    }
    let found = store.search(&term);
    if found.is_empty() {
        return console.say("No notes found matching your search term.");
    }
    console.say(format!("\nFound {} matching notes:", found.len()))?;
    console.say(presenter.note_list(&found))
}
