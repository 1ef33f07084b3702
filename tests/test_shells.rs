mod helpers;

use anyhow::Result;
use discquiz::application::{CatalogStore, NotesStore};
use discquiz::cli::catalog::run_catalog_menu;
use discquiz::cli::notes::run_notes_menu;
use discquiz::cli::MenuExit;
use discquiz::infrastructure::JsonFileRepository;
use discquiz::ports::Console;
use helpers::{TestWorkspace, CATALOG_JSON};
use std::io::Cursor;

fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

#[test]
fn given_catalog_menu_when_adding_album_and_saving_then_file_contains_it() -> Result<()> {
    // Arrange
    let workspace = TestWorkspace::with_catalog()?;
    let mut store = CatalogStore::open_catalog(JsonFileRepository::new(&workspace.catalog_path))?;
    let mut console = console("2\n依然范特西\n听妈妈的话\n千里之外\n\n6\n");

    // Act
    let exit = run_catalog_menu(&mut console, &mut store)?;

    // Assert
    assert_eq!(exit, MenuExit::Saved);
    let content = workspace.read_catalog()?;
    assert!(content.contains("\"依然范特西\": [\n      \"听妈妈的话\",\n      \"千里之外\"\n    ]"));
    Ok(())
}

#[test]
fn given_catalog_menu_when_exiting_without_saving_then_file_is_untouched() -> Result<()> {
    let workspace = TestWorkspace::with_catalog()?;
    let mut store = CatalogStore::open_catalog(JsonFileRepository::new(&workspace.catalog_path))?;
    let mut console = console("5\n1\ny\n7\n");

    let exit = run_catalog_menu(&mut console, &mut store)?;

    assert_eq!(exit, MenuExit::Discarded);
    assert_eq!(workspace.read_catalog()?, CATALOG_JSON);
    let out = String::from_utf8(console.into_output())?;
    assert!(out.contains("Removed album 'Jay'"));
    assert!(out.contains("Exiting without saving changes..."));
    Ok(())
}

#[test]
fn given_corrupt_notes_file_when_saving_from_menu_then_backup_is_written() -> Result<()> {
    // Arrange
    let workspace = TestWorkspace::new()?;
    workspace.write_notes("not json")?;
    let mut store = NotesStore::open(JsonFileRepository::new(&workspace.notes_path))?;
    let mut console = console("2\n晴天\nrainy day\n6\ny\n");

    // Act
    let exit = run_notes_menu(&mut console, &mut store)?;

    // Assert
    assert_eq!(exit, MenuExit::Saved);
    let backup = workspace.notes_path.with_file_name("notes.json.corrupt.bak");
    assert_eq!(std::fs::read_to_string(backup)?, "not json");
    assert!(workspace.read_notes()?.contains("\"晴天\": \"rainy day\""));
    Ok(())
}

#[test]
fn given_closed_input_when_in_menu_then_returns_error() -> Result<()> {
    let workspace = TestWorkspace::new()?;
    let mut store = NotesStore::open(JsonFileRepository::new(&workspace.notes_path))?;
    let mut console = console("1\n");

    let result = run_notes_menu(&mut console, &mut store);

    assert!(result.is_err());
    Ok(())
}
