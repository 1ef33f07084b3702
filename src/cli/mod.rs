// src/cli/mod.rs
//! Command-line entry points: argument parsing and the interactive menus.

pub mod args;
pub mod catalog;
pub mod notes;
pub mod quiz;

use crate::application::{DocumentRepository, DocumentStore};
use crate::ports::console::parse_menu_choice;
use crate::ports::{Console, LineSource, TerminalPresenter};
use anyhow::Result;
use std::io::Write;
use tracing::error;

/// How a menu loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    Saved,
    Discarded,
}

/// Show a titled 1-7 menu and read one option.
///
/// Returns the 1-based option, or `None` after reporting an invalid reply.
pub(crate) fn read_menu_option<I: LineSource, O: Write>(
    console: &mut Console<I, O>,
    presenter: &TerminalPresenter,
    title: &str,
    menu: &str,
) -> Result<Option<usize>> {
    console.say(presenter.banner(title))?;
    console.say(menu)?;
    let reply = console.ask("\nSelect option (1-7): ")?;
    match parse_menu_choice(&reply, 7) {
        Ok(index) => Ok(Some(index + 1)),
        Err(_) => {
            console.say("Invalid option! Please select 1-7.")?;
            Ok(None)
        }
    }
}

/// Save a store, asking first when it was loaded from an unreadable file.
///
/// Returns whether the data was written. Failures are reported to the user and leave the
/// store untouched so the caller can stay in its menu and retry.
pub(crate) fn save_store<T, S, I, O>(
    console: &mut Console<I, O>,
    store: &mut DocumentStore<T, S>,
) -> Result<bool>
where
    S: DocumentRepository<T>,
    I: LineSource,
    O: Write,
{
    if store.needs_overwrite_confirmation() {
        console.say(format!(
            "'{}' could not be read when it was loaded. Saving will replace its contents.",
            store.location()
        ))?;
        if !console.confirm("Overwrite it? A backup copy is kept. (y/n): ")? {
            console.say("Not saved.")?;
            return Ok(false);
        }
        match store.confirm_overwrite() {
            Ok(Some(backup)) => console.say(format!("Backup written to '{}'", backup.display()))?,
            Ok(None) => {}
            Err(e) => {
                error!(error = %e, "Backup failed");
                console.say(format!("Error saving: {e}"))?;
                return Ok(false);
            }
        }
    }

    match store.save() {
        Ok(()) => {
            console.say(format!("Saved successfully to '{}'", store.location()))?;
            Ok(true)
        }
        Err(e) => {
            error!(error = %e, "Save failed");
            console.say(format!("Error saving: {e}"))?;
            Ok(false)
        }
    }
}
