// src/ports/terminal.rs
use crate::ports::console::LineSource;
use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;
use tracing::debug;

/// Interactive terminal input with line editing and in-session history
pub struct TerminalInput {
    editor: DefaultEditor,
}

impl TerminalInput {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to open terminal for input")?;
        Ok(Self { editor })
    }
}

impl LineSource for TerminalInput {
    fn read_line<W: Write>(&mut self, prompt: &str, output: &mut W) -> Result<Option<String>> {
        // rustyline draws the prompt itself; anything already written must be on screen first
        output.flush().context("Failed to flush output")?;

        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) => {
                debug!("Input closed (EOF)");
                Ok(None)
            }
            Err(ReadlineError::Interrupted) => {
                debug!("Input interrupted (Ctrl-C)");
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to read input"),
        }
    }
}
