// src/ports/mod.rs
pub mod console;
pub mod presenter;
pub mod terminal;

pub use console::{Console, LineSource};
pub use presenter::TerminalPresenter;
pub use terminal::TerminalInput;
