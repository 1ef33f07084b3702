// src/domain/mod.rs
pub mod catalog;
pub mod error;
pub mod notes;
pub mod question;
pub mod song_index;

pub use catalog::Catalog;
pub use error::DomainError;
pub use notes::NoteBook;
pub use question::{Grade, MissedQuestion, Question, QuestionOutcome, RetakeComparison, TestResult};
pub use song_index::SongIndex;
