// src/constants.rs
//
// Application-wide constants shared by the quiz engine, the stores and the shells.

/// Number of answer choices offered per question.
///
/// Used in: `application/quiz_engine.rs`, `cli/quiz.rs`
pub const QUESTION_CHOICES: usize = 4;

/// Wrong albums sampled per question; a catalog needs at least this many albums besides
/// the correct one before a question can be built.
///
/// Used in: `application/quiz_engine.rs`, `domain/song_index.rs`
pub const WRONG_CHOICES: usize = QUESTION_CHOICES - 1;

/// Upper bound of the "how many questions" prompt when the config does not set one.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_MAX_QUESTIONS: usize = 20;

/// Catalog file name, relative to the working directory, when neither a flag nor the
/// config names one.
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// Notes file name, relative to the working directory, when neither a flag nor the
/// config names one.
pub const DEFAULT_NOTES_FILE: &str = "notes.json";

/// Suffix appended to a data file that failed to parse before it is overwritten.
///
/// Used in: `infrastructure/json_file.rs`
pub const CORRUPT_BACKUP_SUFFIX: &str = "corrupt.bak";

/// Width of the `=` separator lines printed between screens.
///
/// Used in: `ports/presenter.rs`
pub const RULE_WIDTH: usize = 60;
