// src/application/mod.rs
pub mod catalog_store;
pub mod document_store;
pub mod notes_store;
pub mod quiz_engine;
pub mod quiz_session;
pub mod repository;

pub use catalog_store::CatalogStore;
pub use document_store::DocumentStore;
pub use notes_store::NotesStore;
pub use quiz_engine::{grade_test, GeneratedTest, QuizEngine};
pub use quiz_session::QuizSession;
pub use repository::{DocumentRepository, LoadStatus, Loaded};
