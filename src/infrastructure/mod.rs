// src/infrastructure/mod.rs
pub mod config;
pub mod json_file;

pub use config::Config;
pub use json_file::JsonFileRepository;
