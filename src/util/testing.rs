// src/util/testing.rs

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::repository::{DocumentRepository, LoadStatus, Loaded};
use crate::domain::{Catalog, DomainError};

/// In-memory stand-in for a document file.
///
/// Records every saved document so tests can inspect what would have been written.
///
/// # Examples
///
/// ```
/// use discquiz::application::{DocumentRepository, LoadStatus};
/// use discquiz::domain::NoteBook;
/// use discquiz::util::testing::InMemoryRepository;
///
/// let mut repo = InMemoryRepository::<NoteBook>::builder()
///     .with_corrupt("trailing comma")
///     .build();
///
/// let loaded = repo.load().unwrap();
/// assert!(matches!(loaded.status, LoadStatus::Corrupt(_)));
/// ```
pub struct InMemoryRepository<T> {
    document: Option<T>,
    corrupt: Option<String>,
    save_failure: Option<String>,
    saved: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn builder() -> InMemoryRepositoryBuilder<T> {
        InMemoryRepositoryBuilder::new()
    }

    /// Every document passed to `save`, oldest first
    pub fn saved(&self) -> &[T] {
        &self.saved
    }
}

impl<T: Clone + Default> DocumentRepository<T> for InMemoryRepository<T> {
    fn load(&mut self) -> Result<Loaded<T>, DomainError> {
        if let Some(reason) = &self.corrupt {
            return Ok(Loaded {
                document: T::default(),
                status: LoadStatus::Corrupt(reason.clone()),
            });
        }
        Ok(match &self.document {
            Some(document) => Loaded {
                document: document.clone(),
                status: LoadStatus::Loaded,
            },
            None => Loaded {
                document: T::default(),
                status: LoadStatus::Missing,
            },
        })
    }

    fn save(&mut self, document: &T) -> Result<(), DomainError> {
        if let Some(reason) = &self.save_failure {
            return Err(DomainError::SaveFailed {
                path: self.location(),
                reason: reason.clone(),
            });
        }
        self.document = Some(document.clone());
        self.saved.push(document.clone());
        Ok(())
    }

    fn preserve_original(&mut self) -> Result<Option<PathBuf>, DomainError> {
        Ok(self
            .corrupt
            .as_ref()
            .map(|_| PathBuf::from("memory.json.corrupt.bak")))
    }

    fn location(&self) -> String {
        "memory.json".to_string()
    }
}

/// Builder for InMemoryRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct InMemoryRepositoryBuilder<T> {
    document: Option<T>,
    corrupt: Option<String>,
    save_failure: Option<String>,
}

impl<T> InMemoryRepositoryBuilder<T> {
    pub fn new() -> Self {
        Self {
            document: None,
            corrupt: None,
            save_failure: None,
        }
    }

    /// Document returned by `load`; without one `load` reports a missing file
    pub fn with_document(mut self, document: T) -> Self {
        self.document = Some(document);
        self
    }

    /// Make `load` report unparsable data with the given parser message
    pub fn with_corrupt(mut self, reason: &str) -> Self {
        self.corrupt = Some(reason.to_string());
        self
    }

    /// Make every `save` fail with the given reason
    pub fn with_save_failure(mut self, reason: &str) -> Self {
        self.save_failure = Some(reason.to_string());
        self
    }

    pub fn build(self) -> InMemoryRepository<T> {
        InMemoryRepository {
            document: self.document,
            corrupt: self.corrupt,
            save_failure: self.save_failure,
            saved: vec![],
        }
    }
}

impl<T> Default for InMemoryRepositoryBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a catalog from literal album/song lists, bypassing validation
pub fn catalog_from(albums: &[(&str, &[&str])]) -> Catalog {
    let albums: serde_json::Map<String, serde_json::Value> = albums
        .iter()
        .map(|(name, songs)| (name.to_string(), serde_json::json!(songs)))
        .collect();
    serde_json::from_value(serde_json::json!({ "albums": albums }))
        .unwrap_or_else(|e| panic!("Invalid test catalog: {e}"))
}

/// `{"A": ["s1","s2"], "B": ["s3"], "C": ["s4"], "D": ["s5"]}`
pub fn sample_catalog() -> Catalog {
    catalog_from(&[
        ("A", &["s1", "s2"]),
        ("B", &["s3"]),
        ("C", &["s4"]),
        ("D", &["s5"]),
    ])
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
