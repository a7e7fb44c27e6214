//! SectionSource port - Interface for fetching one section's content.
//!
//! The store never knows where content lives. Each section is routed to a
//! source through [`SectionSources`], so every section has exactly one
//! fetch function while a single adapter may serve several sections.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::content::{Section, SectionPayload};

/// Errors a source can report for a single fetch.
///
/// The store flattens these into display strings; the variants exist so
/// adapters and their tests can be precise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("{0} content not found")]
    NotFound(Section),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Malformed content: {0}")]
    Decode(String),

    #[error("Request failed: {0}")]
    Http(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Request timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

/// Port for loading portfolio content.
///
/// # Example
///
/// ```ignore
/// struct StaticSource;
///
/// #[async_trait]
/// impl SectionSource for StaticSource {
///     async fn fetch(&self, section: Section) -> Result<SectionPayload, SourceError> {
///         Ok(SectionPayload::default_for(section))
///     }
///
///     fn name(&self) -> &'static str {
///         "StaticSource"
///     }
/// }
/// ```
#[async_trait]
pub trait SectionSource: Send + Sync {
    /// Fetch the current content of `section`.
    ///
    /// Implementations must return a payload whose `section()` equals the
    /// requested section.
    async fn fetch(&self, section: Section) -> Result<SectionPayload, SourceError>;

    /// Source name for logging.
    fn name(&self) -> &'static str;
}

/// Routing table from section to source.
///
/// Built from a default source with optional per-section overrides, so it
/// can never leave a section without a fetch function.
#[derive(Clone)]
pub struct SectionSources {
    default: Arc<dyn SectionSource>,
    overrides: HashMap<Section, Arc<dyn SectionSource>>,
}

impl SectionSources {
    /// Serve every section from `default`.
    pub fn new(default: Arc<dyn SectionSource>) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Serve `section` from `source` instead of the default.
    pub fn route(mut self, section: Section, source: Arc<dyn SectionSource>) -> Self {
        self.overrides.insert(section, source);
        self
    }

    /// The source responsible for `section`.
    pub fn source_for(&self, section: Section) -> Arc<dyn SectionSource> {
        self.overrides
            .get(&section)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.default))
    }
}

impl std::fmt::Debug for SectionSources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for section in Section::all() {
            map.entry(&section.key(), &self.source_for(*section).name());
        }
        map.finish()
    }
}
