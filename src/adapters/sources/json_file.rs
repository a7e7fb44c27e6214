//! JSON directory source - reads `<data_dir>/<section>.json`.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::content::{Section, SectionPayload};
use crate::ports::{SectionSource, SourceError};

/// Serves sections from JSON documents on disk, one file per section.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    /// Creates a source rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory content files are read from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the document backing `section`.
    pub fn path_for(&self, section: Section) -> PathBuf {
        self.data_dir.join(format!("{}.json", section.key()))
    }
}

#[async_trait]
impl SectionSource for JsonFileSource {
    async fn fetch(&self, section: Section) -> Result<SectionPayload, SourceError> {
        let path = self.path_for(section);
        tracing::debug!("Reading {} from {}", section, path.display());

        let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound(section),
            _ => SourceError::Io(format!("{}: {}", path.display(), e)),
        })?;

        Ok(SectionPayload::from_json(section, &bytes)?)
    }

    fn name(&self) -> &'static str {
        "JsonFileSource"
    }
}
