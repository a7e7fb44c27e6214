//! In-memory section source for testing.
//!
//! Scripted per-section responses with optional latency, plus call
//! counters so tests can assert how many fetches the store issued.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::content::{Section, SectionPayload};
use crate::ports::{SectionSource, SourceError};

#[derive(Debug, Clone)]
struct Script {
    response: Result<SectionPayload, SourceError>,
    delay: Duration,
}

/// In-memory source for tests and demos.
///
/// Sections without a script resolve immediately with their default
/// payload.
///
/// # Example
///
/// ```ignore
/// let source = Arc::new(
///     InMemorySource::new()
///         .with_payload(Section::Projects, SectionPayload::Projects(vec![]))
///         .with_failure(Section::Skills, SourceError::Timeout)
///         .with_delay(Section::Projects, Duration::from_millis(10)),
/// );
///
/// store.load_all(false).await;
/// assert_eq!(source.call_count(Section::Projects), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySource {
    scripts: Mutex<HashMap<Section, Script>>,
    calls: Mutex<HashMap<Section, usize>>,
}

impl InMemorySource {
    /// Creates a source with no scripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_payload`](Self::set_payload).
    pub fn with_payload(self, section: Section, payload: SectionPayload) -> Self {
        self.set_payload(section, payload);
        self
    }

    /// Builder form of [`set_failure`](Self::set_failure).
    pub fn with_failure(self, section: Section, error: SourceError) -> Self {
        self.set_failure(section, error);
        self
    }

    /// Builder form of [`set_delay`](Self::set_delay).
    pub fn with_delay(self, section: Section, delay: Duration) -> Self {
        self.set_delay(section, delay);
        self
    }

    /// Makes `section` resolve with `payload`, keeping any configured delay.
    pub fn set_payload(&self, section: Section, payload: SectionPayload) {
        self.update(section, |script| script.response = Ok(payload));
    }

    /// Makes `section` fail with `error`, keeping any configured delay.
    pub fn set_failure(&self, section: Section, error: SourceError) {
        self.update(section, |script| script.response = Err(error));
    }

    /// Delays every fetch of `section` by `delay`.
    pub fn set_delay(&self, section: Section, delay: Duration) {
        self.update(section, |script| script.delay = delay);
    }

    // === Test Helpers ===

    /// Number of fetches issued for `section`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn call_count(&self, section: Section) -> usize {
        self.calls
            .lock()
            .expect("InMemorySource: calls lock poisoned")
            .get(&section)
            .copied()
            .unwrap_or(0)
    }

    /// Number of fetches issued across all sections.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn total_calls(&self) -> usize {
        self.calls
            .lock()
            .expect("InMemorySource: calls lock poisoned")
            .values()
            .sum()
    }

    fn update(&self, section: Section, apply: impl FnOnce(&mut Script)) {
        let mut scripts = self
            .scripts
            .lock()
            .expect("InMemorySource: scripts lock poisoned");
        let script = scripts.entry(section).or_insert_with(|| Script {
            response: Ok(SectionPayload::default_for(section)),
            delay: Duration::ZERO,
        });
        apply(script);
    }
}

#[async_trait]
impl SectionSource for InMemorySource {
    async fn fetch(&self, section: Section) -> Result<SectionPayload, SourceError> {
        *self
            .calls
            .lock()
            .expect("InMemorySource: calls lock poisoned")
            .entry(section)
            .or_insert(0) += 1;

        // Clone the script to release the lock before sleeping
        let script = self
            .scripts
            .lock()
            .expect("InMemorySource: scripts lock poisoned")
            .get(&section)
            .cloned();

        match script {
            Some(script) => {
                if !script.delay.is_zero() {
                    tokio::time::sleep(script.delay).await;
                }
                script.response
            }
            None => Ok(SectionPayload::default_for(section)),
        }
    }

    fn name(&self) -> &'static str {
        "InMemorySource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::Certificate;
    use std::time::Instant;

    fn certificates() -> SectionPayload {
        SectionPayload::Certificates(vec![Certificate {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            ..Default::default()
        }])
    }

    #[tokio::test]
    async fn unscripted_section_returns_default() {
        let source = InMemorySource::new();
        let payload = source.fetch(Section::Timeline).await.unwrap();
        assert_eq!(payload, SectionPayload::default_for(Section::Timeline));
    }

    #[tokio::test]
    async fn scripted_payload_is_returned() {
        let source = InMemorySource::new().with_payload(Section::Certificates, certificates());
        assert_eq!(source.fetch(Section::Certificates).await.unwrap(), certificates());
    }

    #[tokio::test]
    async fn scripted_failure_is_returned() {
        let source = InMemorySource::new().with_failure(Section::Contact, SourceError::Timeout);
        assert_eq!(source.fetch(Section::Contact).await.unwrap_err(), SourceError::Timeout);
    }

    #[tokio::test]
    async fn delay_survives_response_change() {
        let source = InMemorySource::new().with_delay(Section::Skills, Duration::from_millis(20));
        source.set_failure(Section::Skills, SourceError::Status(500));

        let started = Instant::now();
        let result = source.fetch(Section::Skills).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(result.unwrap_err(), SourceError::Status(500));
    }

    #[tokio::test]
    async fn counts_calls_per_section() {
        let source = InMemorySource::new();
        source.fetch(Section::Projects).await.unwrap();
        source.fetch(Section::Projects).await.unwrap();
        source.fetch(Section::Education).await.unwrap();

        assert_eq!(source.call_count(Section::Projects), 2);
        assert_eq!(source.call_count(Section::Education), 1);
        assert_eq!(source.call_count(Section::Skills), 0);
        assert_eq!(source.total_calls(), 3);
    }
}
