//! RetryFailedSectionsHandler - Command handler re-fetching failed sections.
//!
//! The store never retries on its own; this is the caller-initiated retry
//! behind a "try again" action. Failed sections are refreshed
//! concurrently and independently.

use futures::future::join_all;

use crate::application::store::PortfolioStore;
use crate::domain::content::{Section, SectionLoadFailure};

/// Command to retry every section currently in error.
#[derive(Debug, Clone, Default)]
pub struct RetryFailedSectionsCommand;

/// Result of a retry round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetryFailedSectionsResult {
    pub recovered: Vec<Section>,
    pub still_failing: Vec<SectionLoadFailure>,
}

impl RetryFailedSectionsResult {
    /// True when nothing needed retrying.
    pub fn is_noop(&self) -> bool {
        self.recovered.is_empty() && self.still_failing.is_empty()
    }
}

/// Handler for retrying failed sections.
pub struct RetryFailedSectionsHandler {
    store: PortfolioStore,
}

impl RetryFailedSectionsHandler {
    pub fn new(store: PortfolioStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _cmd: RetryFailedSectionsCommand) -> RetryFailedSectionsResult {
        let failed = self.store.status_view().failed_sections();
        if failed.is_empty() {
            return RetryFailedSectionsResult::default();
        }
        tracing::info!(count = failed.len(), "Retrying failed sections");

        let results = join_all(failed.iter().map(|section| self.store.refresh_section(*section))).await;

        let mut outcome = RetryFailedSectionsResult::default();
        for (section, result) in failed.into_iter().zip(results) {
            match result {
                Ok(_) => outcome.recovered.push(section),
                Err(failure) => outcome.still_failing.push(failure),
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySource;
    use crate::domain::content::SectionPayload;
    use crate::ports::{SectionSources, SourceError};
    use std::sync::Arc;

    #[tokio::test]
    async fn nothing_to_retry_is_noop() {
        let source = Arc::new(InMemorySource::new());
        let store = PortfolioStore::new(SectionSources::new(source.clone()));
        store.load_all(false).await;

        let result = RetryFailedSectionsHandler::new(store)
            .handle(RetryFailedSectionsCommand)
            .await;

        assert!(result.is_noop());
        assert_eq!(source.total_calls(), Section::COUNT);
    }

    #[tokio::test]
    async fn retries_only_failed_sections() {
        let source = Arc::new(
            InMemorySource::new()
                .with_failure(Section::Skills, SourceError::Timeout)
                .with_failure(Section::Volunteer, SourceError::Status(500)),
        );
        let store = PortfolioStore::new(SectionSources::new(source.clone()));
        store.load_all(false).await;

        source.set_payload(Section::Skills, SectionPayload::default_for(Section::Skills));
        let result = RetryFailedSectionsHandler::new(store.clone())
            .handle(RetryFailedSectionsCommand)
            .await;

        assert_eq!(result.recovered, vec![Section::Skills]);
        assert_eq!(result.still_failing.len(), 1);
        assert_eq!(result.still_failing[0].section, Section::Volunteer);
        assert_eq!(source.call_count(Section::Skills), 2);
        assert_eq!(source.call_count(Section::Projects), 1);
        assert_eq!(store.status_view().failed_sections(), vec![Section::Volunteer]);
    }
}
