//! Observer that writes store events to the tracing log.

use crate::domain::content::StoreEvent;
use crate::ports::StoreObserver;

/// Logs every store event; failures at `warn`, everything else at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl StoreObserver for TracingObserver {
    fn on_event(&self, event: &StoreEvent) {
        match event {
            StoreEvent::SectionFailed { section, message } => {
                tracing::warn!(section = %section, "Section failed: {}", message);
            }
            StoreEvent::AllSettled { failed } => {
                tracing::info!(failed = *failed, "Content load settled");
            }
            other => tracing::debug!(event = ?other, "Store event"),
        }
    }

    fn name(&self) -> &'static str {
        "TracingObserver"
    }
}
