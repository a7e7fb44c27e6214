//! Observer that records events for test assertions.
//!
//! # Security Note
//!
//! Testing only: lock poisoning panics via `.expect()`.

use std::sync::RwLock;

use crate::domain::content::{Section, StoreEvent};
use crate::ports::StoreObserver;

/// Keeps every received event in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RwLock<Vec<StoreEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events
            .read()
            .expect("RecordingObserver: events lock poisoned")
            .clone()
    }

    /// Number of events received.
    pub fn event_count(&self) -> usize {
        self.events().len()
    }

    /// Events concerning `section`.
    pub fn events_for(&self, section: Section) -> Vec<StoreEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.section() == Some(section))
            .collect()
    }

    /// Forgets everything recorded so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.events
            .write()
            .expect("RecordingObserver: events write lock poisoned")
            .clear();
    }
}

impl StoreObserver for RecordingObserver {
    fn on_event(&self, event: &StoreEvent) {
        self.events
            .write()
            .expect("RecordingObserver: events write lock poisoned")
            .push(event.clone());
    }

    fn name(&self) -> &'static str {
        "RecordingObserver"
    }
}
