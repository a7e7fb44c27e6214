//! StoreObserver port - Interface for receiving content store changes.
//!
//! Observers register on a [`Topic`](crate::domain::content::Topic) and are
//! called synchronously after the store has released its internal lock.

use crate::domain::content::StoreEvent;

/// Receiver of store change notifications.
///
/// Implementations should be:
/// - **Quick** - the notifying task waits for every observer
/// - **Non-reentrant** - reading the store from inside `on_event` is fine,
///   but starting loads from it should be handed off to another task
///
/// # Example
///
/// ```ignore
/// struct ProjectsPanel { /* ... */ }
///
/// impl StoreObserver for ProjectsPanel {
///     fn on_event(&self, event: &StoreEvent) {
///         // re-render from store.snapshot()
///     }
///
///     fn name(&self) -> &'static str {
///         "ProjectsPanel"
///     }
/// }
/// ```
pub trait StoreObserver: Send + Sync {
    /// Handle one change.
    fn on_event(&self, event: &StoreEvent);

    /// Observer name for logging.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_observer_object_safe(_: &dyn StoreObserver) {}

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shipped_observers_are_send_sync() {
        assert_send_sync::<crate::adapters::RecordingObserver>();
        assert_send_sync::<crate::adapters::ChannelObserver>();
        assert_send_sync::<crate::adapters::TracingObserver>();
        assert_send_sync::<std::sync::Arc<dyn StoreObserver>>();
    }
}
