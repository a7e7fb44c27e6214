//! Observer registry and subscription handles.

use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::domain::content::{StoreEvent, Topic};
use crate::domain::foundation::SubscriptionId;
use crate::ports::StoreObserver;

struct Registration {
    id: SubscriptionId,
    topic: Topic,
    observer: Arc<dyn StoreObserver>,
}

/// Set of observers keyed by subscription id.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    entries: RwLock<Vec<Registration>>,
}

impl ObserverRegistry {
    pub(crate) fn add(&self, topic: Topic, observer: Arc<dyn StoreObserver>) -> SubscriptionId {
        let id = SubscriptionId::new();
        tracing::debug!(%id, observer = observer.name(), ?topic, "Observer subscribed");
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Registration { id, topic, observer });
        id
    }

    /// Removes a registration. Returns false if it was already gone.
    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|r| r.id != id);
        before != entries.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Observers whose topic wants `event`.
    ///
    /// Returned as owned handles so the lock is released before any
    /// observer runs.
    pub(crate) fn interested_in(&self, event: &StoreEvent) -> Vec<Arc<dyn StoreObserver>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| event.is_relevant_to(&r.topic))
            .map(|r| Arc::clone(&r.observer))
            .collect()
    }
}

/// Handle to one observer registration.
///
/// Dropping the handle unsubscribes the observer. Call
/// [`detach`](Subscription::detach) to keep the registration for the
/// lifetime of the store instead.
#[must_use = "dropping a Subscription immediately unsubscribes the observer"]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<ObserverRegistry>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, registry: &Arc<ObserverRegistry>) -> Self {
        Self {
            id,
            registry: Arc::downgrade(registry),
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Unsubscribes now. Returns false if the registration was already
    /// removed (for example through `PortfolioStore::unsubscribe`).
    pub fn unsubscribe(mut self) -> bool {
        self.release()
    }

    /// Keeps the observer registered after this handle is dropped.
    pub fn detach(mut self) -> SubscriptionId {
        self.registry = Weak::new();
        self.id
    }

    fn release(&mut self) -> bool {
        let registry = std::mem::take(&mut self.registry);
        registry.upgrade().map(|r| r.remove(self.id)).unwrap_or(false)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingObserver;
    use crate::domain::content::Section;

    #[test]
    fn remove_is_idempotent() {
        let registry = ObserverRegistry::default();
        let id = registry.add(Topic::Status, Arc::new(RecordingObserver::new()));

        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn interested_in_filters_by_topic() {
        let registry = ObserverRegistry::default();
        registry.add(Topic::Snapshot, Arc::new(RecordingObserver::new()));
        registry.add(Topic::Section(Section::Skills), Arc::new(RecordingObserver::new()));
        registry.add(Topic::Status, Arc::new(RecordingObserver::new()));

        let loading = StoreEvent::SectionLoading { section: Section::Skills };
        assert_eq!(registry.interested_in(&loading).len(), 2);

        let other = StoreEvent::SectionLoaded { section: Section::Projects };
        assert_eq!(registry.interested_in(&other).len(), 2);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let registry = Arc::new(ObserverRegistry::default());
        let id = registry.add(Topic::Status, Arc::new(RecordingObserver::new()));
        let subscription = Subscription::new(id, &registry);

        drop(subscription);
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn detached_subscription_stays_registered() {
        let registry = Arc::new(ObserverRegistry::default());
        let id = registry.add(Topic::Status, Arc::new(RecordingObserver::new()));

        let detached = Subscription::new(id, &registry).detach();
        assert_eq!(detached, id);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn explicit_unsubscribe_after_removal_reports_false() {
        let registry = Arc::new(ObserverRegistry::default());
        let id = registry.add(Topic::Status, Arc::new(RecordingObserver::new()));
        let subscription = Subscription::new(id, &registry);

        assert!(registry.remove(id));
        assert!(!subscription.unsubscribe());
    }

    #[test]
    fn subscription_outliving_registry_is_harmless() {
        let registry = Arc::new(ObserverRegistry::default());
        let id = registry.add(Topic::Status, Arc::new(RecordingObserver::new()));
        let subscription = Subscription::new(id, &registry);

        drop(registry);
        assert!(!subscription.unsubscribe());
    }
}
