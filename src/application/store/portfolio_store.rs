//! PortfolioStore - aggregated, per-section-tracked content cache.
//!
//! Loads every section concurrently from its [`SectionSource`], merges
//! successful results into one [`AggregatedSnapshot`], keeps per-section
//! loading/error state and notifies subscribers as sections settle.
//!
//! ## Generations
//!
//! Every fetch the store issues is tagged with a fresh [`Generation`] that
//! becomes the section's pending generation. A settle is applied only if
//! its generation is still pending, so forced reloads, single-section
//! refreshes and navigation clears all supersede older fetches without
//! having to cancel them.
//!
//! A load resolves only once no section it covers is still loading. If a
//! forced reload replaces it, its callers are handed over to the newer load;
//! if a single-section refresh supersedes one of its fetches, it waits for
//! that refresh to settle.
//!
//! ## Runtime
//!
//! Loads are spawned onto the ambient tokio runtime and keep running even
//! if the caller stops waiting for them.

use futures::future::{BoxFuture, FutureExt, Shared};
use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::registry::{ObserverRegistry, Subscription};
use crate::domain::content::{
    AggregatedSnapshot, Section, SectionLoadFailure, SectionPayload, SectionState, StatusView,
    StoreEvent, Topic,
};
use crate::domain::foundation::{Generation, SubscriptionId, Timestamp};
use crate::ports::{SectionSources, SourceError, StoreObserver};

type SharedLoad = Shared<BoxFuture<'static, AggregatedSnapshot>>;

#[derive(Default)]
struct Slot {
    state: SectionState,
    pending: Option<Generation>,
}

struct InFlightLoad {
    generation: Generation,
    result: SharedLoad,
}

struct StoreState {
    snapshot: AggregatedSnapshot,
    slots: [Slot; Section::COUNT],
    last_generation: Generation,
    in_flight: Option<InFlightLoad>,
    /// A full load finished since construction or the last navigation clear.
    loaded: bool,
}

impl StoreState {
    fn new() -> Self {
        Self {
            snapshot: AggregatedSnapshot::empty(),
            slots: Default::default(),
            last_generation: Generation::ZERO,
            in_flight: None,
            loaded: false,
        }
    }

    fn next_generation(&mut self) -> Generation {
        self.last_generation = self.last_generation.next();
        self.last_generation
    }

    /// Marks `section` loading under a fresh generation.
    fn begin(&mut self, section: Section) -> Generation {
        let generation = self.next_generation();
        let slot = &mut self.slots[section.index()];
        slot.pending = Some(generation);
        slot.state.begin();
        generation
    }

    fn any_error(&self) -> bool {
        self.failed_count() > 0
    }

    fn failed_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.state.error.is_some())
            .count()
    }

    fn status_view(&self) -> StatusView {
        StatusView::from_states(
            Section::all()
                .iter()
                .map(|section| (*section, &self.slots[section.index()].state)),
        )
    }
}

/// Where a load stands once its own fetches have returned.
enum Settle {
    /// A section is still waiting on a newer fetch.
    Pending,
    /// A forced reload replaced this load.
    Superseded(SharedLoad),
    /// `failed` is `None` when the load is no longer the current one.
    Done {
        snapshot: AggregatedSnapshot,
        failed: Option<usize>,
    },
}

struct Inner {
    sources: SectionSources,
    state: Mutex<StoreState>,
    observers: Arc<ObserverRegistry>,
    /// Bumped whenever a settle is applied, a clear happens or a load starts.
    progress: watch::Sender<u64>,
}

impl Inner {
    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        // State is only mutated in short non-panicking sections, so a
        // poisoned lock still guards consistent data.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, event: StoreEvent) {
        for observer in self.observers.interested_in(&event) {
            let delivered =
                std::panic::catch_unwind(AssertUnwindSafe(|| observer.on_event(&event)));
            if delivered.is_err() {
                warn!(observer = observer.name(), ?event, "Observer panicked");
            }
        }
    }

    fn bump_progress(&self) {
        self.progress.send_modify(|tick| *tick = tick.wrapping_add(1));
    }

    /// Fetches one section and applies the result if `generation` is still
    /// the section's pending generation.
    async fn fetch_and_apply(
        &self,
        section: Section,
        generation: Generation,
    ) -> Result<SectionPayload, SectionLoadFailure> {
        let source = self.sources.source_for(section);
        debug!(section = %section, source = source.name(), %generation, "Fetching section");

        let fetched = AssertUnwindSafe(source.fetch(section))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| Err(SourceError::Other("source panicked".to_string())));

        let result = match fetched {
            Ok(payload) if payload.section() == section => Ok(payload),
            Ok(payload) => Err(SectionLoadFailure::new(
                section,
                format!("source returned {} content", payload.section()),
            )),
            Err(err) => Err(SectionLoadFailure::new(section, err.to_string())),
        };

        let event = {
            let mut guard = self.lock_state();
            let state = &mut *guard;
            let slot = &mut state.slots[section.index()];
            if slot.pending != Some(generation) {
                None
            } else {
                slot.pending = None;
                match &result {
                    Ok(payload) => {
                        slot.state.succeed(Timestamp::now());
                        state.snapshot = state.snapshot.with_payload(payload.clone());
                        Some(StoreEvent::SectionLoaded { section })
                    }
                    Err(failure) => {
                        slot.state.fail(failure.message.clone());
                        Some(StoreEvent::SectionFailed {
                            section,
                            message: failure.message.clone(),
                        })
                    }
                }
            }
        };

        match event {
            Some(event) => {
                if let Err(failure) = &result {
                    warn!(section = %section, %generation, "{}", failure);
                }
                self.notify(event);
                // After the notification, so a load never reports AllSettled
                // ahead of its last section event.
                self.bump_progress();
            }
            None => debug!(section = %section, %generation, "Discarding superseded result"),
        }

        result
    }

    /// Runs one full load as a task group and returns the snapshot once
    /// every section has settled.
    async fn run_load(
        self: Arc<Self>,
        generation: Generation,
        tickets: Vec<(Section, Generation)>,
    ) -> AggregatedSnapshot {
        // A clear or newer fetch may have landed before the load was first polled.
        let live: Vec<_> = {
            let state = self.lock_state();
            tickets
                .into_iter()
                .filter(|(section, ticket)| state.slots[section.index()].pending == Some(*ticket))
                .collect()
        };

        let mut tasks = JoinSet::new();
        for (section, ticket) in live {
            self.notify(StoreEvent::SectionLoading { section });
            let inner = Arc::clone(&self);
            tasks.spawn(async move { inner.fetch_and_apply(section, ticket).await });
        }
        while let Some(joined) = tasks.join_next().await {
            if let Err(err) = joined {
                warn!(%generation, "Section task did not complete: {}", err);
            }
        }

        loop {
            // Subscribe before inspecting state so no bump is missed.
            let mut progress = self.progress.subscribe();
            match self.settle(generation) {
                Settle::Pending => {
                    // The sender lives as long as `self`.
                    let _ = progress.changed().await;
                }
                Settle::Superseded(newer) => {
                    debug!(%generation, "Load superseded, joining newer load");
                    return newer.await;
                }
                Settle::Done { snapshot, failed } => {
                    match failed {
                        Some(failed) => {
                            info!(%generation, failed, "Content load settled");
                            self.notify(StoreEvent::AllSettled { failed });
                        }
                        None => debug!(%generation, "Load no longer current, skipping AllSettled"),
                    }
                    return snapshot;
                }
            }
        }
    }

    fn settle(&self, generation: Generation) -> Settle {
        let mut state = self.lock_state();
        if let Some(newer) = state
            .in_flight
            .as_ref()
            .filter(|load| load.generation != generation)
        {
            return Settle::Superseded(newer.result.clone());
        }
        if state.in_flight.is_none() {
            return Settle::Done {
                snapshot: state.snapshot.clone(),
                failed: None,
            };
        }
        if state.slots.iter().any(|slot| slot.pending.is_some()) {
            return Settle::Pending;
        }

        state.in_flight = None;
        state.loaded = true;
        Settle::Done {
            snapshot: state.snapshot.clone(),
            failed: Some(state.failed_count()),
        }
    }
}

enum Plan {
    Cached(AggregatedSnapshot),
    Attach(SharedLoad),
    Start(SharedLoad),
}

/// The single source of truth for portfolio content.
///
/// Cheap to clone; clones share state. Construct one per application
/// session at the composition root and hand clones to consumers.
///
/// # Example
///
/// ```ignore
/// let store = PortfolioStore::new(SectionSources::new(Arc::new(JsonFileSource::new("content"))));
/// let _sub = store.subscribe(Topic::Status, Arc::new(TracingObserver));
///
/// let snapshot = store.load_all(false).await;
/// if store.has_any_error() {
///     // render stale content plus per-section retry buttons
/// }
/// ```
#[derive(Clone)]
pub struct PortfolioStore {
    inner: Arc<Inner>,
}

impl PortfolioStore {
    /// Creates a store with nothing loaded.
    pub fn new(sources: SectionSources) -> Self {
        Self {
            inner: Arc::new(Inner {
                sources,
                state: Mutex::new(StoreState::new()),
                observers: Arc::new(ObserverRegistry::default()),
                progress: watch::channel(0).0,
            }),
        }
    }

    // === Loading ===

    /// Loads every section and resolves once all of them have settled.
    ///
    /// Without `force_refresh`, a complete error-free snapshot is served
    /// from cache, and a load already in flight is joined rather than
    /// duplicated. With `force_refresh`, every section is fetched again
    /// and results of older fetches are discarded.
    ///
    /// Never fails: section failures are recorded in the error states and
    /// leave the section's previous payload in place.
    pub async fn load_all(&self, force_refresh: bool) -> AggregatedSnapshot {
        let plan = {
            let mut state = self.inner.lock_state();
            let outstanding = match (force_refresh, state.in_flight.as_ref()) {
                (false, Some(load)) => Some(load.result.clone()),
                _ => None,
            };
            if let Some(load) = outstanding {
                Plan::Attach(load)
            } else if !force_refresh && state.loaded && !state.any_error() {
                Plan::Cached(state.snapshot.clone())
            } else {
                let generation = state.next_generation();
                let tickets: Vec<_> = Section::all()
                    .iter()
                    .map(|section| (*section, state.begin(*section)))
                    .collect();
                let load = Arc::clone(&self.inner)
                    .run_load(generation, tickets)
                    .boxed()
                    .shared();
                state.in_flight = Some(InFlightLoad {
                    generation,
                    result: load.clone(),
                });
                debug!(%generation, force_refresh, "Starting content load");
                Plan::Start(load)
            }
        };

        match plan {
            Plan::Cached(snapshot) => {
                debug!("Serving cached snapshot");
                snapshot
            }
            Plan::Attach(load) => {
                debug!("Joining in-flight content load");
                load.await
            }
            Plan::Start(load) => {
                // Loading events are emitted by the load itself, ahead of its
                // fetches, whichever task polls it first.
                tokio::spawn(load.clone());
                // Hand waiters of a load this one superseded over to it.
                self.inner.bump_progress();
                load.await
            }
        }
    }

    /// Re-fetches exactly one section.
    ///
    /// Other sections' payloads and states are never touched. The fetched
    /// result is returned even when a later clear or reload superseded it
    /// before it settled; in that case the store does not apply it.
    pub async fn refresh_section(
        &self,
        section: Section,
    ) -> Result<SectionPayload, SectionLoadFailure> {
        let generation = self.inner.lock_state().begin(section);
        self.inner.notify(StoreEvent::SectionLoading { section });

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move { inner.fetch_and_apply(section, generation).await });

        match task.await {
            Ok(result) => result,
            Err(err) => Err(SectionLoadFailure::new(
                section,
                format!("refresh did not complete: {}", err),
            )),
        }
    }

    /// Resets content and errors to defaults without fetching anything.
    ///
    /// Outstanding fetches are superseded: their results are discarded when
    /// they arrive. Callers that need content again must call
    /// [`load_all`](Self::load_all).
    pub fn clear_for_navigation(&self) {
        {
            let mut state = self.inner.lock_state();
            state.snapshot = AggregatedSnapshot::empty();
            for slot in state.slots.iter_mut() {
                slot.state.reset();
                slot.pending = None;
            }
            state.in_flight = None;
            state.loaded = false;
        }
        debug!("Cleared content for navigation");
        self.inner.notify(StoreEvent::Cleared);
        self.inner.bump_progress();
    }

    // === Accessors ===

    /// Current best-known content; defaults for never-loaded sections.
    pub fn snapshot(&self) -> AggregatedSnapshot {
        self.inner.lock_state().snapshot.clone()
    }

    pub fn section_state(&self, section: Section) -> SectionState {
        self.inner.lock_state().slots[section.index()].state.clone()
    }

    /// Loading flag of every section.
    pub fn loading_states(&self) -> BTreeMap<Section, bool> {
        self.status_view().loading
    }

    /// Error message of every section (`None` when healthy).
    pub fn error_states(&self) -> BTreeMap<Section, Option<String>> {
        self.status_view().errors
    }

    /// Loading and error maps taken under one lock.
    pub fn status_view(&self) -> StatusView {
        self.inner.lock_state().status_view()
    }

    pub fn is_any_loading(&self) -> bool {
        self.inner
            .lock_state()
            .slots
            .iter()
            .any(|slot| slot.state.loading)
    }

    pub fn has_any_error(&self) -> bool {
        self.inner.lock_state().any_error()
    }

    /// True while a full load is outstanding.
    pub fn is_load_in_flight(&self) -> bool {
        self.inner.lock_state().in_flight.is_some()
    }

    // === Subscriptions ===

    /// Registers `observer` for events relevant to `topic`.
    pub fn subscribe(&self, topic: Topic, observer: Arc<dyn StoreObserver>) -> Subscription {
        let id = self.inner.observers.add(topic, observer);
        Subscription::new(id, &self.inner.observers)
    }

    /// Removes a registration. Idempotent: returns false if it was already
    /// removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.observers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.observers.len()
    }
}

impl std::fmt::Debug for PortfolioStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioStore")
            .field("sources", &self.inner.sources)
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}
