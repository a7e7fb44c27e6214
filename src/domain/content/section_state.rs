//! Per-section load state and the aggregate status view built from it.

use serde::Serialize;
use std::collections::BTreeMap;

use super::Section;
use crate::domain::foundation::{StateMachine, Timestamp};

/// Lifecycle of a single section's content.
///
/// ```text
/// Idle ──▶ Loading ──▶ Ready
///   ▲        │  ▲        │
///   │        ▼  └────────┤
///   └───── Failed ◀──────┘ (via Loading)
/// ```
///
/// Every state may return to `Idle` on a navigation reset, and a forced
/// reload may restart `Loading` while a fetch is still outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl StateMachine for SectionStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use SectionStatus::*;
        match self {
            Idle => vec![Loading, Idle],
            Loading => vec![Loading, Ready, Failed, Idle],
            Ready => vec![Loading, Idle],
            Failed => vec![Loading, Idle],
        }
    }
}

/// Load state of one section.
///
/// `loading` and `error` are never both set: starting a fetch clears the
/// error, and settling clears the loading flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionState {
    pub loading: bool,
    pub error: Option<String>,
    pub last_loaded_at: Option<Timestamp>,
}

impl SectionState {
    /// Derived lifecycle status.
    pub fn status(&self) -> SectionStatus {
        if self.loading {
            SectionStatus::Loading
        } else if self.error.is_some() {
            SectionStatus::Failed
        } else if self.last_loaded_at.is_some() {
            SectionStatus::Ready
        } else {
            SectionStatus::Idle
        }
    }

    pub(crate) fn begin(&mut self) {
        debug_assert!(self.status().can_transition_to(&SectionStatus::Loading));
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self, at: Timestamp) {
        debug_assert!(self.status().can_transition_to(&SectionStatus::Ready));
        self.loading = false;
        self.error = None;
        self.last_loaded_at = Some(at);
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        debug_assert!(self.status().can_transition_to(&SectionStatus::Failed));
        self.loading = false;
        self.error = Some(message.into());
    }

    pub(crate) fn reset(&mut self) {
        *self = SectionState::default();
    }
}

/// Aggregate loading/error view across every section.
///
/// Both maps always hold an entry for every section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub loading: BTreeMap<Section, bool>,
    pub errors: BTreeMap<Section, Option<String>>,
    pub any_loading: bool,
    pub any_error: bool,
}

impl StatusView {
    /// Builds the view from per-section states in canonical order.
    pub fn from_states<'a>(states: impl IntoIterator<Item = (Section, &'a SectionState)>) -> Self {
        let mut loading = BTreeMap::new();
        let mut errors = BTreeMap::new();
        for (section, state) in states {
            loading.insert(section, state.loading);
            errors.insert(section, state.error.clone());
        }
        let any_loading = loading.values().any(|flag| *flag);
        let any_error = errors.values().any(Option::is_some);
        Self {
            loading,
            errors,
            any_loading,
            any_error,
        }
    }

    /// Sections currently carrying an error, in canonical order.
    pub fn failed_sections(&self) -> Vec<Section> {
        self.errors
            .iter()
            .filter(|(_, error)| error.is_some())
            .map(|(section, _)| *section)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_idle() {
        let state = SectionState::default();
        assert_eq!(state.status(), SectionStatus::Idle);
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut state = SectionState::default();
        state.begin();
        state.fail("timeout");
        assert_eq!(state.status(), SectionStatus::Failed);

        state.begin();
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn succeed_records_timestamp_and_clears_loading() {
        let mut state = SectionState::default();
        state.begin();
        state.succeed(Timestamp::now());
        assert_eq!(state.status(), SectionStatus::Ready);
        assert!(!state.loading);
        assert!(state.last_loaded_at.is_some());
    }

    #[test]
    fn failure_keeps_last_loaded_at() {
        let mut state = SectionState::default();
        state.begin();
        state.succeed(Timestamp::now());
        let loaded_at = state.last_loaded_at;

        state.begin();
        state.fail("boom");
        assert_eq!(state.last_loaded_at, loaded_at);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.loading);
    }

    #[test]
    fn idle_cannot_jump_to_ready() {
        assert!(!SectionStatus::Idle.can_transition_to(&SectionStatus::Ready));
        assert!(!SectionStatus::Failed.can_transition_to(&SectionStatus::Ready));
        assert!(SectionStatus::Ready.can_transition_to(&SectionStatus::Loading));
    }

    #[test]
    fn status_view_derives_flags() {
        let idle = SectionState::default();
        let mut failed = SectionState::default();
        failed.begin();
        failed.fail("timeout");

        let view = StatusView::from_states(
            Section::all()
                .iter()
                .map(|s| (*s, if *s == Section::Skills { &failed } else { &idle })),
        );

        assert_eq!(view.loading.len(), Section::COUNT);
        assert_eq!(view.errors.len(), Section::COUNT);
        assert!(!view.any_loading);
        assert!(view.any_error);
        assert_eq!(view.failed_sections(), vec![Section::Skills]);
    }
}
