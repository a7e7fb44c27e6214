//! GetContentOverviewHandler - Query handler summarising every section.
//!
//! Returns one row per section with its load status, item count, error and
//! icon, in canonical order. Used for status pages and the CLI summary.

use serde::Serialize;

use crate::application::store::PortfolioStore;
use crate::domain::content::{Section, SectionStatus};
use crate::domain::foundation::Timestamp;
use crate::domain::icons::{resolve_icon, IconId};

/// Query for the content overview.
#[derive(Debug, Clone, Default)]
pub struct GetContentOverviewQuery {
    /// Load everything first (joining any in-flight load) before summarising.
    pub ensure_loaded: bool,
    /// Refetch every section even if a complete snapshot is cached.
    pub force_refresh: bool,
}

/// Summary of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionOverview {
    pub section: Section,
    pub title: &'static str,
    pub icon: IconId,
    pub status: SectionStatus,
    pub item_count: usize,
    pub error: Option<String>,
    pub last_loaded_at: Option<Timestamp>,
}

/// Summary of all sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentOverview {
    pub sections: Vec<SectionOverview>,
    pub any_loading: bool,
    pub any_error: bool,
}

impl ContentOverview {
    pub fn failed(&self) -> impl Iterator<Item = &SectionOverview> {
        self.sections.iter().filter(|s| s.status == SectionStatus::Failed)
    }
}

/// Handler for the content overview query.
pub struct GetContentOverviewHandler {
    store: PortfolioStore,
}

impl GetContentOverviewHandler {
    pub fn new(store: PortfolioStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetContentOverviewQuery) -> ContentOverview {
        let snapshot = if query.ensure_loaded || query.force_refresh {
            self.store.load_all(query.force_refresh).await
        } else {
            self.store.snapshot()
        };
        let status = self.store.status_view();

        let sections = Section::all()
            .iter()
            .map(|section| {
                let state = self.store.section_state(*section);
                SectionOverview {
                    section: *section,
                    title: section.display_name(),
                    icon: resolve_icon(section.key()),
                    status: state.status(),
                    item_count: snapshot.get(*section).item_count(),
                    error: state.error,
                    last_loaded_at: state.last_loaded_at,
                }
            })
            .collect();

        ContentOverview {
            sections,
            any_loading: status.any_loading,
            any_error: status.any_error,
        }
    }
}
