//! Change notifications emitted by the content store.

use serde::Serialize;

use super::Section;

/// What a subscriber registers interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "topic", content = "section")]
pub enum Topic {
    /// Changes to the composite snapshot.
    Snapshot,
    /// Changes to the aggregate loading/error view.
    Status,
    /// Anything concerning one section.
    Section(Section),
}

/// A state change inside the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum StoreEvent {
    /// A fetch for the section was issued.
    SectionLoading { section: Section },
    /// The section's fetch succeeded and its snapshot slot was replaced.
    SectionLoaded { section: Section },
    /// The section's fetch failed; its previous payload is kept.
    SectionFailed { section: Section, message: String },
    /// Snapshot and errors were reset for navigation.
    Cleared,
    /// Every section of a full load has settled.
    AllSettled { failed: usize },
}

impl StoreEvent {
    /// The section this event concerns, if it concerns exactly one.
    pub fn section(&self) -> Option<Section> {
        match self {
            StoreEvent::SectionLoading { section }
            | StoreEvent::SectionLoaded { section }
            | StoreEvent::SectionFailed { section, .. } => Some(*section),
            StoreEvent::Cleared | StoreEvent::AllSettled { .. } => None,
        }
    }

    /// Whether a subscriber on `topic` should receive this event.
    pub fn is_relevant_to(&self, topic: &Topic) -> bool {
        match topic {
            Topic::Status => true,
            Topic::Snapshot => matches!(
                self,
                StoreEvent::SectionLoaded { .. } | StoreEvent::Cleared | StoreEvent::AllSettled { .. }
            ),
            Topic::Section(wanted) => match self.section() {
                Some(section) => section == *wanted,
                None => matches!(self, StoreEvent::Cleared),
            },
        }
    }
}
