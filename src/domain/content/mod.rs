//! Content module - portfolio sections and the values the store manages.
//!
//! - `Section` - the fixed set of independently-fetchable content categories
//! - `SectionPayload` - typed content of one section
//! - `SectionState` / `StatusView` - per-section and aggregate load state
//! - `AggregatedSnapshot` - immutable composite of all sections
//! - `StoreEvent` / `Topic` - change notifications and subscription topics

mod events;
mod failure;
mod payload;
mod section;
mod section_state;
mod snapshot;

pub use events::{StoreEvent, Topic};
pub use failure::SectionLoadFailure;
pub use payload::{
    Certificate, ContactInfo, Education, PersonalInfo, Project, SectionPayload, Skill,
    SkillCategory, SocialLink, Technology, TimelineEntry, VolunteerRole,
};
pub use section::Section;
pub use section_state::{SectionState, SectionStatus, StatusView};
pub use snapshot::AggregatedSnapshot;
