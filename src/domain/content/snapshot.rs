//! Immutable composite of every section's best-known payload.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

use super::payload::{
    Certificate, ContactInfo, Education, PersonalInfo, Project, SectionPayload, SkillCategory,
    Technology, TimelineEntry, VolunteerRole,
};
use super::Section;

/// Composite view of all portfolio content.
///
/// Cloning is cheap (one reference-count bump per section). Replacing a
/// section produces a new snapshot and leaves existing clones untouched, so
/// a value handed to a consumer never changes underneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedSnapshot {
    slots: [Arc<SectionPayload>; Section::COUNT],
}

impl AggregatedSnapshot {
    /// Snapshot holding every section's default payload.
    pub fn empty() -> Self {
        let all = Section::all();
        Self {
            slots: std::array::from_fn(|i| Arc::new(SectionPayload::default_for(all[i]))),
        }
    }

    /// Returns the payload currently held for `section`.
    pub fn get(&self, section: Section) -> &SectionPayload {
        &self.slots[section.index()]
    }

    /// Returns a copy with the payload's section slot replaced.
    pub fn with_payload(&self, payload: SectionPayload) -> Self {
        let index = payload.section().index();
        let mut next = self.clone();
        next.slots[index] = Arc::new(payload);
        next
    }

    /// True when no section holds loaded content.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_empty())
    }

    pub fn personal(&self) -> &PersonalInfo {
        match self.get(Section::Personal) {
            SectionPayload::Personal(info) => info,
            _ => &EMPTY_PERSONAL,
        }
    }

    pub fn projects(&self) -> &[Project] {
        match self.get(Section::Projects) {
            SectionPayload::Projects(items) => items,
            _ => &[],
        }
    }

    /// Projects flagged as featured, in source order.
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects().iter().filter(|p| p.featured)
    }

    pub fn education(&self) -> &[Education] {
        match self.get(Section::Education) {
            SectionPayload::Education(items) => items,
            _ => &[],
        }
    }

    pub fn skills(&self) -> &[SkillCategory] {
        match self.get(Section::Skills) {
            SectionPayload::Skills(items) => items,
            _ => &[],
        }
    }

    pub fn technologies(&self) -> &[Technology] {
        match self.get(Section::Technologies) {
            SectionPayload::Technologies(items) => items,
            _ => &[],
        }
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        match self.get(Section::Timeline) {
            SectionPayload::Timeline(items) => items,
            _ => &[],
        }
    }

    pub fn volunteer(&self) -> &[VolunteerRole] {
        match self.get(Section::Volunteer) {
            SectionPayload::Volunteer(items) => items,
            _ => &[],
        }
    }

    pub fn contact(&self) -> &ContactInfo {
        match self.get(Section::Contact) {
            SectionPayload::Contact(info) => info,
            _ => &EMPTY_CONTACT,
        }
    }

    pub fn certificates(&self) -> &[Certificate] {
        match self.get(Section::Certificates) {
            SectionPayload::Certificates(items) => items,
            _ => &[],
        }
    }
}

// Slots are only ever written by `with_payload`, which indexes by the
// payload's own section, so the fallbacks below are never observed.
static EMPTY_PERSONAL: PersonalInfo = PersonalInfo {
    name: String::new(),
    title: String::new(),
    summary: String::new(),
    location: None,
    email: None,
    avatar_url: None,
    social_links: Vec::new(),
};

static EMPTY_CONTACT: ContactInfo = ContactInfo {
    email: None,
    phone: None,
    location: None,
    links: Vec::new(),
};

impl Default for AggregatedSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for AggregatedSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Section::COUNT))?;
        for section in Section::all() {
            let value = match self.get(*section) {
                SectionPayload::Personal(v) => serde_json::to_value(v),
                SectionPayload::Projects(v) => serde_json::to_value(v),
                SectionPayload::Education(v) => serde_json::to_value(v),
                SectionPayload::Skills(v) => serde_json::to_value(v),
                SectionPayload::Technologies(v) => serde_json::to_value(v),
                SectionPayload::Timeline(v) => serde_json::to_value(v),
                SectionPayload::Volunteer(v) => serde_json::to_value(v),
                SectionPayload::Contact(v) => serde_json::to_value(v),
                SectionPayload::Certificates(v) => serde_json::to_value(v),
            }
            .map_err(serde::ser::Error::custom)?;
            map.serialize_entry(section.key(), &value)?;
        }
        map.end()
    }
}
