//! Typed content payloads, one shape per section.
//!
//! Every model tolerates missing fields (`#[serde(default)]`) and ignores
//! unknown ones, so content files can grow without breaking older builds.

use serde::{Deserialize, Serialize};

use super::Section;

/// Biography block shown on the landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub location: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub social_links: Vec<SocialLink>,
}

/// Link to an external profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    /// Free-form icon key, resolved with [`crate::domain::icons::resolve_icon`].
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub repository_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
}

/// Group of skills rendered under one heading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 0-100.
    pub level: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Technology {
    pub name: String,
    pub icon: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub date: String,
    pub title: String,
    pub description: Option<String>,
    /// e.g. "work", "education", "award".
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteerRole {
    pub organization: String,
    pub role: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub issued: Option<String>,
    pub credential_url: Option<String>,
}

/// The content of exactly one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", content = "data", rename_all = "snake_case")]
pub enum SectionPayload {
    Personal(PersonalInfo),
    Projects(Vec<Project>),
    Education(Vec<Education>),
    Skills(Vec<SkillCategory>),
    Technologies(Vec<Technology>),
    Timeline(Vec<TimelineEntry>),
    Volunteer(Vec<VolunteerRole>),
    Contact(ContactInfo),
    Certificates(Vec<Certificate>),
}

impl SectionPayload {
    /// The empty value a section holds before its first successful load.
    pub fn default_for(section: Section) -> Self {
        match section {
            Section::Personal => SectionPayload::Personal(PersonalInfo::default()),
            Section::Projects => SectionPayload::Projects(Vec::new()),
            Section::Education => SectionPayload::Education(Vec::new()),
            Section::Skills => SectionPayload::Skills(Vec::new()),
            Section::Technologies => SectionPayload::Technologies(Vec::new()),
            Section::Timeline => SectionPayload::Timeline(Vec::new()),
            Section::Volunteer => SectionPayload::Volunteer(Vec::new()),
            Section::Contact => SectionPayload::Contact(ContactInfo::default()),
            Section::Certificates => SectionPayload::Certificates(Vec::new()),
        }
    }

    /// Decodes a section's raw JSON document into its typed payload.
    pub fn from_json(section: Section, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let payload = match section {
            Section::Personal => SectionPayload::Personal(serde_json::from_slice(bytes)?),
            Section::Projects => SectionPayload::Projects(serde_json::from_slice(bytes)?),
            Section::Education => SectionPayload::Education(serde_json::from_slice(bytes)?),
            Section::Skills => SectionPayload::Skills(serde_json::from_slice(bytes)?),
            Section::Technologies => SectionPayload::Technologies(serde_json::from_slice(bytes)?),
            Section::Timeline => SectionPayload::Timeline(serde_json::from_slice(bytes)?),
            Section::Volunteer => SectionPayload::Volunteer(serde_json::from_slice(bytes)?),
            Section::Contact => SectionPayload::Contact(serde_json::from_slice(bytes)?),
            Section::Certificates => SectionPayload::Certificates(serde_json::from_slice(bytes)?),
        };
        Ok(payload)
    }

    /// The section this payload belongs to.
    pub fn section(&self) -> Section {
        match self {
            SectionPayload::Personal(_) => Section::Personal,
            SectionPayload::Projects(_) => Section::Projects,
            SectionPayload::Education(_) => Section::Education,
            SectionPayload::Skills(_) => Section::Skills,
            SectionPayload::Technologies(_) => Section::Technologies,
            SectionPayload::Timeline(_) => Section::Timeline,
            SectionPayload::Volunteer(_) => Section::Volunteer,
            SectionPayload::Contact(_) => Section::Contact,
            SectionPayload::Certificates(_) => Section::Certificates,
        }
    }

    /// Number of entries for list sections; 1 for non-empty single records.
    pub fn item_count(&self) -> usize {
        match self {
            SectionPayload::Personal(p) => usize::from(*p != PersonalInfo::default()),
            SectionPayload::Contact(c) => usize::from(*c != ContactInfo::default()),
            SectionPayload::Projects(v) => v.len(),
            SectionPayload::Education(v) => v.len(),
            SectionPayload::Skills(v) => v.len(),
            SectionPayload::Technologies(v) => v.len(),
            SectionPayload::Timeline(v) => v.len(),
            SectionPayload::Volunteer(v) => v.len(),
            SectionPayload::Certificates(v) => v.len(),
        }
    }

    /// True when this payload equals its section's default.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_for_matches_section() {
        for section in Section::all() {
            let payload = SectionPayload::default_for(*section);
            assert_eq!(payload.section(), *section);
            assert!(payload.is_empty());
        }
    }

    #[test]
    fn decodes_projects_with_missing_and_unknown_fields() {
        let json = br#"[
            {"id": "folio", "title": "Folio", "technologies": ["rust"], "stars": 12},
            {"title": "Untitled"}
        ]"#;

        let payload = SectionPayload::from_json(Section::Projects, json).unwrap();
        match payload {
            SectionPayload::Projects(projects) => {
                assert_eq!(projects.len(), 2);
                assert_eq!(projects[0].technologies, vec!["rust".to_string()]);
                assert!(!projects[0].featured);
                assert_eq!(projects[1].id, "");
            }
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn decodes_personal_record() {
        let json = br#"{"name": "Ada", "title": "Engineer", "social_links": [{"label": "GitHub", "url": "https://github.com/ada", "icon": "github"}]}"#;
        let payload = SectionPayload::from_json(Section::Personal, json).unwrap();
        assert_eq!(payload.item_count(), 1);
        if let SectionPayload::Personal(info) = payload {
            assert_eq!(info.name, "Ada");
            assert_eq!(info.social_links[0].icon.as_deref(), Some("github"));
        }
    }

    #[test]
    fn wrong_shape_is_a_decode_error() {
        let result = SectionPayload::from_json(Section::Projects, br#"{"id": "not-a-list"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_section_tag() {
        let payload = SectionPayload::Skills(vec![SkillCategory {
            category: "Languages".to_string(),
            skills: vec![Skill { name: "Rust".to_string(), level: Some(90) }],
        }]);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["section"], "skills");
        assert_eq!(json["data"][0]["skills"][0]["level"], 90);
    }
}
