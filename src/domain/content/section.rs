//! Section enum naming the independently-fetchable content categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode};

/// The nine portfolio content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Personal,
    Projects,
    Education,
    Skills,
    Technologies,
    Timeline,
    Volunteer,
    Contact,
    Certificates,
}

impl Section {
    /// Number of sections.
    pub const COUNT: usize = 9;

    /// Returns all sections in canonical order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Personal,
            Section::Projects,
            Section::Education,
            Section::Skills,
            Section::Technologies,
            Section::Timeline,
            Section::Volunteer,
            Section::Contact,
            Section::Certificates,
        ]
    }

    /// Returns the 0-based slot of this section in the canonical order.
    pub fn index(&self) -> usize {
        match self {
            Section::Personal => 0,
            Section::Projects => 1,
            Section::Education => 2,
            Section::Skills => 3,
            Section::Technologies => 4,
            Section::Timeline => 5,
            Section::Volunteer => 6,
            Section::Contact => 7,
            Section::Certificates => 8,
        }
    }

    /// Returns the lowercase key used in file names and URLs.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Personal => "personal",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Technologies => "technologies",
            Section::Timeline => "timeline",
            Section::Volunteer => "volunteer",
            Section::Contact => "contact",
            Section::Certificates => "certificates",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Personal => "About Me",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Technologies => "Technologies",
            Section::Timeline => "Timeline",
            Section::Volunteer => "Volunteer Work",
            Section::Contact => "Contact",
            Section::Certificates => "Certificates",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Section::all()
            .iter()
            .copied()
            .find(|section| section.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::new(ErrorCode::UnknownSection, format!("Unknown section '{}'", s))
                    .with_detail("key", s)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_nine_sections() {
        assert_eq!(Section::all().len(), Section::COUNT);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (position, section) in Section::all().iter().enumerate() {
            assert_eq!(section.index(), position, "{:?}", section);
        }
    }

    #[test]
    fn key_roundtrips_through_from_str() {
        for section in Section::all() {
            assert_eq!(section.key().parse::<Section>().unwrap(), *section);
        }
    }

    #[test]
    fn from_str_ignores_case_and_padding() {
        assert_eq!(" Projects ".parse::<Section>().unwrap(), Section::Projects);
    }

    #[test]
    fn from_str_rejects_unknown_key() {
        let err = "blog".parse::<Section>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownSection);
        assert_eq!(err.details.get("key"), Some(&"blog".to_string()));
    }

    #[test]
    fn serializes_as_snake_case_key() {
        assert_eq!(serde_json::to_string(&Section::Certificates).unwrap(), "\"certificates\"");
        let parsed: Section = serde_json::from_str("\"timeline\"").unwrap();
        assert_eq!(parsed, Section::Timeline);
    }

    #[test]
    fn display_uses_key() {
        assert_eq!(Section::Volunteer.to_string(), "volunteer");
        assert_eq!(Section::Volunteer.display_name(), "Volunteer Work");
    }
}
