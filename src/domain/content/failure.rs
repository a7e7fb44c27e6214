//! The single store-level error kind: one section failed to load.

use thiserror::Error;

use super::Section;

/// A section fetch that settled with an error.
///
/// The message is already flattened to something a UI can show next to a
/// retry button; the underlying cause is not kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to load {section}: {message}")]
pub struct SectionLoadFailure {
    pub section: Section,
    pub message: String,
}

impl SectionLoadFailure {
    pub fn new(section: Section, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "unknown error".to_string()
        } else {
            message
        };
        Self { section, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_section_and_message() {
        let failure = SectionLoadFailure::new(Section::Projects, "timeout");
        assert_eq!(failure.to_string(), "Failed to load projects: timeout");
    }

    #[test]
    fn blank_message_is_replaced() {
        let failure = SectionLoadFailure::new(Section::Skills, "  ");
        assert_eq!(failure.message, "unknown error");
    }
}
