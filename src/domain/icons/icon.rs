//! Icon-name resolution.
//!
//! Content files name icons with free-form keys ("graduation-cap",
//! "linkedin", ...). `resolve_icon` maps such a key onto the closed set of
//! icons the site ships, falling back to a neutral glyph.

use serde::Serialize;
use std::fmt;

/// Symbolic identifiers for every icon the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    GraduationCap,
    Briefcase,
    Code,
    Github,
    Linkedin,
    Twitter,
    Email,
    Phone,
    MapPin,
    Globe,
    Award,
    Certificate,
    HeartHandshake,
    Calendar,
    User,
    Book,
    Database,
    Server,
    Cloud,
    Terminal,
    Download,
    /// Rendered when a key matches nothing.
    Fallback,
}

impl IconId {
    /// Every icon except `Fallback`, in table order.
    pub fn all() -> &'static [IconId] {
        &[
            IconId::GraduationCap,
            IconId::Briefcase,
            IconId::Code,
            IconId::Github,
            IconId::Linkedin,
            IconId::Twitter,
            IconId::Email,
            IconId::Phone,
            IconId::MapPin,
            IconId::Globe,
            IconId::Award,
            IconId::Certificate,
            IconId::HeartHandshake,
            IconId::Calendar,
            IconId::User,
            IconId::Book,
            IconId::Database,
            IconId::Server,
            IconId::Cloud,
            IconId::Terminal,
            IconId::Download,
        ]
    }

    /// Canonical key; `resolve_icon(id.name()) == id` for every non-fallback id.
    pub fn name(&self) -> &'static str {
        match self {
            IconId::GraduationCap => "graduation-cap",
            IconId::Briefcase => "briefcase",
            IconId::Code => "code",
            IconId::Github => "github",
            IconId::Linkedin => "linkedin",
            IconId::Twitter => "twitter",
            IconId::Email => "email",
            IconId::Phone => "phone",
            IconId::MapPin => "map-pin",
            IconId::Globe => "globe",
            IconId::Award => "award",
            IconId::Certificate => "certificate",
            IconId::HeartHandshake => "heart-handshake",
            IconId::Calendar => "calendar",
            IconId::User => "user",
            IconId::Book => "book",
            IconId::Database => "database",
            IconId::Server => "server",
            IconId::Cloud => "cloud",
            IconId::Terminal => "terminal",
            IconId::Download => "download",
            IconId::Fallback => "circle",
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maps a free-form key to an icon. Exact match only; anything else,
/// including the empty string, resolves to [`IconId::Fallback`].
pub fn resolve_icon(key: &str) -> IconId {
    match key {
        "graduation-cap" | "education" | "degree" => IconId::GraduationCap,
        "briefcase" | "work" | "experience" => IconId::Briefcase,
        "code" | "projects" => IconId::Code,
        "github" => IconId::Github,
        "linkedin" => IconId::Linkedin,
        "twitter" | "x" => IconId::Twitter,
        "email" | "mail" | "envelope" => IconId::Email,
        "phone" => IconId::Phone,
        "map-pin" | "location" => IconId::MapPin,
        "globe" | "website" => IconId::Globe,
        "award" | "trophy" => IconId::Award,
        "certificate" | "certificates" => IconId::Certificate,
        "heart-handshake" | "volunteer" => IconId::HeartHandshake,
        "calendar" | "timeline" => IconId::Calendar,
        "user" | "personal" | "about" => IconId::User,
        "book" | "blog" => IconId::Book,
        "database" => IconId::Database,
        "server" | "backend" => IconId::Server,
        "cloud" | "devops" => IconId::Cloud,
        "terminal" | "cli" => IconId::Terminal,
        "download" | "resume" | "cv" => IconId::Download,
        _ => IconId::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_key() {
        assert_eq!(resolve_icon("graduation-cap"), IconId::GraduationCap);
    }

    #[test]
    fn unknown_key_falls_back() {
        assert_eq!(resolve_icon("totally-unknown-xyz"), IconId::Fallback);
    }

    #[test]
    fn empty_key_falls_back() {
        assert_eq!(resolve_icon(""), IconId::Fallback);
    }

    #[test]
    fn match_is_exact() {
        assert_eq!(resolve_icon("GitHub"), IconId::Fallback);
        assert_eq!(resolve_icon(" github"), IconId::Fallback);
    }

    #[test]
    fn every_canonical_name_resolves_to_itself() {
        for icon in IconId::all() {
            assert_eq!(resolve_icon(icon.name()), *icon, "{}", icon.name());
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(resolve_icon("mail"), IconId::Email);
        assert_eq!(resolve_icon("volunteer"), IconId::HeartHandshake);
    }
}
