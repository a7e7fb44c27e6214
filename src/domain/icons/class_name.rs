//! Stylesheet class names derived from free-form labels.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Labels whose normalised form would be lossy or ambiguous.
static CLASS_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("c++", "cpp"),
        ("c#", "csharp"),
        ("f#", "fsharp"),
        (".net", "dotnet"),
        ("node.js", "nodejs"),
        ("vue.js", "vuejs"),
        ("next.js", "nextjs"),
    ])
});

/// Lowercases, turns whitespace and underscores into hyphens, drops
/// anything outside `[a-z0-9-]`, then collapses and trims hyphens.
pub fn normalize_class_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().flat_map(char::to_lowercase) {
        let mapped = if c.is_whitespace() || c == '_' { '-' } else { c };
        if !(mapped.is_ascii_lowercase() || mapped.is_ascii_digit() || mapped == '-') {
            continue;
        }
        if mapped == '-' && (out.is_empty() || out.ends_with('-')) {
            continue;
        }
        out.push(mapped);
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Class name for `raw` under `prefix`: an override when one is known,
/// otherwise `"<prefix>-<normalized>"`, or `"<prefix>-default"` when
/// nothing survives normalisation.
pub fn resolve_class(raw: &str, prefix: &str) -> String {
    let lookup = raw.trim().to_lowercase();
    if let Some(known) = CLASS_OVERRIDES.get(lookup.as_str()) {
        return format!("{}-{}", prefix, known);
    }
    match normalize_class_key(raw) {
        key if key.is_empty() => format!("{}-default", prefix),
        key => format!("{}-{}", prefix, key),
    }
}
