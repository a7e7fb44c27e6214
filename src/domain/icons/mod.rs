//! Icons module - pure name-based lookups used when rendering content.
//!
//! - `resolve_icon` - free-form key to [`IconId`], with a fallback
//! - `resolve_class` - free-form label to a stylesheet class name

mod class_name;
mod icon;

pub use class_name::{normalize_class_key, resolve_class};
pub use icon::{resolve_icon, IconId};
