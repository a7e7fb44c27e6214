//! Domain layer containing the portfolio content model.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machines)
//! - `content` - Sections, typed payloads, load state and the aggregated snapshot
//! - `icons` - Pure icon and class-name lookups

pub mod content;
pub mod foundation;
pub mod icons;
