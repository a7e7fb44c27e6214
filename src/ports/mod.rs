//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the content store and the outside world. Adapters implement these ports.
//!
//! - `SectionSource` - inbound: fetch one section's content
//! - `SectionSources` - routing of every section to exactly one source
//! - `StoreObserver` - outbound: receive store change notifications

mod section_source;
mod store_observer;

pub use section_source::{SectionSource, SectionSources, SourceError};
pub use store_observer::StoreObserver;
