//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the content store to external systems:
//! - `sources` - where section content comes from (files, HTTP, in-memory)
//! - `observers` - where store change notifications go

pub mod observers;
pub mod sources;

pub use observers::{ChannelObserver, RecordingObserver, TracingObserver};
pub use sources::{HttpSource, HttpSourceConfig, InMemorySource, JsonFileSource};
