//! Section source adapters.
//!
//! - `JsonFileSource` - one JSON document per section in a directory
//! - `HttpSource` - one JSON document per section under a base URL
//! - `InMemorySource` - scripted responses for tests

mod http;
mod in_memory;
mod json_file;

pub use http::{HttpSource, HttpSourceConfig};
pub use in_memory::InMemorySource;
pub use json_file::JsonFileSource;
