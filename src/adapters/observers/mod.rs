//! Store observer adapters.
//!
//! - `ChannelObserver` - forwards events into a tokio mpsc channel
//! - `RecordingObserver` - keeps events for assertions
//! - `TracingObserver` - logs events

mod channel;
mod recording;
mod tracing_observer;

pub use channel::ChannelObserver;
pub use recording::RecordingObserver;
pub use tracing_observer::TracingObserver;
