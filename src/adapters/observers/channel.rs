//! Observer that forwards events into a tokio channel.
//!
//! Lets async consumers `recv().await` store changes instead of
//! implementing [`StoreObserver`] themselves.

use tokio::sync::mpsc;

use crate::domain::content::StoreEvent;
use crate::ports::StoreObserver;

/// Forwards every received event to an unbounded mpsc channel.
///
/// Events are silently dropped once the receiver is gone; unsubscribe the
/// observer when the consumer goes away.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: mpsc::UnboundedSender<StoreEvent>,
}

impl ChannelObserver {
    /// Creates the observer and the receiving end of its channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StoreEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// True once the receiver has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl StoreObserver for ChannelObserver {
    fn on_event(&self, event: &StoreEvent) {
        let _ = self.sender.send(event.clone());
    }

    fn name(&self) -> &'static str {
        "ChannelObserver"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::Section;

    #[tokio::test]
    async fn forwards_events_in_order() {
        let (observer, mut rx) = ChannelObserver::new();
        observer.on_event(&StoreEvent::SectionLoading { section: Section::Projects });
        observer.on_event(&StoreEvent::SectionLoaded { section: Section::Projects });

        assert_eq!(
            rx.recv().await,
            Some(StoreEvent::SectionLoading { section: Section::Projects })
        );
        assert_eq!(
            rx.recv().await,
            Some(StoreEvent::SectionLoaded { section: Section::Projects })
        );
    }

    #[test]
    fn closed_receiver_does_not_panic() {
        let (observer, rx) = ChannelObserver::new();
        drop(rx);
        assert!(observer.is_closed());
        observer.on_event(&StoreEvent::Cleared);
    }
}
