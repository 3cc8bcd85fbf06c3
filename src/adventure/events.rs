//! Player change notifications.
//!
//! Front ends subscribe through [`EventBus::subscribe`] and receive tagged
//! [`PlayerEvent`] messages on a tokio unbounded channel. Sending never blocks,
//! so the synchronous game core can publish from inside a handler.

use log::trace;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Carries the new room name.
    LocationChanged(String),
    ScoreChanged(i32),
    MovesChanged(u32),
    QuitChanged(bool),
}

#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<mpsc::UnboundedSender<PlayerEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<PlayerEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver `event` to every live subscriber, dropping closed ones.
    pub fn publish(&mut self, event: PlayerEvent) {
        trace!("publish {:?} to {} subscriber(s)", event, self.subscribers.len());
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fans_out_to_all_subscribers() {
        let mut bus = EventBus::new();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();
        bus.publish(PlayerEvent::ScoreChanged(5));
        assert_eq!(a.try_recv().unwrap(), PlayerEvent::ScoreChanged(5));
        assert_eq!(b.try_recv().unwrap(), PlayerEvent::ScoreChanged(5));
    }

    #[test]
    fn closed_subscribers_are_pruned() {
        let mut bus = EventBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());
        bus.publish(PlayerEvent::MovesChanged(1));
        assert_eq!(bus.subscriber_count(), 1);
        drop(kept);
        bus.publish(PlayerEvent::MovesChanged(2));
        assert_eq!(bus.subscriber_count(), 0);
    }
}
