use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{PeerId, SessionPhase};

/// Change notifications pushed to whoever renders session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    PhaseChanged(SessionPhase),
    StatusChanged(String),
    PeerJoined(PeerId),
    PeerLeft(PeerId),
    PeerActivity { peer_id: PeerId, active: bool },
    PeersCleared,
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::PhaseChanged(SessionPhase::Connecting));

        let event = rx.recv().await.unwrap();
        assert_eq!(event, Event::PhaseChanged(SessionPhase::Connecting));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::Shutdown);

        assert_eq!(rx1.recv().await.unwrap(), Event::Shutdown);
        assert_eq!(rx2.recv().await.unwrap(), Event::Shutdown);
    }

    #[tokio::test]
    async fn peer_events_arrive_in_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let peer = PeerId(7);

        bus.publish(Event::PeerJoined(peer));
        bus.publish(Event::PeerActivity {
            peer_id: peer,
            active: true,
        });
        bus.publish(Event::PeerLeft(peer));

        assert_eq!(rx.recv().await.unwrap(), Event::PeerJoined(peer));
        assert!(matches!(
            rx.recv().await.unwrap(),
            Event::PeerActivity { peer_id, active: true } if peer_id == peer
        ));
        assert_eq!(rx.recv().await.unwrap(), Event::PeerLeft(peer));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(Event::PeersCleared), 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        assert_eq!(bus.publish(Event::StatusChanged("joined".into())), 2);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let bus = EventBus::new(0);
        let _rx = bus.subscribe();
        assert_eq!(bus.publish(Event::Shutdown), 1);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event, Event::Unknown);
    }
}
