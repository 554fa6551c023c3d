//! In-process broadcast bus for change notifications.
//!
//! Controllers publish an [`AppEvent`] after each successful mutation; the `/events`
//! endpoint relays them to connected clients as server-sent events so list and
//! dashboard views know when to re-fetch.

use tokio::sync::broadcast;

use crate::model::{event::AppEvent, resource::Resource};

const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Sends an event to every current subscriber.
    ///
    /// Having no subscribers is normal and is not reported as an error.
    pub fn publish(&self, event: AppEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("No event subscribers connected");
        }
    }

    pub fn created(&self, resource: Resource, id: i32) {
        self.publish(AppEvent::Created { resource, id });
    }

    pub fn updated(&self, resource: Resource, id: i32) {
        self.publish(AppEvent::Updated { resource, id });
    }

    pub fn deleted(&self, resource: Resource, id: i32) {
        self.publish(AppEvent::Deleted { resource, id });
    }

    /// Announces a service request change and asks dependent views to reload.
    pub fn service_request_changed(&self, event: AppEvent) {
        self.publish(event);
        self.publish(AppEvent::Reload {
            resources: vec![
                Resource::ServiceRequests,
                Resource::Comments,
                Resource::Summaries,
                Resource::Reports,
            ],
        });
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.created(Resource::Priorities, 7);

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            AppEvent::Created {
                resource: Resource::Priorities,
                id: 7
            }
        );
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.deleted(Resource::Statuses, 1);
    }

    #[tokio::test]
    async fn service_request_change_is_followed_by_reload() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.service_request_changed(AppEvent::Deleted {
            resource: Resource::ServiceRequests,
            id: 3,
        });

        assert_eq!(rx.recv().await.unwrap().kind(), "deleted");
        match rx.recv().await.unwrap() {
            AppEvent::Reload { resources } => {
                assert!(resources.contains(&Resource::ServiceRequests));
                assert!(resources.contains(&Resource::Summaries));
            }
            other => panic!("expected reload, got {:?}", other),
        }
    }
}
