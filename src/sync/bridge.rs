use crate::models::Joke;
use std::sync::{Arc, Mutex, PoisonError};

/// What changed in the saved collection.
///
/// Receivers may use the delta, but the contract is only "re-derive from the
/// store": a full re-read always converges on the last successful write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ChangeEvent {
    Added(Joke),
    Removed(String),
}

type Subscriber = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// One-directional, fire-and-forget fan-out of collection changes.
#[derive(Clone, Default)]
pub(crate) struct ChangeBridge {
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
}

impl ChangeBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, f: impl Fn(&ChangeEvent) + Send + Sync + 'static) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(f));
    }

    /// Subscribers run in registration order, outside the lock.
    pub fn notify(&self, event: &ChangeEvent) {
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        log::debug!("saved jokes changed: {event:?} ({} listeners)", subscribers.len());
        for s in subscribers {
            s(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_without_subscribers_is_fine() {
        ChangeBridge::new().notify(&ChangeEvent::Removed("a1".to_string()));
    }

    #[test]
    fn every_subscriber_sees_every_event_in_order() {
        let bridge = ChangeBridge::new();
        let log: Arc<Mutex<Vec<String>>> = Arc::default();

        for name in ["badge", "home"] {
            let log = Arc::clone(&log);
            bridge.subscribe(move |ev| {
                let what = match ev {
                    ChangeEvent::Added(j) => format!("+{}", j.id),
                    ChangeEvent::Removed(id) => format!("-{id}"),
                };
                log.lock().unwrap().push(format!("{name}{what}"));
            });
        }

        bridge.notify(&ChangeEvent::Added(Joke::new("a1", "X")));
        bridge.notify(&ChangeEvent::Removed("a1".to_string()));

        assert_eq!(
            *log.lock().unwrap(),
            ["badge+a1", "home+a1", "badge-a1", "home-a1"]
        );
    }

    #[test]
    fn subscriber_may_subscribe_during_notify() {
        let bridge = ChangeBridge::new();
        let inner = bridge.clone();
        bridge.subscribe(move |_| inner.subscribe(|_| {}));

        bridge.notify(&ChangeEvent::Removed("a1".to_string()));
        assert_eq!(bridge.subscribers.lock().unwrap().len(), 2);
    }

    #[test]
    fn clones_share_subscribers() {
        let bridge = ChangeBridge::new();
        let hits = Arc::new(Mutex::new(0));
        let h = Arc::clone(&hits);
        bridge.clone().subscribe(move |_| *h.lock().unwrap() += 1);

        bridge.notify(&ChangeEvent::Added(Joke::new("a1", "X")));
        assert_eq!(*hits.lock().unwrap(), 1);
    }
}
