//! Navigation

use mockall::automock;
use storefront_cart::checkout::Destination;
use tokio::sync::watch;
use tracing::info;

/// Router collaborator.
#[automock]
pub trait Navigator: Send + Sync {
    /// Moves to `destination`.
    fn navigate(&self, destination: Destination);
}

/// Navigator that records the latest destination.
#[derive(Debug)]
pub struct RouteNavigator {
    current: watch::Sender<Option<Destination>>,
}

impl RouteNavigator {
    /// Starts with no navigation.
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);

        Self { current }
    }

    /// The most recent destination.
    pub fn current(&self) -> Option<Destination> {
        *self.current.borrow()
    }

    /// Receiver that observes navigations.
    pub fn subscribe(&self) -> watch::Receiver<Option<Destination>> {
        self.current.subscribe()
    }
}

impl Default for RouteNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouteNavigator {
    fn navigate(&self, destination: Destination) {
        info!(path = destination.path(), "navigating");

        self.current
            .send_modify(|current| *current = Some(destination));
    }
}
