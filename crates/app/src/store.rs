//! Cart Store
//!
//! Shared container for the client's cached cart. Mutation is limited to the
//! three reconciliation operations; readers take snapshots or subscribe.

use std::sync::Arc;

use storefront_cart::{CartItem, CartState, ItemId};
use tokio::sync::watch;

/// Observable cart state shared across views.
#[derive(Debug, Clone)]
pub struct CartStore {
    state: Arc<watch::Sender<CartState>>,
}

impl CartStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        let (state, _) = watch::channel(CartState::new());

        Self {
            state: Arc::new(state),
        }
    }

    /// Replaces the cached cart wholesale.
    pub fn replace_all(&self, items: impl IntoIterator<Item = CartItem>) {
        self.state.send_modify(|state| state.replace_all(items));
    }

    /// Removes one line. Subscribers are only woken when a line was removed.
    pub fn remove(&self, id: &ItemId) -> bool {
        self.state
            .send_if_modified(|state| state.remove(id).is_some())
    }

    /// Removes every line.
    pub fn clear(&self) {
        self.state.send_if_modified(|state| {
            let modified = !state.is_empty();
            state.clear();
            modified
        });
    }

    /// Copy of the current cart.
    pub fn snapshot(&self) -> CartState {
        self.state.borrow().clone()
    }

    /// Reads the current cart without copying it.
    pub fn read<R>(&self, f: impl FnOnce(&CartState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Number of cached lines.
    pub fn len(&self) -> usize {
        self.read(CartState::len)
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.read(CartState::is_empty)
    }

    /// Receiver that observes every change.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn shirt() -> CartItem {
        CartItem::new(1_u64, "Shirt", Decimal::from(20), 2)
    }

    fn hat() -> CartItem {
        CartItem::new(2_u64, "Hat", Decimal::from(15), 1)
    }

    #[test]
    fn clones_share_the_same_cart() {
        let store = CartStore::new();
        let other = store.clone();

        store.replace_all([shirt()]);

        assert_eq!(other.len(), 1);
    }

    #[test]
    fn remove_reports_whether_a_line_was_dropped() {
        let store = CartStore::new();
        store.replace_all([shirt(), hat()]);

        assert!(store.remove(&ItemId::from("1")), "shirt was cached");
        assert!(!store.remove(&ItemId::from("1")), "shirt already gone");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn subscribers_see_mutations() -> TestResult {
        let store = CartStore::new();
        let mut receiver = store.subscribe();

        store.replace_all([shirt(), hat()]);
        receiver.changed().await?;
        assert_eq!(receiver.borrow_and_update().len(), 2);

        store.clear();
        receiver.changed().await?;
        assert!(receiver.borrow_and_update().is_empty());

        Ok(())
    }

    #[test]
    fn no_op_mutations_do_not_wake_subscribers() {
        let store = CartStore::new();
        let receiver = store.subscribe();

        store.clear();
        store.remove(&ItemId::from("missing"));

        assert!(
            !receiver.has_changed().unwrap_or(true),
            "nothing changed, so nothing should be signalled"
        );
    }
}
