//! Load reconciliation
//!
//! A fetched cart reflects the server at some point after the fetch was
//! issued. Removals and clears that succeed while a fetch is in flight may or
//! may not be part of it, so they are logged and replayed over the payload.

use storefront_cart::{CartItem, CartState, ItemId};

/// A server mutation that has been confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mutation {
    Remove(ItemId),
    Clear,
}

impl Mutation {
    fn apply(&self, state: &mut CartState) {
        match self {
            Self::Remove(id) => {
                state.remove(id);
            }
            Self::Clear => state.clear(),
        }
    }
}

/// Bookkeeping for fetches in flight during one activation.
#[derive(Debug, Default)]
pub(crate) struct Reconciler {
    pending_loads: usize,
    applied_load: u64,
    log: Vec<(u64, Mutation)>,
}

impl Reconciler {
    pub(crate) fn load_issued(&mut self) {
        self.pending_loads += 1;
    }

    pub(crate) fn load_failed(&mut self) {
        self.finish_load();
    }

    /// Records a confirmed mutation. `stamp` is the newest ticket issued when
    /// it completed, so every fetch with a ticket at or below it was already
    /// in flight.
    pub(crate) fn record(&mut self, stamp: u64, mutation: Mutation) {
        if self.pending_loads > 0 {
            self.log.push((stamp, mutation));
        }
    }

    /// Builds the cart for the fetch issued as ticket `seq`.
    ///
    /// Returns `None` when a fetch issued later has already been applied.
    pub(crate) fn reconcile(
        &mut self,
        seq: u64,
        items: impl IntoIterator<Item = CartItem>,
    ) -> Option<CartState> {
        if seq < self.applied_load {
            self.finish_load();

            return None;
        }

        self.applied_load = seq;
        self.log.retain(|(stamp, _)| *stamp >= seq);

        let mut state: CartState = items.into_iter().collect();

        for (_, mutation) in &self.log {
            mutation.apply(&mut state);
        }

        self.finish_load();

        Some(state)
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    fn finish_load(&mut self) {
        self.pending_loads = self.pending_loads.saturating_sub(1);

        if self.pending_loads == 0 {
            self.log.clear();
        }
    }
}
