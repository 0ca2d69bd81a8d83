//! Cart View
//!
//! Keeps the [`CartStore`] in step with the remote cart service and derives
//! what the cart page shows. Service failures never escape: they are logged
//! and surfaced as a notice, leaving the cached cart untouched.

mod notices;
mod reconcile;
mod sequence;

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use storefront_cart::{
    CartState, ItemId,
    checkout::{Destination, checkout_destination},
    notices::{CartOperation, Notice},
    pricing::{PricingError, cart_total},
    summary::{CartSummary, ImageSettings},
};
use tokio::sync::watch;
use tracing::{debug, error, info};

pub use notices::NoticeBoard;

use crate::{
    client::{CartService, CartServiceError},
    identity::IdentityProvider,
    navigation::Navigator,
    store::CartStore,
};

use reconcile::{Mutation, Reconciler};
use sequence::{Sequencer, Ticket};

/// How a cart operation ended, as seen by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The service call succeeded and the store was updated.
    Applied,

    /// The service call failed; the store is unchanged.
    Failed,

    /// A fetch finished after a fetch issued later had been applied, and was
    /// discarded.
    Superseded,

    /// The view was inactive when the operation was issued or completed.
    Detached,
}

/// Controller behind the cart page.
///
/// Every store mutation happens under the reconciler lock, so a fetch result
/// and the removals confirmed while it was in flight are applied as one step.
pub struct CartView {
    service: Arc<dyn CartService>,
    identity: Arc<dyn IdentityProvider>,
    navigator: Arc<dyn Navigator>,
    store: CartStore,
    notices: NoticeBoard,
    sequencer: Sequencer,
    reconciler: Mutex<Reconciler>,
}

impl CartView {
    /// Creates an inactive view over `store`.
    pub fn new(
        service: Arc<dyn CartService>,
        identity: Arc<dyn IdentityProvider>,
        navigator: Arc<dyn Navigator>,
        store: CartStore,
    ) -> Self {
        Self {
            service,
            identity,
            navigator,
            store,
            notices: NoticeBoard::new(),
            sequencer: Sequencer::default(),
            reconciler: Mutex::default(),
        }
    }

    /// Mounts the view and performs its one load for this activation.
    ///
    /// Returns `None` if the view was already active.
    pub async fn activate(&self) -> Option<Completion> {
        if !self.sequencer.activate() {
            debug!("cart view already active");

            return None;
        }

        Some(self.load_cart().await)
    }

    /// Unmounts the view, discarding its cart and notice.
    ///
    /// Operations still in flight complete without effect.
    pub fn deactivate(&self) {
        let mut reconciler = self.reconciler();

        if self.sequencer.deactivate() {
            reconciler.reset();
            self.store.clear();
            self.notices.dismiss();
        }
    }

    /// Whether the view is mounted.
    pub fn is_active(&self) -> bool {
        self.sequencer.is_active()
    }

    /// Replaces the cached cart with the server's.
    ///
    /// Removals and clears confirmed while the fetch was in flight are
    /// replayed over the fetched cart.
    pub async fn load_cart(&self) -> Completion {
        let ticket = {
            let mut reconciler = self.reconciler();

            let Some(ticket) = self.begin(CartOperation::Load) else {
                return Completion::Detached;
            };

            reconciler.load_issued();

            ticket
        };

        let result = self.service.fetch_cart().await;

        let mut reconciler = self.reconciler();

        if !self.is_attached(ticket, CartOperation::Load) {
            return Completion::Detached;
        }

        match result {
            Ok(payload) => {
                let Some(state) = reconciler.reconcile(ticket.seq(), payload.into_items()) else {
                    debug!("discarding cart fetch superseded by a newer fetch");

                    return Completion::Superseded;
                };

                self.store.replace_all(state);

                info!(items = self.store.len(), "loaded cart");

                Completion::Applied
            }
            Err(error) => {
                reconciler.load_failed();

                self.fail(ticket, CartOperation::Load, &error)
            }
        }
    }

    /// Removes one line on the server, then from the cache.
    ///
    /// The request is sent even if `id` is not cached.
    pub async fn remove_item(&self, id: &ItemId) -> Completion {
        let Some(ticket) = self.begin(CartOperation::Remove) else {
            return Completion::Detached;
        };

        let result = self.service.remove_item(id).await;

        let mut reconciler = self.reconciler();

        if !self.is_attached(ticket, CartOperation::Remove) {
            return Completion::Detached;
        }

        match result {
            Ok(()) => {
                let cached = self.store.remove(id);

                reconciler.record(self.sequencer.latest(), Mutation::Remove(id.clone()));

                info!(item_id = %id, cached, "removed cart item");

                self.report(ticket, CartOperation::Remove.success_notice());

                Completion::Applied
            }
            Err(error) => self.fail(ticket, CartOperation::Remove, &error),
        }
    }

    /// Empties the cart on the server, then the cache.
    pub async fn clear_cart(&self) -> Completion {
        let Some(ticket) = self.begin(CartOperation::Clear) else {
            return Completion::Detached;
        };

        let result = self.service.clear_cart().await;

        let mut reconciler = self.reconciler();

        if !self.is_attached(ticket, CartOperation::Clear) {
            return Completion::Detached;
        }

        match result {
            Ok(()) => {
                self.store.clear();

                reconciler.record(self.sequencer.latest(), Mutation::Clear);

                info!("cleared cart");

                self.report(ticket, CartOperation::Clear.success_notice());

                Completion::Applied
            }
            Err(error) => self.fail(ticket, CartOperation::Clear, &error),
        }
    }

    /// Hands off to payment or login depending on who is signed in.
    pub fn checkout(&self) -> Destination {
        let destination = checkout_destination(self.identity.current_user().as_ref());

        self.navigator.navigate(destination);

        destination
    }

    /// Copy of the cached cart.
    pub fn cart(&self) -> CartState {
        self.store.snapshot()
    }

    /// Receiver that observes cart changes.
    pub fn subscribe_cart(&self) -> watch::Receiver<CartState> {
        self.store.subscribe()
    }

    /// Display values for the current cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a total overflows.
    pub fn summary(&self, images: ImageSettings<'_>) -> Result<CartSummary, PricingError> {
        self.store
            .read(|state| CartSummary::from_state(state, images))
    }

    /// Current cart total to two places.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the total overflows.
    pub fn cart_total(&self) -> Result<String, PricingError> {
        self.store.read(cart_total)
    }

    /// Outcome of the most recent operation, if it reported one.
    pub fn notice(&self) -> Option<Notice> {
        self.notices.current()
    }

    /// Receiver that observes notice changes.
    pub fn subscribe_notices(&self) -> watch::Receiver<Option<Notice>> {
        self.notices.subscribe()
    }

    /// Current error text, or an empty string.
    pub fn error_message(&self) -> String {
        self.notices.error_message()
    }

    /// Current success text, or an empty string.
    pub fn success_message(&self) -> String {
        self.notices.success_message()
    }

    fn reconciler(&self) -> MutexGuard<'_, Reconciler> {
        self.reconciler
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, operation: CartOperation) -> Option<Ticket> {
        let Some(ticket) = self.sequencer.issue() else {
            debug!(%operation, "cart view inactive, ignoring operation");

            return None;
        };

        self.notices.dismiss();

        Some(ticket)
    }

    fn is_attached(&self, ticket: Ticket, operation: CartOperation) -> bool {
        let attached = self.sequencer.is_attached(ticket);

        if !attached {
            debug!(%operation, "cart operation completed after the view was deactivated");
        }

        attached
    }

    fn report(&self, ticket: Ticket, notice: Option<Notice>) {
        if !self.sequencer.is_latest(ticket) {
            debug!("newer cart operation pending, dropping notice");

            return;
        }

        if let Some(notice) = notice {
            self.notices.show(notice);
        }
    }

    fn fail(&self, ticket: Ticket, operation: CartOperation, error: &CartServiceError) -> Completion {
        error!(%operation, %error, "cart operation failed");

        self.report(ticket, Some(operation.failure_notice()));

        Completion::Failed
    }
}

impl Debug for CartView {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartView")
            .field("store", &self.store)
            .field("notices", &self.notices)
            .field("sequencer", &self.sequencer)
            .finish_non_exhaustive()
    }
}
