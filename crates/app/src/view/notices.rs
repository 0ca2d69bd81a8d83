//! Notice board
//!
//! One slot holding the outcome of the most recent cart operation.

use std::sync::Arc;

use storefront_cart::notices::{Notice, NoticeKind};
use tokio::sync::watch;

/// Observable notice slot.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    slot: Arc<watch::Sender<Option<Notice>>>,
}

impl NoticeBoard {
    /// Starts with no notice.
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);

        Self {
            slot: Arc::new(slot),
        }
    }

    /// Shows `notice`, replacing whatever was shown.
    pub fn show(&self, notice: Notice) {
        self.slot.send_modify(|slot| *slot = Some(notice));
    }

    /// Hides the current notice.
    pub fn dismiss(&self) {
        self.slot.send_if_modified(|slot| slot.take().is_some());
    }

    /// The notice currently shown.
    pub fn current(&self) -> Option<Notice> {
        self.slot.borrow().clone()
    }

    /// Text of the current error notice, or an empty string.
    pub fn error_message(&self) -> String {
        self.text_of(NoticeKind::Error)
    }

    /// Text of the current success notice, or an empty string.
    pub fn success_message(&self) -> String {
        self.text_of(NoticeKind::Success)
    }

    /// Receiver that observes notice changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notice>> {
        self.slot.subscribe()
    }

    fn text_of(&self, kind: NoticeKind) -> String {
        self.slot
            .borrow()
            .as_ref()
            .filter(|notice| notice.kind == kind)
            .map(|notice| notice.text.clone())
            .unwrap_or_default()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notice_replaces_the_previous_one() {
        let board = NoticeBoard::new();

        board.show(Notice::error("Failed to fetch cart items."));
        board.show(Notice::success("Item removed successfully."));

        assert_eq!(board.error_message(), "");
        assert_eq!(board.success_message(), "Item removed successfully.");
    }

    #[test]
    fn dismiss_clears_both_messages() {
        let board = NoticeBoard::new();

        board.show(Notice::error("Failed to clear the cart."));
        board.dismiss();

        assert_eq!(board.current(), None);
        assert_eq!(board.error_message(), "");
        assert_eq!(board.success_message(), "");
    }
}
