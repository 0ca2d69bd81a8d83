//! Operation sequencing
//!
//! Tickets order cart operations and tie them to the activation they were
//! issued in.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering::SeqCst};

/// Position of an operation in issue order, plus its activation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticket {
    seq: u64,
    session: u64,
}

impl Ticket {
    pub(crate) fn seq(self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Default)]
pub(crate) struct Sequencer {
    latest: AtomicU64,
    session: AtomicU64,
    active: AtomicBool,
}

impl Sequencer {
    /// Starts a new session. Returns `false` if already active.
    pub(crate) fn activate(&self) -> bool {
        if self.active.compare_exchange(false, true, SeqCst, SeqCst).is_err() {
            return false;
        }

        self.session.fetch_add(1, SeqCst);

        true
    }

    /// Ends the current session. Returns `false` if already inactive.
    pub(crate) fn deactivate(&self) -> bool {
        if !self.active.swap(false, SeqCst) {
            return false;
        }

        self.session.fetch_add(1, SeqCst);

        true
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.load(SeqCst)
    }

    /// Issues the next ticket, or `None` while inactive.
    pub(crate) fn issue(&self) -> Option<Ticket> {
        if !self.is_active() {
            return None;
        }

        Some(Ticket {
            seq: self.latest.fetch_add(1, SeqCst) + 1,
            session: self.session.load(SeqCst),
        })
    }

    /// Whether the ticket's session is still the live one.
    pub(crate) fn is_attached(&self, ticket: Ticket) -> bool {
        self.is_active() && self.session.load(SeqCst) == ticket.session
    }

    /// Sequence number of the newest ticket issued.
    pub(crate) fn latest(&self) -> u64 {
        self.latest.load(SeqCst)
    }

    /// Whether no operation has been issued since this ticket.
    pub(crate) fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(SeqCst) == ticket.seq
    }
}
