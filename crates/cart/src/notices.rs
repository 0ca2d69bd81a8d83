//! Notices
//!
//! The single user-visible outcome of the most recent cart operation.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Whether an operation succeeded or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The operation completed.
    Success,

    /// The operation failed; the cart was left unchanged.
    Error,
}

/// A human-readable operation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Outcome kind.
    pub kind: NoticeKind,

    /// Message shown to the shopper.
    pub text: String,
}

impl Notice {
    /// Creates a success notice.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    /// Creates an error notice.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// Whether this is an error notice.
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.text)
    }
}

/// Cart operations that report a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    /// Full fetch from the server.
    Load,

    /// Single line removal.
    Remove,

    /// Whole cart removal.
    Clear,
}

impl CartOperation {
    /// Notice for a successful run, if the operation reports one.
    pub fn success_notice(self) -> Option<Notice> {
        match self {
            Self::Load => None,
            Self::Remove => Some(Notice::success("Item removed successfully.")),
            Self::Clear => Some(Notice::success("Cart cleared successfully.")),
        }
    }

    /// Notice for a failed run.
    pub fn failure_notice(self) -> Notice {
        Notice::error(match self {
            Self::Load => "Failed to fetch cart items.",
            Self::Remove => "Failed to remove item from cart.",
            Self::Clear => "Failed to clear the cart.",
        })
    }

    /// Short name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Remove => "remove",
            Self::Clear => "clear",
        }
    }
}

impl Display for CartOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
