//! Identity
//!
//! The signed-in shopper, as far as the cart is concerned.

use mockall::automock;

/// A signed-in shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Display name or account handle.
    pub name: String,
}

/// Source of the current user.
#[automock]
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<CurrentUser>;
}

/// Identity fixed at startup, e.g. from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<CurrentUser>,
}

impl StaticIdentity {
    /// No one is signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// `name` is signed in. Blank names count as anonymous.
    pub fn signed_in(name: impl Into<String>) -> Self {
        let name = name.into();

        if name.trim().is_empty() {
            return Self::anonymous();
        }

        Self {
            user: Some(CurrentUser { name }),
        }
    }
}

impl From<Option<String>> for StaticIdentity {
    fn from(name: Option<String>) -> Self {
        name.map_or_else(Self::anonymous, Self::signed_in)
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.clone()
    }
}
