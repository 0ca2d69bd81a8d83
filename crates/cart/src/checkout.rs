//! Checkout

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Navigation targets reachable from the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Payment page for signed-in shoppers.
    Payment,

    /// Sign-in page for anonymous shoppers.
    Login,
}

impl Destination {
    /// Router path for this destination.
    pub fn path(self) -> &'static str {
        match self {
            Self::Payment => "/payment",
            Self::Login => "/login",
        }
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.path())
    }
}

/// Where checkout leads: payment when someone is signed in, login otherwise.
pub fn checkout_destination<U>(user: Option<&U>) -> Destination {
    if user.is_some() {
        Destination::Payment
    } else {
        Destination::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_in_shopper_goes_to_payment() {
        assert_eq!(checkout_destination(Some(&"ada")), Destination::Payment);
        assert_eq!(Destination::Payment.path(), "/payment");
    }

    #[test]
    fn anonymous_shopper_goes_to_login() {
        assert_eq!(checkout_destination::<&str>(None), Destination::Login);
        assert_eq!(Destination::Login.to_string(), "/login");
    }
}
