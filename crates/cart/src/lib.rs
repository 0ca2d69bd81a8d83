//! Storefront Cart
//!
//! Client-side cart domain: the cached item collection, totals, and the
//! presentation values derived from it.

pub mod checkout;
pub mod images;
pub mod items;
pub mod notices;
pub mod pricing;
pub mod state;
pub mod summary;

#[cfg(test)]
mod fixtures;

pub use items::{CartItem, ItemId};
pub use state::{CartPayload, CartState};
