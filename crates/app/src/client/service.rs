//! Cart service contract.

use async_trait::async_trait;
use mockall::automock;
use storefront_cart::{CartPayload, ItemId};

use crate::client::errors::CartServiceError;

/// Owner of the durable cart.
#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// Fetches the full current cart.
    async fn fetch_cart(&self) -> Result<CartPayload, CartServiceError>;

    /// Deletes a single line.
    async fn remove_item(&self, id: &ItemId) -> Result<(), CartServiceError>;

    /// Deletes every line.
    async fn clear_cart(&self) -> Result<(), CartServiceError>;
}

/// Checks whether an image can be loaded.
#[automock]
#[async_trait]
pub trait ImageProbe: Send + Sync {
    /// Whether `url` answers with a success status. Never retried.
    async fn is_available(&self, url: &str) -> bool;
}
