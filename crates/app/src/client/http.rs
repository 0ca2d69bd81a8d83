//! HTTP client for the storefront cart API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use storefront_cart::{CartPayload, ItemId};
use tracing::debug;

use crate::client::{
    errors::CartServiceError,
    service::{CartService, ImageProbe},
};

/// Configuration for connecting to the storefront.
#[derive(Debug, Clone)]
pub struct HttpCartServiceConfig {
    /// Storefront origin, e.g. `"http://localhost:5000"`.
    pub origin: String,

    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// Cart service backed by the storefront's `/api/cart` endpoints.
#[derive(Debug, Clone)]
pub struct HttpCartService {
    origin: Url,
    http: Client,
}

impl HttpCartService {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the origin is not a base URL or the HTTP client
    /// cannot be built.
    pub fn new(config: HttpCartServiceConfig) -> Result<Self, CartServiceError> {
        let origin = Url::parse(&config.origin)
            .map_err(|error| CartServiceError::InvalidOrigin(format!("{}: {error}", config.origin)))?;

        if origin.cannot_be_a_base() {
            return Err(CartServiceError::InvalidOrigin(config.origin));
        }

        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            origin,
            http: builder.build()?,
        })
    }

    /// `{origin}/api/cart/{segments..}` with each segment percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the origin cannot carry a path.
    pub fn cart_url(&self, segments: &[&str]) -> Result<Url, CartServiceError> {
        let mut url = self.origin.clone();

        url.path_segments_mut()
            .map_err(|()| CartServiceError::InvalidOrigin(self.origin.to_string()))?
            .pop_if_empty()
            .extend(["api", "cart"])
            .extend(segments);

        Ok(url)
    }
}

#[async_trait]
impl CartService for HttpCartService {
    #[tracing::instrument(name = "cart.fetch", skip(self))]
    async fn fetch_cart(&self) -> Result<CartPayload, CartServiceError> {
        let response = self.http.get(self.cart_url(&[])?).send().await?;

        let response = ensure_success(response, "fetch").await?;

        Ok(response.json().await?)
    }

    #[tracing::instrument(name = "cart.remove", skip(self, id), fields(item_id = %id))]
    async fn remove_item(&self, id: &ItemId) -> Result<(), CartServiceError> {
        let response = self
            .http
            .delete(self.cart_url(&[id.as_str()])?)
            .send()
            .await?;

        ensure_success(response, "remove").await?;

        Ok(())
    }

    #[tracing::instrument(name = "cart.clear", skip(self))]
    async fn clear_cart(&self) -> Result<(), CartServiceError> {
        let response = self
            .http
            .delete(self.cart_url(&["clear"])?)
            .send()
            .await?;

        ensure_success(response, "clear").await?;

        Ok(())
    }
}

#[async_trait]
impl ImageProbe for HttpCartService {
    async fn is_available(&self, url: &str) -> bool {
        match self.http.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                debug!(url, %error, "image probe failed");

                false
            }
        }
    }
}

async fn ensure_success(response: Response, operation: &str) -> Result<Response, CartServiceError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(CartServiceError::UnexpectedResponse(format!(
        "{operation} request failed with status {status}: {text}"
    )))
}
