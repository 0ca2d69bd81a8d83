//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use rusty_money::iso::Currency;
use storefront_cart::summary::ImageSettings;
use thiserror::Error;

use crate::{
    client::{CartService, CartServiceError, HttpCartService, ImageProbe},
    config::{ConfigError, StorefrontConfig},
    identity::IdentityProvider,
    navigation::RouteNavigator,
    store::CartStore,
    view::CartView,
};

/// Errors raised while wiring the application together.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error("failed to build cart service client: {0}")]
    Client(#[from] CartServiceError),
}

/// Display settings resolved from configuration.
#[derive(Debug, Clone)]
pub struct DisplaySettings {
    /// Storefront origin images are served from.
    pub origin: String,

    /// Image shown when an item has none or it fails to load.
    pub placeholder: String,

    /// Currency amounts are rendered in.
    pub currency: &'static Currency,
}

impl DisplaySettings {
    /// Borrowed image settings for building summaries.
    pub fn images(&self) -> ImageSettings<'_> {
        ImageSettings {
            origin: &self.origin,
            placeholder: &self.placeholder,
        }
    }
}

/// Everything a command needs to act on the cart.
#[derive(Clone)]
pub struct AppContext {
    /// The cart page controller.
    pub view: Arc<CartView>,

    /// Image availability checks.
    pub images: Arc<dyn ImageProbe>,

    /// Records where checkout sent the shopper.
    pub navigator: Arc<RouteNavigator>,

    /// How amounts and images are shown.
    pub display: DisplaySettings,
}

impl AppContext {
    /// Wires the cart view to the configured storefront.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown currency or an unusable origin.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, AppInitError> {
        let display = DisplaySettings {
            origin: config.origin.clone(),
            placeholder: config.placeholder_image.clone(),
            currency: config.currency()?,
        };

        let http = Arc::new(HttpCartService::new(config.service_config())?);

        Ok(Self::new(
            http.clone(),
            http,
            Arc::new(config.identity()),
            display,
        ))
    }

    /// Wires the cart view to explicit collaborators.
    pub fn new(
        service: Arc<dyn CartService>,
        images: Arc<dyn ImageProbe>,
        identity: Arc<dyn IdentityProvider>,
        display: DisplaySettings,
    ) -> Self {
        let navigator = Arc::new(RouteNavigator::new());

        let view = CartView::new(service, identity, navigator.clone(), CartStore::new());

        Self {
            view: Arc::new(view),
            images,
            navigator,
            display,
        }
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext")
            .field("view", &self.view)
            .field("navigator", &self.navigator)
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}
