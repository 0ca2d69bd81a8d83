//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use rusty_money::iso::USD;
use storefront_cart::{CartItem, CartPayload, images::DEFAULT_PLACEHOLDER};

use crate::{
    client::{CartService, CartServiceError, ImageProbe, MockCartService},
    context::{AppContext, DisplaySettings},
    identity::StaticIdentity,
    navigation::{MockNavigator, RouteNavigator},
    store::CartStore,
    view::CartView,
};

pub(crate) fn shirt() -> CartItem {
    CartItem::new(1_u64, "Shirt", Decimal::from(20), 2).with_image("shirt.jpg")
}

pub(crate) fn hat() -> CartItem {
    CartItem::new(2_u64, "Hat", Decimal::from(15), 1).with_image("hat.jpg")
}

pub(crate) fn payload(items: impl Into<Vec<CartItem>>) -> CartPayload {
    CartPayload::List(items.into())
}

pub(crate) fn server_error(status: u16) -> CartServiceError {
    CartServiceError::UnexpectedResponse(format!("request failed with status {status}"))
}

/// Mock with no expectations beyond those the caller sets; unexpected calls fail.
pub(crate) fn strict_service() -> MockCartService {
    let mut service = MockCartService::new();

    service.expect_fetch_cart().never();
    service.expect_remove_item().never();
    service.expect_clear_cart().never();

    service
}

pub(crate) fn view_with(service: impl CartService + 'static) -> CartView {
    view_from(Arc::new(service), CartStore::new())
}

pub(crate) fn view_from(service: Arc<dyn CartService>, store: CartStore) -> CartView {
    CartView::new(
        service,
        Arc::new(StaticIdentity::anonymous()),
        Arc::new(RouteNavigator::new()),
        store,
    )
}

pub(crate) fn view_with_navigator(identity: StaticIdentity, navigator: MockNavigator) -> CartView {
    CartView::new(
        Arc::new(strict_service()),
        Arc::new(identity),
        Arc::new(navigator),
        CartStore::new(),
    )
}

pub(crate) fn display() -> DisplaySettings {
    DisplaySettings {
        origin: "http://localhost:5000".to_string(),
        placeholder: DEFAULT_PLACEHOLDER.to_string(),
        currency: USD,
    }
}

pub(crate) fn context_with(
    service: impl CartService + 'static,
    images: impl ImageProbe + 'static,
    identity: StaticIdentity,
) -> AppContext {
    AppContext::new(Arc::new(service), Arc::new(images), Arc::new(identity), display())
}
