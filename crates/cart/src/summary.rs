//! Cart summary
//!
//! Display values derived fresh from the current cart state. Amounts stay
//! unrounded until they are turned into text.

use rust_decimal::Decimal;

use crate::{
    images::ImageRef,
    items::{CartItem, ItemId},
    pricing::{PricingError, format_amount, line_total, sum_line_totals},
    state::CartState,
};

/// Text shown instead of lines when the cart has none.
pub const EMPTY_CART_TEXT: &str = "Your cart is empty.";

/// Where item images are served from.
#[derive(Debug, Clone, Copy)]
pub struct ImageSettings<'a> {
    /// Storefront origin, e.g. `http://localhost:5000`.
    pub origin: &'a str,

    /// Local asset used when an image is missing.
    pub placeholder: &'a str,
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSummary {
    /// Line id, used for remove actions.
    pub id: ItemId,

    /// Display label.
    pub name: String,

    /// Unit price; zero when the server sent none.
    pub unit_price: Decimal,

    /// Number of units.
    pub quantity: u32,

    /// Unrounded price times quantity.
    pub line_total: Decimal,

    /// Image to display.
    pub image: ImageRef,
}

impl LineSummary {
    /// Builds the display values for one item.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the line total overflows.
    pub fn from_item(item: &CartItem, images: ImageSettings<'_>) -> Result<Self, PricingError> {
        Ok(Self {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price(),
            quantity: item.quantity,
            line_total: line_total(item)?,
            image: ImageRef::resolve(images.origin, item.image.as_deref(), images.placeholder),
        })
    }

    /// Unit price to two places.
    pub fn unit_price_text(&self) -> String {
        format_amount(self.unit_price)
    }

    /// Line total to two places.
    pub fn line_total_text(&self) -> String {
        format_amount(self.line_total)
    }
}

/// Everything the cart page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    /// Lines in display order.
    pub lines: Vec<LineSummary>,

    /// Unrounded sum of the line totals.
    pub total: Decimal,
}

impl CartSummary {
    /// Derives the summary from the current state.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if any total overflows.
    pub fn from_state(state: &CartState, images: ImageSettings<'_>) -> Result<Self, PricingError> {
        let lines = state
            .items()
            .map(|item| LineSummary::from_item(item, images))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            lines,
            total: sum_line_totals(state.items())?,
        })
    }

    /// Cart total to two places.
    pub fn total_text(&self) -> String {
        format_amount(self.total)
    }

    /// Whether there is nothing to show but the empty-cart text.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
