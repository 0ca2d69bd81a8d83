//! Test fixtures

use rust_decimal::Decimal;

use crate::items::CartItem;

pub(crate) fn shirt() -> CartItem {
    CartItem::new(1_u64, "Shirt", Decimal::from(20), 2).with_image("shirt.jpg")
}

pub(crate) fn hat() -> CartItem {
    CartItem::new(2_u64, "Hat", Decimal::from(15), 1).with_image("hat.jpg")
}

pub(crate) fn unpriced(quantity: u32) -> CartItem {
    CartItem {
        price: None,
        ..CartItem::new(3_u64, "Mystery Box", Decimal::ZERO, quantity)
    }
}
