//! Image fallback

use storefront_cart::{images::ImageRef, summary::CartSummary};
use tracing::debug;

use crate::client::ImageProbe;

/// Swaps every remote image that fails to load for the placeholder.
///
/// Each image is probed once; the placeholder itself is never probed.
pub async fn apply_image_fallbacks(
    summary: &mut CartSummary,
    probe: &dyn ImageProbe,
    placeholder: &str,
) {
    for line in &mut summary.lines {
        let ImageRef::Remote(url) = &line.image else {
            continue;
        };

        if !probe.is_available(url).await {
            debug!(item_id = %line.id, url, "image unavailable, using placeholder");

            line.image = line.image.clone().or_placeholder(placeholder);
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use storefront_cart::{
        CartItem, CartState,
        images::DEFAULT_PLACEHOLDER,
        summary::ImageSettings,
    };
    use testresult::TestResult;

    use crate::client::MockImageProbe;

    use super::*;

    const IMAGES: ImageSettings<'static> = ImageSettings {
        origin: "http://localhost:5000",
        placeholder: DEFAULT_PLACEHOLDER,
    };

    #[tokio::test]
    async fn broken_images_fall_back_without_retry() -> TestResult {
        let state: CartState = [
            CartItem::new(1_u64, "Shirt", Decimal::from(20), 2).with_image("shirt.jpg"),
            CartItem::new(2_u64, "Hat", Decimal::from(15), 1).with_image("hat.jpg"),
            CartItem::new(3_u64, "Gift", Decimal::from(5), 1),
        ]
        .into_iter()
        .collect();

        let mut summary = CartSummary::from_state(&state, IMAGES)?;

        let mut probe = MockImageProbe::new();

        probe
            .expect_is_available()
            .once()
            .withf(|url| url == "http://localhost:5000/images/shirt.jpg")
            .return_const(true);
        probe
            .expect_is_available()
            .once()
            .withf(|url| url == "http://localhost:5000/images/hat.jpg")
            .return_const(false);

        apply_image_fallbacks(&mut summary, &probe, DEFAULT_PLACEHOLDER).await;

        let images: Vec<&str> = summary.lines.iter().map(|line| line.image.as_str()).collect();

        assert_eq!(
            images,
            [
                "http://localhost:5000/images/shirt.jpg",
                DEFAULT_PLACEHOLDER,
                DEFAULT_PLACEHOLDER
            ]
        );

        Ok(())
    }
}
