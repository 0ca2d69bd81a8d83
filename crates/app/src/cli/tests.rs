use storefront_cart::{checkout::Destination, summary::EMPTY_CART_TEXT};
use testresult::TestResult;

use crate::{
    client::{MockCartService, MockImageProbe},
    context::AppContext,
    identity::StaticIdentity,
    test::{context_with, hat, payload, server_error, shirt, strict_service},
};

use super::*;

fn loaded_service() -> MockCartService {
    let mut service = MockCartService::new();

    service
        .expect_fetch_cart()
        .once()
        .return_once(|| Ok(payload(vec![shirt(), hat()])));

    service
}

fn unused_probe() -> MockImageProbe {
    let mut probe = MockImageProbe::new();

    probe.expect_is_available().never();

    probe
}

async fn output_of(command: CartCommand, context: &AppContext) -> TestResult<String> {
    let mut out = Vec::new();

    run(command, context, &mut out).await?;

    Ok(String::from_utf8(out)?)
}

#[tokio::test]
async fn show_prints_the_loaded_cart() -> TestResult {
    let context = context_with(loaded_service(), unused_probe(), StaticIdentity::anonymous());

    let output = output_of(CartCommand::Show { check_images: false }, &context).await?;

    assert!(output.contains("Shirt"), "{output}");
    assert!(output.contains("http://localhost:5000/images/shirt.jpg"), "{output}");
    assert!(output.contains("Total Price: $55.00"), "{output}");
    assert!(!context.view.is_active(), "view is unmounted after the command");

    Ok(())
}

#[tokio::test]
async fn show_can_swap_broken_images_for_the_placeholder() -> TestResult {
    let mut probe = MockImageProbe::new();

    probe
        .expect_is_available()
        .withf(|url: &str| url.ends_with("shirt.jpg"))
        .return_const(true);
    probe
        .expect_is_available()
        .withf(|url: &str| url.ends_with("hat.jpg"))
        .return_const(false);

    let context = context_with(loaded_service(), probe, StaticIdentity::anonymous());

    let output = output_of(CartCommand::Show { check_images: true }, &context).await?;

    assert!(output.contains("http://localhost:5000/images/shirt.jpg"), "{output}");
    assert!(!output.contains("hat.jpg"), "{output}");
    assert!(output.contains("/placeholder.jpg"), "{output}");

    Ok(())
}

#[tokio::test]
async fn show_reports_a_failed_load() -> TestResult {
    let mut service = MockCartService::new();

    service
        .expect_fetch_cart()
        .once()
        .return_once(|| Err(server_error(503)));

    let context = context_with(service, unused_probe(), StaticIdentity::anonymous());

    let output = output_of(CartCommand::Show { check_images: false }, &context).await?;

    assert!(output.contains("[error] Failed to fetch cart items."), "{output}");
    assert!(output.contains(EMPTY_CART_TEXT), "{output}");

    Ok(())
}

#[tokio::test]
async fn remove_prints_the_notice_and_remaining_cart() -> TestResult {
    let mut service = loaded_service();

    service
        .expect_remove_item()
        .once()
        .withf(|id| id.as_str() == "1")
        .return_once(|_| Ok(()));

    let context = context_with(service, unused_probe(), StaticIdentity::anonymous());

    let output = output_of(CartCommand::Remove { id: "1".to_string() }, &context).await?;

    assert!(output.contains("[ok] Item removed successfully."), "{output}");
    assert!(!output.contains("Shirt"), "{output}");
    assert!(output.contains("Total Price: $15.00"), "{output}");

    Ok(())
}

#[tokio::test]
async fn failed_remove_leaves_the_cart_as_loaded() -> TestResult {
    let mut service = loaded_service();

    service
        .expect_remove_item()
        .once()
        .return_once(|_| Err(server_error(500)));

    let context = context_with(service, unused_probe(), StaticIdentity::anonymous());

    let output = output_of(CartCommand::Remove { id: "1".to_string() }, &context).await?;

    assert!(output.contains("[error] Failed to remove item from cart."), "{output}");
    assert!(output.contains("Total Price: $55.00"), "{output}");

    Ok(())
}

#[tokio::test]
async fn clear_prints_an_empty_cart() -> TestResult {
    let mut service = loaded_service();

    service.expect_clear_cart().once().return_once(|| Ok(()));

    let context = context_with(service, unused_probe(), StaticIdentity::anonymous());

    let output = output_of(CartCommand::Clear, &context).await?;

    assert!(output.contains("[ok] Cart cleared successfully."), "{output}");
    assert!(output.contains(EMPTY_CART_TEXT), "{output}");
    assert!(!output.contains("Total Price"), "{output}");

    Ok(())
}

#[tokio::test]
async fn checkout_prints_the_destination_without_loading() -> TestResult {
    let context = context_with(strict_service(), unused_probe(), StaticIdentity::signed_in("ada"));

    let output = output_of(CartCommand::Checkout, &context).await?;

    assert_eq!(output, "/payment\n");
    assert_eq!(context.navigator.current(), Some(Destination::Payment));

    Ok(())
}

#[tokio::test]
async fn anonymous_checkout_goes_to_login() -> TestResult {
    let context = context_with(strict_service(), unused_probe(), StaticIdentity::anonymous());

    let output = output_of(CartCommand::Checkout, &context).await?;

    assert_eq!(output, "/login\n");

    Ok(())
}
