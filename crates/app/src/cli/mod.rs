//! Storefront cart commands

use std::io;

use clap::Subcommand;
use storefront_cart::{ItemId, pricing::PricingError};
use thiserror::Error;
use tracing::info;

use crate::{context::AppContext, images::apply_image_fallbacks};

mod render;

pub use render::{write_cart, write_notice};

/// Errors that end a command early.
///
/// Failed cart operations are not errors here; they are printed as notices.
#[derive(Debug, Error)]
pub enum CliError {
    /// Output could not be written.
    #[error("failed to write output")]
    Io(#[from] io::Error),

    /// A cart total could not be computed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Cart subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CartCommand {
    /// Show the cart
    Show {
        /// Replace images that fail to load with the placeholder
        #[arg(long)]
        check_images: bool,
    },

    /// Remove one item from the cart
    Remove {
        /// Item id
        id: String,
    },

    /// Remove every item from the cart
    Clear,

    /// Print where checkout leads for the configured user
    Checkout,
}

#[derive(Debug)]
enum CartAction {
    Remove(ItemId),
    Clear,
}

/// Runs `command` against the cart and writes the result to `out`.
///
/// # Errors
///
/// Returns an error if output cannot be written or a total overflows.
pub async fn run(
    command: CartCommand,
    context: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let (action, check_images) = match command {
        CartCommand::Show { check_images } => (None, check_images),
        CartCommand::Remove { id } => (Some(CartAction::Remove(ItemId::new(id))), false),
        CartCommand::Clear => (Some(CartAction::Clear), false),
        CartCommand::Checkout => {
            let destination = context.view.checkout();

            writeln!(out, "{destination}")?;

            return Ok(());
        }
    };

    let loaded = context.view.activate().await;

    info!(?loaded, "cart view activated");

    let result = run_active(action, check_images, context, out).await;

    context.view.deactivate();

    result
}

async fn run_active(
    action: Option<CartAction>,
    check_images: bool,
    context: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let view = &context.view;

    if let Some(action) = action {
        write_notice(out, view.notice().as_ref())?;

        let completion = match action {
            CartAction::Remove(id) => view.remove_item(&id).await,
            CartAction::Clear => view.clear_cart().await,
        };

        info!(?completion, "cart command finished");
    }

    write_notice(out, view.notice().as_ref())?;

    let mut summary = view.summary(context.display.images())?;

    if check_images {
        apply_image_fallbacks(
            &mut summary,
            context.images.as_ref(),
            &context.display.placeholder,
        )
        .await;
    }

    write_cart(out, &summary, context.display.currency)?;

    Ok(())
}

#[cfg(test)]
mod tests;
