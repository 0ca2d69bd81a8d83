//! Cart rendering

use std::io;

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use storefront_cart::{
    notices::{Notice, NoticeKind},
    pricing::format_amount,
    summary::{CartSummary, EMPTY_CART_TEXT},
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::cli::CliError;

/// Writes the cart as a table followed by its total, or only the empty-cart
/// text when there are no lines.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_cart(
    out: &mut impl io::Write,
    summary: &CartSummary,
    currency: &'static Currency,
) -> Result<(), CliError> {
    if summary.is_empty() {
        writeln!(out, "{EMPTY_CART_TEXT}")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Item", "Price", "Qty", "Total", "Image"]);

    for line in &summary.lines {
        builder.push_record([
            line.id.to_string(),
            line.name.clone(),
            money(line.unit_price, currency),
            line.quantity.to_string(),
            money(line.line_total, currency),
            line.image.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "Total Price: {}", money(summary.total, currency))?;

    Ok(())
}

/// Writes the notice line, if there is one.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_notice(out: &mut impl io::Write, notice: Option<&Notice>) -> Result<(), CliError> {
    let Some(notice) = notice else {
        return Ok(());
    };

    let label = match notice.kind {
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
    };

    writeln!(out, "[{label}] {}", notice.text)?;

    Ok(())
}

/// Two-place amount with the currency symbol, whatever the currency's own
/// minor unit.
fn money(amount: Decimal, currency: &'static Currency) -> String {
    let amount = format_amount(amount);

    if currency.symbol_first {
        format!("{}{amount}", currency.symbol)
    } else {
        format!("{amount}{}", currency.symbol)
    }
}
