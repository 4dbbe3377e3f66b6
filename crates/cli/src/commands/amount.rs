//! Monetary amount commands.
//!
//! # Usage
//!
//! ```bash
//! cl-cli amount mask 12345        # -> 123,45
//! cl-cli amount parse "1.234,56"  # -> 1234.56
//! cl-cli amount format 1234.56    # -> 1.234,56
//! ```

use conta_leve_core::form;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in amount commands.
#[derive(Debug, Error)]
pub enum AmountCommandError {
    /// The argument is not a decimal number.
    #[error("not a decimal amount: {0:?}")]
    InvalidDecimal(String),
}

/// Run the keystroke currency mask over raw field input.
#[must_use]
pub fn mask(value: &str) -> String {
    form::currency(value)
}

/// Parse a localized amount into its canonical decimal form.
///
/// Mirrors the form field semantics: input that does not parse yields
/// `0.00` rather than an error.
#[must_use]
pub fn parse(value: &str) -> String {
    let mut parsed = form::parse_currency(value);
    parsed.rescale(2);
    parsed.to_string()
}

/// Render a canonical decimal (`1234.56`) in localized display form.
///
/// An amount of exactly zero renders as the empty string, matching the
/// form field convention.
///
/// # Errors
///
/// Returns an error when the argument is not a decimal number.
pub fn format(value: &str) -> Result<String, AmountCommandError> {
    let parsed: Decimal = value
        .trim()
        .parse()
        .map_err(|_| AmountCommandError::InvalidDecimal(value.to_owned()))?;
    Ok(form::currency_display(parsed))
}
