//! Contact field commands (CEP and phone).
//!
//! # Usage
//!
//! ```bash
//! cl-cli contact cep 01310930
//! cl-cli contact phone "(11) 99999-8888"
//! ```

use conta_leve_core::{Cep, CepError, Phone, PhoneError};

/// Validate and format a CEP.
///
/// # Errors
///
/// Returns an error when the input does not hold exactly 8 digits.
pub fn cep(value: &str) -> Result<String, CepError> {
    Ok(Cep::parse(value)?.formatted())
}

/// Validate and format a phone number.
///
/// # Errors
///
/// Returns an error when the input does not hold 10 or 11 digits.
pub fn phone(value: &str) -> Result<String, PhoneError> {
    let phone = Phone::parse(value)?;
    tracing::debug!(mobile = phone.is_mobile(), "parsed phone number");
    Ok(phone.formatted())
}
