//! Tax document commands.
//!
//! # Usage
//!
//! ```bash
//! # Validate (prints the canonical mask and the document kind)
//! cl-cli doc validate "111.444.777-35"
//!
//! # Format only
//! cl-cli doc format 11222333000181
//! ```

use conta_leve_core::{TaxId, TaxIdError};

/// Validate a CPF or CNPJ, dispatching on digit count.
///
/// Returns a human-readable confirmation line with the canonical mask.
///
/// # Errors
///
/// Returns the advisory wrong-length error for inputs that are neither 11
/// nor 14 digits, or the underlying checksum error.
pub fn validate(value: &str) -> Result<String, TaxIdError> {
    let id = TaxId::parse(value)?;
    let kind = if id.is_company() { "CNPJ" } else { "CPF" };
    tracing::debug!(%id, kind, "document is valid");
    Ok(format!("valid {kind}: {}", id.formatted()))
}

/// Format a valid CPF or CNPJ with its canonical mask.
///
/// # Errors
///
/// Same failure modes as [`validate`].
pub fn format(value: &str) -> Result<String, TaxIdError> {
    Ok(TaxId::parse(value)?.formatted())
}
