//! CEP postal code type.
//!
//! CEP (Código de Endereçamento Postal) is the Brazilian 8-digit postal
//! code, displayed as `NNNNN-NNN`. There is no check digit; validity is a
//! length rule only.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::digits_of;

/// Errors that can occur when parsing a [`Cep`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CepError {
    /// The input does not contain exactly 8 digits.
    #[error("CEP must have 8 digits, found {found}")]
    WrongLength {
        /// Number of digits extracted from the input.
        found: usize,
    },
}

/// A Brazilian postal code.
///
/// ## Examples
///
/// ```
/// use conta_leve_core::Cep;
///
/// let cep = Cep::parse("01310-930").unwrap();
/// assert_eq!(cep.as_digits(), "01310930");
/// assert_eq!(cep.formatted(), "01310-930");
///
/// assert!(Cep::parse("0131093").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Cep(String);

impl Cep {
    /// Number of digits in a CEP.
    pub const LENGTH: usize = 8;

    /// Parse a `Cep` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not extract to exactly 8 digits.
    pub fn parse(s: &str) -> Result<Self, CepError> {
        let digits = digits_of(s);
        if digits.len() != Self::LENGTH {
            return Err(CepError::WrongLength {
                found: digits.len(),
            });
        }
        Ok(Self(digits.iter().map(|d| char::from(b'0' + d)).collect()))
    }

    /// Check whether `s` contains a valid CEP.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        digits_of(s).len() == Self::LENGTH
    }

    /// Returns the 8 canonical digits as a string slice.
    #[must_use]
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// Consumes the `Cep` and returns the canonical digit string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Formats as `NNNNN-NNN`.
    #[must_use]
    pub fn formatted(&self) -> String {
        crate::form::cep(&self.0)
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cep {
    type Err = CepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "postgres")]
super::impl_pg_text!(Cep);
