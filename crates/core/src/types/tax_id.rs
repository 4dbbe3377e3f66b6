//! Combined CPF/CNPJ tax identifier.
//!
//! ContaLeve clients and suppliers can be either individuals (CPF) or
//! companies (CNPJ); forms accept both in a single field and dispatch on the
//! number of digits typed.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::cnpj::{Cnpj, CnpjError};
use super::cpf::{Cpf, CpfError};
use super::digits_of;

/// Errors that can occur when parsing a [`TaxId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxIdError {
    /// The digit count matches neither document kind.
    ///
    /// This is the advisory message shown next to the form field.
    #[error("tax ID must have 11 digits (CPF) or 14 digits (CNPJ), found {found}")]
    WrongLength {
        /// Number of digits extracted from the input.
        found: usize,
    },
    /// The input has 11 digits but is not a valid CPF.
    #[error(transparent)]
    Cpf(#[from] CpfError),
    /// The input has 14 digits but is not a valid CNPJ.
    #[error(transparent)]
    Cnpj(#[from] CnpjError),
}

/// A validated tax identifier: either a [`Cpf`] or a [`Cnpj`].
///
/// ## Examples
///
/// ```
/// use conta_leve_core::TaxId;
///
/// let person = TaxId::parse("111.444.777-35").unwrap();
/// assert!(matches!(person, TaxId::Cpf(_)));
///
/// let company = TaxId::parse("11.222.333/0001-81").unwrap();
/// assert!(matches!(company, TaxId::Cnpj(_)));
///
/// // 12 digits is neither document
/// assert!(TaxId::parse("123456789012").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum TaxId {
    /// An individual (11 digits).
    Cpf(Cpf),
    /// A company (14 digits).
    Cnpj(Cnpj),
}

impl TaxId {
    /// Parse a `TaxId` from a string, dispatching on the extracted digit
    /// count: 11 digits validate as CPF, 14 as CNPJ.
    ///
    /// # Errors
    ///
    /// Returns [`TaxIdError::WrongLength`] for any other digit count, or the
    /// underlying document error when the checksum fails.
    pub fn parse(s: &str) -> Result<Self, TaxIdError> {
        match digits_of(s).len() {
            Cpf::LENGTH => Ok(Self::Cpf(Cpf::parse(s)?)),
            Cnpj::LENGTH => Ok(Self::Cnpj(Cnpj::parse(s)?)),
            found => Err(TaxIdError::WrongLength { found }),
        }
    }

    /// Check whether `s` contains a valid CPF or CNPJ.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Returns the canonical digits of the underlying document.
    #[must_use]
    pub fn as_digits(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_digits(),
            Self::Cnpj(cnpj) => cnpj.as_digits(),
        }
    }

    /// Formats with the underlying document's canonical mask.
    #[must_use]
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }

    /// `true` when this identifier belongs to an individual.
    #[must_use]
    pub const fn is_individual(&self) -> bool {
        matches!(self, Self::Cpf(_))
    }

    /// `true` when this identifier belongs to a company.
    #[must_use]
    pub const fn is_company(&self) -> bool {
        matches!(self, Self::Cnpj(_))
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for TaxId {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Cpf> for TaxId {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for TaxId {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}

// Serde goes through the canonical digit string: deserialization has to
// re-dispatch on digit count, so it validates as a side effect.
impl TryFrom<String> for TaxId {
    type Error = TaxIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TaxId> for String {
    fn from(id: TaxId) -> Self {
        id.as_digits().to_owned()
    }
}
