//! Monetary amount type.
//!
//! ContaLeve amounts are non-negative BRL values with exactly two fraction
//! digits, displayed in the localized form `1.234,56` (dot grouping, comma
//! decimal separator).

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when building an [`Amount`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The value is below zero.
    #[error("amount cannot be negative")]
    Negative,
    /// The value has more than two fraction digits.
    #[error("amount cannot have more than two fraction digits")]
    TooPrecise,
    /// The input string is not a localized decimal amount.
    #[error("invalid amount: {input:?}")]
    Invalid {
        /// The rejected input.
        input: String,
    },
}

/// A non-negative monetary amount with two fraction digits.
///
/// ## Examples
///
/// ```
/// use conta_leve_core::Amount;
///
/// let amount: Amount = "1.234,56".parse().unwrap();
/// assert_eq!(amount.centavos(), 123_456);
/// assert_eq!(amount.to_string(), "1.234,56");
///
/// assert!("-10,00".parse::<Amount>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an `Amount` from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or carries more than two
    /// fraction digits.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative);
        }
        if value != value.round_dp(2) {
            return Err(AmountError::TooPrecise);
        }
        let mut value = value;
        value.rescale(2);
        Ok(Self(value))
    }

    /// Create an `Amount` from a whole number of centavos.
    #[must_use]
    pub fn from_centavos(centavos: u64) -> Self {
        Self(Decimal::from_i128_with_scale(i128::from(centavos), 2))
    }

    /// The amount as a whole number of centavos.
    #[must_use]
    pub fn centavos(&self) -> u64 {
        // Non-negative with scale 2 by construction
        u64::try_from(self.0.mantissa()).unwrap_or(0)
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// `true` when the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::form::localize_decimal(self.0))
    }
}

impl std::str::FromStr for Amount {
    type Err = AmountError;

    /// Parses the localized display form (`1.234,56`), with the grouping
    /// dots optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('.', "").replace(',', ".");
        if normalized.is_empty() {
            return Err(AmountError::Invalid {
                input: s.to_owned(),
            });
        }
        let value: Decimal = normalized.parse().map_err(|_| AmountError::Invalid {
            input: s.to_owned(),
        })?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Amount {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Amount {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let value = <Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::new(value)?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Amount {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        // -0.01 and -100
        assert!(matches!(
            Amount::new(Decimal::new(-1, 2)),
            Err(AmountError::Negative)
        ));
        assert!(matches!(
            Amount::new(Decimal::new(-100, 0)),
            Err(AmountError::Negative)
        ));
    }

    #[test]
    fn test_new_rejects_excess_precision() {
        // 1.234 has three fraction digits
        assert!(matches!(
            Amount::new(Decimal::new(1234, 3)),
            Err(AmountError::TooPrecise)
        ));
    }

    #[test]
    fn test_new_normalizes_scale() {
        let amount = Amount::new(Decimal::new(5, 0)).unwrap();
        assert_eq!(amount.to_string(), "5,00");
        assert_eq!(amount.centavos(), 500);
    }

    #[test]
    fn test_from_centavos() {
        assert_eq!(Amount::from_centavos(123_456).to_string(), "1.234,56");
        assert_eq!(Amount::from_centavos(1).to_string(), "0,01");
        assert_eq!(Amount::from_centavos(0), Amount::ZERO);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Amount::from_centavos(100).to_string(), "1,00");
        assert_eq!(Amount::from_centavos(100_000_000).to_string(), "1.000.000,00");
        // Display always renders zero; the form layer decides whether to
        // show it at all
        assert_eq!(Amount::ZERO.to_string(), "0,00");
    }

    #[test]
    fn test_from_str_localized() {
        let amount: Amount = "1.234,56".parse().unwrap();
        assert_eq!(amount.centavos(), 123_456);
        // Grouping dots are optional
        assert_eq!("1234,56".parse::<Amount>().unwrap(), amount);
        assert!("".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
        assert!("-10,00".parse::<Amount>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let amount = Amount::from_centavos(987_654_321);
        let shown = amount.to_string();
        assert_eq!(shown.parse::<Amount>().unwrap(), amount);
    }

    #[test]
    fn test_serde_round_trip() {
        let amount = Amount::from_centavos(123_456);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"1234.56\"");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
        // Validation applies on the way in
        assert!(serde_json::from_str::<Amount>("\"-1.00\"").is_err());
    }
}
