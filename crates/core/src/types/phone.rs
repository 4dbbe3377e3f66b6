//! Brazilian phone number type.
//!
//! Phone numbers carry a two-digit area code followed by an 8-digit landline
//! number or a 9-digit mobile number, displayed as `(NN) NNNN-NNNN` or
//! `(NN) NNNNN-NNNN`.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::digits_of;

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input does not contain 10 or 11 digits.
    #[error("phone must have 10 digits (landline) or 11 digits (mobile), found {found}")]
    WrongLength {
        /// Number of digits extracted from the input.
        found: usize,
    },
}

/// A Brazilian phone number (area code plus local number).
///
/// ## Examples
///
/// ```
/// use conta_leve_core::Phone;
///
/// let mobile = Phone::parse("(11) 99999-8888").unwrap();
/// assert!(mobile.is_mobile());
/// assert_eq!(mobile.area_code(), "11");
///
/// let landline = Phone::parse("1133334444").unwrap();
/// assert_eq!(landline.formatted(), "(11) 3333-4444");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Digit count of a landline number (area code included).
    pub const LANDLINE_LENGTH: usize = 10;
    /// Digit count of a mobile number (area code included).
    pub const MOBILE_LENGTH: usize = 11;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not extract to 10 or 11 digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let digits = digits_of(s);
        if digits.len() != Self::LANDLINE_LENGTH && digits.len() != Self::MOBILE_LENGTH {
            return Err(PhoneError::WrongLength {
                found: digits.len(),
            });
        }
        Ok(Self(digits.iter().map(|d| char::from(b'0' + d)).collect()))
    }

    /// Check whether `s` contains a valid phone number.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        let count = digits_of(s).len();
        count == Self::LANDLINE_LENGTH || count == Self::MOBILE_LENGTH
    }

    /// Returns the canonical digits as a string slice.
    #[must_use]
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns the canonical digit string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The two-digit area code.
    #[must_use]
    pub fn area_code(&self) -> &str {
        self.0.get(..2).unwrap_or("")
    }

    /// `true` for 11-digit (mobile) numbers.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.0.len() == Self::MOBILE_LENGTH
    }

    /// Formats as `(NN) NNNN-NNNN` or `(NN) NNNNN-NNNN`.
    #[must_use]
    pub fn formatted(&self) -> String {
        crate::form::phone(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "postgres")]
super::impl_pg_text!(Phone);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(Phone::parse("11999998888").is_ok());
        assert!(Phone::parse("(11) 99999-8888").is_ok());
        assert!(Phone::parse("1133334444").is_ok());
        assert!(Phone::parse("(11) 3333-4444").is_ok());
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(matches!(
            Phone::parse("113333444"),
            Err(PhoneError::WrongLength { found: 9 })
        ));
        assert!(matches!(
            Phone::parse("119999988880"),
            Err(PhoneError::WrongLength { found: 12 })
        ));
        assert!(matches!(
            Phone::parse(""),
            Err(PhoneError::WrongLength { found: 0 })
        ));
    }

    #[test]
    fn test_mobile_detection() {
        let mobile = Phone::parse("11999998888").unwrap();
        assert!(mobile.is_mobile());
        let landline = Phone::parse("1133334444").unwrap();
        assert!(!landline.is_mobile());
    }

    #[test]
    fn test_area_code_and_format() {
        let phone = Phone::parse("(11) 99999-8888").unwrap();
        assert_eq!(phone.area_code(), "11");
        assert_eq!(phone.formatted(), "(11) 99999-8888");
        assert_eq!(
            Phone::parse("1133334444").unwrap().to_string(),
            "(11) 3333-4444"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let phone = Phone::parse("(11) 99999-8888").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"11999998888\"");
        let back: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone);
    }
}
