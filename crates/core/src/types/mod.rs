//! Core types for ContaLeve.
//!
//! This module provides type-safe wrappers for the Brazilian identifiers and
//! monetary values that flow through every ContaLeve form.

pub mod cep;
pub mod cnpj;
pub mod cpf;
pub mod money;
pub mod phone;
pub mod tax_id;

pub use cep::{Cep, CepError};
pub use cnpj::{Cnpj, CnpjError};
pub use cpf::{Cpf, CpfError};
pub use money::{Amount, AmountError};
pub use phone::{Phone, PhoneError};
pub use tax_id::{TaxId, TaxIdError};

/// Extract the ASCII digits from arbitrary user input.
///
/// Punctuation, whitespace, and anything else that is not an ASCII digit is
/// discarded. This is the first step of every document validator in this
/// crate.
pub(crate) fn digits_of(input: &str) -> Vec<u8> {
    // UTF-8 continuation and lead bytes are all >= 0x80, so filtering raw
    // bytes can never pick a digit out of a multi-byte character.
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Implement the `sqlx` TEXT codec for a digits-backed document newtype.
///
/// The database stores the canonical digit string; values read back from the
/// database are assumed valid.
#[cfg(feature = "postgres")]
macro_rules! impl_pg_text {
    ($name:ident) => {
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <String as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                <String as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                let s = <String as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
                // Database values are assumed valid
                Ok(Self(s))
            }
        }

        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError>
            {
                <String as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
}

#[cfg(feature = "postgres")]
pub(crate) use impl_pg_text;
