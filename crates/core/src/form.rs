//! Keystroke-level input masks for form fields.
//!
//! Every function here is pure, total, and safe to run on each keystroke:
//! non-digit input degrades to a shorter (possibly empty) string instead of
//! an error, and re-masking already-masked text is a no-op. The admin panel
//! binds these directly to text fields; the CLI reuses them for batch
//! cleanup.

use rust_decimal::Decimal;

/// Extract up to `max` digits from the input, as a string.
fn digit_string(input: &str, max: usize) -> String {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .take(max)
        .map(char::from)
        .collect()
}

/// Insert `.` as a thousands separator every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Render a decimal with two fraction digits in the localized form
/// (`1.234,56`). Shared by [`currency_display`] and `Amount`'s `Display`.
pub(crate) fn localize_decimal(value: Decimal) -> String {
    let mut scaled = value;
    scaled.rescale(2);
    let text = scaled.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("{sign}{},{cents}", group_thousands(whole))
}

/// Progressive CPF mask: `NNN.NNN.NNN-NN`, truncating at 11 digits.
#[must_use]
pub fn cpf(input: &str) -> String {
    let digits = digit_string(input, 11);
    let mut out = String::with_capacity(14);
    for (i, c) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Progressive CNPJ mask: `NN.NNN.NNN/NNNN-NN`, truncating at 14 digits.
#[must_use]
pub fn cnpj(input: &str) -> String {
    let digits = digit_string(input, 14);
    let mut out = String::with_capacity(18);
    for (i, c) in digits.chars().enumerate() {
        match i {
            2 | 5 => out.push('.'),
            8 => out.push('/'),
            12 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Combined CPF/CNPJ mask: CPF-style while the input holds at most 11
/// digits, CNPJ-style once it grows beyond that.
#[must_use]
pub fn tax_id(input: &str) -> String {
    let count = input.bytes().filter(u8::is_ascii_digit).count();
    if count <= 11 { cpf(input) } else { cnpj(input) }
}

/// Progressive CEP mask: `NNNNN-NNN`, truncating at 8 digits.
#[must_use]
pub fn cep(input: &str) -> String {
    let digits = digit_string(input, 8);
    let mut out = String::with_capacity(9);
    for (i, c) in digits.chars().enumerate() {
        if i == 5 {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// Progressive phone mask: `(NN) NNNN-NNNN` for 10-digit landlines,
/// `(NN) NNNNN-NNNN` for 11-digit mobiles, truncating at 11 digits.
///
/// While typing: one or two digits are returned as-is, and the hyphen only
/// appears once the local number starts to need it.
#[must_use]
pub fn phone(input: &str) -> String {
    let digits = digit_string(input, 11);
    let len = digits.len();
    if len <= 2 {
        return digits;
    }
    let (area, rest) = digits.split_at(2);
    if len <= 6 {
        return format!("({area}) {rest}");
    }
    let prefix_len = if len <= 10 { 4 } else { 5 };
    let (prefix, suffix) = rest.split_at(prefix_len);
    format!("({area}) {prefix}-{suffix}")
}

/// State (UF) field mask: letters only, uppercased, truncated to two
/// characters.
#[must_use]
pub fn uf(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .take(2)
        .collect()
}

/// Name field mask: keep letters (accented Portuguese included) and
/// whitespace, drop everything else.
#[must_use]
pub fn letters(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect()
}

/// Currency input mask: digits are read as centavos, so `"150"` becomes
/// `"1,50"` and `"12345"` becomes `"123,45"`. Input with no digits at all
/// masks to the empty string.
#[must_use]
pub fn currency(input: &str) -> String {
    let digits: String = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(char::from)
        .collect();
    if digits.is_empty() {
        return String::new();
    }
    let padded = format!("{digits:0>3}");
    let (whole, cents) = padded.split_at(padded.len() - 2);
    let whole = whole.trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    format!("{},{cents}", group_thousands(whole))
}

/// Parse a masked currency string back into a decimal amount.
///
/// Grouping dots are stripped and the comma decimal separator mapped to a
/// dot; anything that still fails to parse yields zero, so a half-typed
/// field never breaks the form state.
#[must_use]
pub fn parse_currency(input: &str) -> Decimal {
    let normalized = input.trim().replace('.', "").replace(',', ".");
    normalized.parse().unwrap_or(Decimal::ZERO)
}

/// Render an amount for a form field: localized two-fraction-digit form,
/// except that exactly zero renders as the empty string.
///
/// Zero-as-empty is a product convention: a zero amount means "unset" in
/// ContaLeve forms, and an empty field reads better than `0,00`. Callers
/// that want a literal zero should go through `Amount`'s `Display` instead.
#[must_use]
pub fn currency_display(value: Decimal) -> String {
    if value.is_zero() {
        return String::new();
    }
    localize_decimal(value)
}
