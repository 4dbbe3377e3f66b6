//! Integration tests simulating keystroke-by-keystroke form input.
//!
//! The admin panel re-masks the whole field value on every keystroke, so the
//! masks must behave well on every prefix of the input and on their own
//! output.

use conta_leve_core::form;

/// Feed `input` one character at a time through `mask`, re-masking the
/// accumulated field value each time, and return the final field value.
fn type_through(mask: fn(&str) -> String, input: &str) -> String {
    let mut field = String::new();
    for c in input.chars() {
        field.push(c);
        field = mask(&field);
    }
    field
}

#[test]
fn test_typing_a_cpf() {
    assert_eq!(type_through(form::cpf, "11144477735"), "111.444.777-35");
}

#[test]
fn test_typing_a_cnpj() {
    assert_eq!(
        type_through(form::cnpj, "11222333000181"),
        "11.222.333/0001-81"
    );
}

#[test]
fn test_typing_through_the_combined_mask() {
    // While the count stays at 11 digits the field looks like a CPF...
    assert_eq!(type_through(form::tax_id, "11222333000"), "112.223.330-00");
    // ...and reflows to the CNPJ shape when the 12th digit arrives
    assert_eq!(
        type_through(form::tax_id, "112223330001"),
        "11.222.333/0001"
    );
    assert_eq!(
        type_through(form::tax_id, "11222333000181"),
        "11.222.333/0001-81"
    );
}

#[test]
fn test_typing_a_phone() {
    assert_eq!(type_through(form::phone, "1133334444"), "(11) 3333-4444");
    assert_eq!(type_through(form::phone, "11999998888"), "(11) 99999-8888");
}

#[test]
fn test_typing_an_amount() {
    // Currency input reads digits as centavos as they arrive
    let mut field = String::new();
    let mut seen = Vec::new();
    for c in "12345".chars() {
        field.push(c);
        field = form::currency(&field);
        seen.push(field.clone());
    }
    assert_eq!(seen, ["0,01", "0,12", "1,23", "12,34", "123,45"]);
}

#[test]
fn test_every_prefix_masks_idempotently() {
    let samples: [(fn(&str) -> String, &str); 4] = [
        (form::cpf, "11144477735"),
        (form::cnpj, "11222333000181"),
        (form::cep, "01310930"),
        (form::phone, "11999998888"),
    ];
    for (mask, digits) in samples {
        for end in 0..=digits.len() {
            let prefix = &digits[..end];
            let once = mask(prefix);
            assert_eq!(mask(&once), once, "re-masking {prefix:?} must be a no-op");
        }
    }
}

#[test]
fn test_pasted_input_with_punctuation() {
    // Pasting an already-punctuated value into an empty field
    assert_eq!(form::cpf("111.444.777-35"), "111.444.777-35");
    assert_eq!(form::cep("CEP 01310-930"), "01310-930");
    assert_eq!(form::uf(" sp "), "SP");
    assert_eq!(form::letters("São Paulo 123"), "São Paulo ");
}
