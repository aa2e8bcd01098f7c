//! Finnish henkilötunnus, Y-tunnus and VAT numbers.

use chrono::NaiveDate;

use super::outcome::IdValidation;

/// Check characters of the personal identity code, indexed by remainder mod 31.
pub const FINNISH_CHECK_ALPHABET: &[u8; 31] = b"0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Weights of the first seven Y-tunnus digits.
pub const FINNISH_ORG_WEIGHTS: [u32; 7] = [7, 9, 10, 5, 8, 4, 2];

/// Check character for the nine digits `DDMMYY` + serial.
pub fn finnish_personal_check_char(nine_digits: &str) -> Option<char> {
    if nine_digits.len() != 9 || !nine_digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u32 = nine_digits.parse().ok()?;
    Some(FINNISH_CHECK_ALPHABET[(n % 31) as usize] as char)
}

/// Validate a Finnish personal identity code `DDMMYYCNNNX`.
///
/// The century marker `C` is `+` (1800s), `-` (1900s) or `A` (2000s).
/// The check character `X` is looked up from [`FINNISH_CHECK_ALPHABET`].
pub fn validate_finnish_personal_number(input: &str) -> IdValidation {
    if input.chars().count() != 11 {
        return IdValidation::InvalidLength;
    }
    if !input.is_ascii() {
        return IdValidation::Invalid;
    }
    let upper = input.to_ascii_uppercase();
    let (date_part, rest) = upper.split_at(6);
    let (marker, rest) = rest.split_at(1);
    let (serial, check) = rest.split_at(3);

    let century = match marker {
        "+" => 1800,
        "-" => 1900,
        "A" => 2000,
        _ => return IdValidation::Invalid,
    };

    let nine = format!("{date_part}{serial}");
    let Some(expected) = finnish_personal_check_char(&nine) else {
        return IdValidation::Invalid;
    };

    let field = |range: std::ops::Range<usize>| -> u32 {
        date_part[range]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    };
    let (day, month, yy) = (field(0..2), field(2..4), field(4..6));
    if NaiveDate::from_ymd_opt(century + yy as i32, month, day).is_none() {
        return IdValidation::InvalidDate;
    }

    if check.chars().next() == Some(expected) {
        IdValidation::Valid
    } else {
        IdValidation::Invalid
    }
}

/// Check digit for the first seven Y-tunnus digits, `None` when the
/// remainder is 1 (no valid number exists) or the input is malformed.
pub fn finnish_organisation_check_digit(seven_digits: &str) -> Option<u32> {
    if seven_digits.len() != 7 {
        return None;
    }
    let mut sum = 0;
    for (c, weight) in seven_digits.chars().zip(FINNISH_ORG_WEIGHTS) {
        sum += c.to_digit(10)? * weight;
    }
    match sum % 11 {
        0 => Some(0),
        1 => None,
        r => Some(11 - r),
    }
}

/// Validate a Finnish business ID (Y-tunnus) written as eight digits.
pub fn validate_finnish_organisation_number(input: &str) -> IdValidation {
    if input.chars().count() != 8 {
        return IdValidation::InvalidLength;
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return IdValidation::Invalid;
    }
    let (body, check) = input.split_at(7);
    match (finnish_organisation_check_digit(body), check.parse::<u32>()) {
        (Some(expected), Ok(actual)) if expected == actual => IdValidation::Valid,
        _ => IdValidation::Invalid,
    }
}

/// Validate a Finnish VAT number: `FI` + eight-digit business ID.
pub fn validate_finnish_vat(input: &str) -> IdValidation {
    if input.chars().count() != 10 {
        return IdValidation::InvalidLength;
    }
    match input.strip_prefix("FI") {
        Some(org) => validate_finnish_organisation_number(org),
        None => IdValidation::Invalid,
    }
}
