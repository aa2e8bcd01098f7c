//! Swedish personnummer, organisationsnummer and VAT numbers.

use chrono::{Datelike, Local, NaiveDate};

use super::luhn::luhn_is_valid;
use super::outcome::IdValidation;

/// Validate a Swedish personal identity number against today's date.
///
/// See [`validate_swedish_personal_number_on`].
pub fn validate_swedish_personal_number(input: &str) -> IdValidation {
    validate_swedish_personal_number_on(input, Local::now().date_naive())
}

/// Validate a Swedish personal identity number, resolving two-digit years
/// relative to `today`.
///
/// Accepted shapes are `YYMMDDNNNN`, `YYMMDD-NNNN`, `YYMMDD+NNNN`,
/// `YYYYMMDDNNNN` and `YYYYMMDD-NNNN`. A `+` moves the century back by one
/// (the holder is 100 or older). For the two-digit form a year above the
/// current two-digit year belongs to the previous century.
///
/// The birth date is only checked when the century is 18, 19 or 20 and the
/// month is at most 12; organisation numbers (month ≥ 20) pass through to
/// the check digit. The Luhn test runs on the last ten digits.
pub fn validate_swedish_personal_number_on(input: &str, today: NaiveDate) -> IdValidation {
    let len = input.chars().count();
    if !(10..=13).contains(&len) {
        return IdValidation::InvalidLength;
    }

    let separators = input.chars().filter(|c| matches!(c, '-' | '+')).count();
    if separators > 1 {
        return IdValidation::InvalidControlCharacterCount;
    }
    let plus = input.contains('+');

    let digits: String = input.chars().filter(|c| !matches!(c, '-' | '+')).collect();
    if digits.len() != 10 && digits.len() != 12 {
        return IdValidation::InvalidLength;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return IdValidation::Invalid;
    }

    let number = |range: std::ops::Range<usize>| -> i32 {
        digits[range]
            .bytes()
            .fold(0, |acc, b| acc * 10 + i32::from(b - b'0'))
    };

    let (mut century, year_of_century) = if digits.len() == 12 {
        (number(0..2), number(2..4))
    } else {
        let yy = number(0..2);
        let current_century = today.year() / 100;
        if yy > today.year() % 100 {
            (current_century - 1, yy)
        } else {
            (current_century, yy)
        }
    };
    if plus {
        century -= 1;
    }

    let tail = &digits[digits.len() - 10..];
    let month = number(digits.len() - 8..digits.len() - 6);
    let day = number(digits.len() - 6..digits.len() - 4);

    // Other centuries and month values skip the date check on purpose
    if matches!(century, 18..=20) && month <= 12 {
        let year = century * 100 + year_of_century;
        if NaiveDate::from_ymd_opt(year, month as u32, day as u32).is_none() {
            return IdValidation::InvalidDate;
        }
    }

    if luhn_is_valid(tail) {
        IdValidation::Valid
    } else {
        IdValidation::Invalid
    }
}

/// Validate a Swedish organisation number (`NNNNNN-NNNN`).
///
/// Organisation numbers share the personal number layout and check digit.
pub fn validate_swedish_organisation_number(input: &str) -> IdValidation {
    validate_swedish_personal_number(input)
}

pub fn validate_swedish_organisation_number_on(input: &str, today: NaiveDate) -> IdValidation {
    validate_swedish_personal_number_on(input, today)
}

/// Validate a Swedish VAT number: `SE` + 10-digit organisation number + `01`.
pub fn validate_swedish_vat(input: &str) -> IdValidation {
    validate_swedish_vat_on(input, Local::now().date_naive())
}

pub fn validate_swedish_vat_on(input: &str, today: NaiveDate) -> IdValidation {
    if input.chars().count() != 14 {
        return IdValidation::InvalidLength;
    }
    if !input.is_ascii() || !input.starts_with("SE") || !input.ends_with("01") {
        return IdValidation::Invalid;
    }
    validate_swedish_organisation_number_on(&input[2..12], today)
}
