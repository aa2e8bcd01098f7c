//! Luhn (mod 10) check digits.
//!
//! Digits are weighted left to right with alternating multipliers 1 and 2;
//! a product above 9 has 9 subtracted. The starting multiplier depends on
//! the digit count, so that the check digit position always gets weight 1.

fn digits(s: &str) -> Option<Vec<u32>> {
    if s.is_empty() {
        return None;
    }
    s.chars().map(|c| c.to_digit(10)).collect()
}

fn weighted_sum(digits: &[u32], mut multiplier: u32) -> u32 {
    let mut sum = 0;
    for d in digits {
        let mut product = d * multiplier;
        if product > 9 {
            product -= 9;
        }
        sum += product;
        multiplier = if multiplier == 1 { 2 } else { 1 };
    }
    sum
}

/// Check digit to append to `digits`, `None` for empty or non-digit input.
///
/// ```
/// assert_eq!(sekit::checksum::luhn_checksum("7992739871"), Some(3));
/// ```
pub fn luhn_checksum(digits_str: &str) -> Option<u32> {
    let ds = digits(digits_str)?;
    let start = if ds.len() % 2 == 0 { 1 } else { 2 };
    let sum = weighted_sum(&ds, start);
    Some((10 - sum % 10) % 10)
}

/// Whether a complete number (check digit last) passes the Luhn test.
pub fn luhn_is_valid(number: &str) -> bool {
    let Some(ds) = digits(number) else {
        return false;
    };
    let start = if ds.len() % 2 == 1 { 1 } else { 2 };
    weighted_sum(&ds, start) % 10 == 0
}

/// `digits` with its check digit appended.
pub fn luhn_append(digits_str: &str) -> Option<String> {
    let check = luhn_checksum(digits_str)?;
    Some(format!("{digits_str}{check}"))
}
