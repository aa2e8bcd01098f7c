use crate::core::{SeError, is_eu_member};

use super::finnish::validate_finnish_vat;
use super::outcome::IdValidation;
use super::swedish::validate_swedish_vat;

/// Validate a VAT number by its two-letter country prefix.
///
/// Swedish and Finnish numbers are checked in full. Other EU prefixes are
/// reported as [`SeError::Unsupported`]; anything else is
/// [`IdValidation::Invalid`]. Surrounding whitespace and case are ignored.
pub fn validate_vat_number(input: &str) -> Result<IdValidation, SeError> {
    let normalized = input.trim().to_ascii_uppercase();
    let Some(prefix) = normalized.get(..2) else {
        return Ok(IdValidation::InvalidLength);
    };

    match prefix {
        "SE" => Ok(validate_swedish_vat(&normalized)),
        "FI" => Ok(validate_finnish_vat(&normalized)),
        p if is_eu_member(p) => Err(SeError::Unsupported(format!(
            "VAT number check digits for country {p}"
        ))),
        _ => Ok(IdValidation::Invalid),
    }
}
