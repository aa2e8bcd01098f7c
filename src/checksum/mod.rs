//! Check digits and Nordic identity numbers.
//!
//! Pure functions without I/O. Malformed input never errors; it yields an
//! [`IdValidation`] other than `Valid`.
//!
//! # Example
//!
//! ```
//! use sekit::checksum::*;
//!
//! assert!(luhn_is_valid("6712241238"));
//! assert_eq!(validate_swedish_vat("SE556036079301"), IdValidation::Valid);
//! assert_eq!(validate_finnish_organisation_number("01120389"), IdValidation::Valid);
//! assert_eq!(
//!     validate_swedish_personal_number("12-1212-1212"),
//!     IdValidation::InvalidControlCharacterCount
//! );
//! ```

mod finnish;
mod luhn;
mod outcome;
mod swedish;
mod vat;

pub use finnish::{
    FINNISH_CHECK_ALPHABET, FINNISH_ORG_WEIGHTS, finnish_organisation_check_digit,
    finnish_personal_check_char, validate_finnish_organisation_number,
    validate_finnish_personal_number, validate_finnish_vat,
};
pub use luhn::{luhn_append, luhn_checksum, luhn_is_valid};
pub use outcome::IdValidation;
pub use swedish::{
    validate_swedish_organisation_number, validate_swedish_organisation_number_on,
    validate_swedish_personal_number, validate_swedish_personal_number_on, validate_swedish_vat,
    validate_swedish_vat_on,
};
pub use vat::validate_vat_number;
