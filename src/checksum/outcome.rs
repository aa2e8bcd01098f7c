use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of an identity-number validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdValidation {
    Valid,
    /// Too short, too long, or the wrong number of digits after stripping separators.
    InvalidLength,
    /// The embedded birth date does not exist.
    InvalidDate,
    /// More than one `-`/`+` separator.
    InvalidControlCharacterCount,
    /// Wrong check digit, wrong prefix/suffix, or non-numeric content.
    Invalid,
}

impl IdValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for IdValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Valid => "valid",
            Self::InvalidLength => "invalid length",
            Self::InvalidDate => "invalid date",
            Self::InvalidControlCharacterCount => "too many separators",
            Self::Invalid => "invalid",
        };
        f.write_str(text)
    }
}
