//! Bank-day masks and the direction policy for moving off closed days.
//!
//! A mask is a string with one character per day of the year: `'1'` marks
//! a non-banking day, `'0'` a banking day. Index 0 is 1 January.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::SeError;

/// Masks shorter than this are treated as missing.
pub const MIN_MASK_LEN: usize = 365;

/// Accounts payable or receivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApArType {
    /// Supplier side.
    Payable,
    /// Customer side.
    Receivable,
}

impl ApArType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Payable => "P",
            Self::Receivable => "R",
        }
    }
}

/// Which way a due date moves when it lands on a non-banking day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AdjustmentPolicy {
    /// `<`: move to the previous banking day.
    Earlier,
    /// `>`: move to the next banking day.
    Later,
    /// `X` or anything else: leave the date alone.
    #[default]
    NoAdjustment,
}

impl AdjustmentPolicy {
    pub fn from_char(c: char) -> Self {
        match c {
            '<' => Self::Earlier,
            '>' => Self::Later,
            _ => Self::NoAdjustment,
        }
    }

    /// First character of a stored parameter value; blank means no adjustment.
    pub fn from_value(value: &str) -> Self {
        value
            .trim()
            .chars()
            .next()
            .map(Self::from_char)
            .unwrap_or_default()
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Earlier => '<',
            Self::Later => '>',
            Self::NoAdjustment => 'X',
        }
    }

    /// Day step in the policy direction, `None` for no adjustment.
    pub fn step(&self) -> Option<i64> {
        match self {
            Self::Earlier => Some(-1),
            Self::Later => Some(1),
            Self::NoAdjustment => None,
        }
    }
}

/// Whether `mask` marks `date` as non-banking. Dates past the end of the
/// mask count as banking days.
pub fn is_non_banking(mask: &str, date: NaiveDate) -> bool {
    mask.as_bytes().get(date.ordinal0() as usize) == Some(&b'1')
}

/// One year of banking-day flags, for building and checking masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankDayCalendar {
    year: i32,
    closed: Vec<bool>,
}

impl BankDayCalendar {
    /// A calendar where every day is a banking day.
    pub fn open(year: i32) -> Self {
        let days = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
            366
        } else {
            365
        };
        Self {
            year,
            closed: vec![false; days],
        }
    }

    /// A calendar with Saturdays and Sundays closed.
    pub fn weekends(year: i32) -> Self {
        let mut cal = Self::open(year);
        for (i, closed) in cal.closed.iter_mut().enumerate() {
            if let Some(d) = NaiveDate::from_yo_opt(year, i as u32 + 1) {
                *closed = matches!(d.weekday(), Weekday::Sat | Weekday::Sun);
            }
        }
        cal
    }

    /// Parse a stored mask for `year`.
    pub fn parse(year: i32, mask: &str) -> Result<Self, SeError> {
        let expected = Self::open(year).closed.len();
        if mask.len() < MIN_MASK_LEN || mask.len() > expected {
            return Err(SeError::malformed(format!("bank day mask {year}"), mask));
        }
        let closed = mask
            .bytes()
            .map(|b| match b {
                b'0' => Ok(false),
                b'1' => Ok(true),
                _ => Err(SeError::malformed(format!("bank day mask {year}"), mask)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { year, closed })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Mark a day as non-banking; dates in other years are ignored.
    pub fn close(&mut self, date: NaiveDate) -> &mut Self {
        if date.year() == self.year {
            if let Some(flag) = self.closed.get_mut(date.ordinal0() as usize) {
                *flag = true;
            }
        }
        self
    }

    /// `None` for dates outside this calendar's year or mask.
    pub fn is_banking_day(&self, date: NaiveDate) -> Option<bool> {
        if date.year() != self.year {
            return None;
        }
        self.closed.get(date.ordinal0() as usize).map(|closed| !closed)
    }

    pub fn to_mask(&self) -> String {
        self.closed
            .iter()
            .map(|closed| if *closed { '1' } else { '0' })
            .collect()
    }
}
