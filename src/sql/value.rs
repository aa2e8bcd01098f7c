use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A value to be written into a column, before dialect rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Expression inserted verbatim, unquoted (`NULL`, `GETDATE()`, `a.col + 1`).
    Raw(String),
    DateTime(NaiveDateTime),
    Int(i64),
    Bool(bool),
    /// Rendered with `.` as decimal separator; must be finite.
    Float(f64),
    Decimal(Decimal),
    Char(char),
    Text(String),
    Guid(Uuid),
}

impl SqlValue {
    /// A raw expression.
    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    /// SQL `NULL`.
    pub fn null() -> Self {
        Self::Raw(super::literal::NULL.to_string())
    }

    /// Short kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Raw(_) => "expression",
            Self::DateTime(_) => "date-time",
            Self::Int(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::Char(_) => "char",
            Self::Text(_) => "string",
            Self::Guid(_) => "guid",
        }
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Decimal> for SqlValue {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<char> for SqlValue {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(v: NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

/// Dates are written as midnight of that day.
impl From<NaiveDate> for SqlValue {
    fn from(v: NaiveDate) -> Self {
        Self::DateTime(v.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<Uuid> for SqlValue {
    fn from(v: Uuid) -> Self {
        Self::Guid(v)
    }
}
