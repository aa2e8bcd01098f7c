//! `ALTER TABLE ... ADD` for extension columns.

use serde::{Deserialize, Serialize};

use crate::core::{Dialect, SeError};

/// Column types the extension tables use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Int,
    Decimal,
    /// Variable-length text of the given maximum length.
    Varchar(u32),
    /// Fixed-length text of the given length.
    Char(u32),
    DateTime,
    Guid,
    Bool,
}

impl ColumnType {
    /// Parse a type code as stored in extension metadata.
    ///
    /// Text types need a positive `length`; `char` defaults to 1.
    pub fn from_code(code: &str, length: Option<u32>) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Some(Self::Int),
            "decimal" | "money" => Some(Self::Decimal),
            "varchar" | "string" => length.filter(|l| *l > 0).map(Self::Varchar),
            "char" => Some(Self::Char(length.filter(|l| *l > 0).unwrap_or(1))),
            "datetime" | "date" => Some(Self::DateTime),
            "guid" => Some(Self::Guid),
            "bool" | "bit" => Some(Self::Bool),
            _ => None,
        }
    }

    /// Column type as written in DDL for `dialect`.
    pub fn sql_type(&self, dialect: Dialect) -> String {
        match (self, dialect) {
            (Self::Int, Dialect::Oracle) => "NUMBER(10)".into(),
            (Self::Int, _) => "int".into(),
            (Self::Decimal, Dialect::Oracle) => "NUMBER(28,8)".into(),
            (Self::Decimal, _) => "decimal(28,8)".into(),
            (Self::Varchar(n), Dialect::Oracle) => format!("VARCHAR2({n})"),
            (Self::Varchar(n), Dialect::SqlServer) => format!("nvarchar({n})"),
            (Self::Varchar(n), Dialect::Asql) => format!("varchar({n})"),
            (Self::Char(n), Dialect::Oracle) => format!("CHAR({n})"),
            (Self::Char(n), _) => format!("char({n})"),
            (Self::DateTime, Dialect::Oracle) => "DATE".into(),
            (Self::DateTime, _) => "datetime".into(),
            (Self::Guid, Dialect::Oracle) => "RAW(16)".into(),
            (Self::Guid, Dialect::SqlServer) => "uniqueidentifier".into(),
            (Self::Guid, Dialect::Asql) => "guid".into(),
            (Self::Bool, Dialect::Oracle) => "NUMBER(1)".into(),
            (Self::Bool, _) => "bit".into(),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Build `ALTER TABLE <table> ADD <column> <type> NULL`.
///
/// Unknown type codes fail with [`SeError::Unsupported`] naming the type,
/// table and column; malformed names fail with [`SeError::InvalidInput`].
pub fn add_column_statement(
    dialect: Dialect,
    table: &str,
    column: &str,
    type_code: &str,
    length: Option<u32>,
) -> Result<String, SeError> {
    for name in [table, column] {
        if !is_identifier(name) {
            return Err(SeError::invalid_input("add column", name));
        }
    }

    let column_type = ColumnType::from_code(type_code, length).ok_or_else(|| {
        SeError::Unsupported(format!(
            "column type '{type_code}' for {table}.{column}"
        ))
    })?;

    let sql_type = column_type.sql_type(dialect);
    Ok(match dialect {
        Dialect::Oracle => format!("ALTER TABLE {table} ADD ({column} {sql_type} NULL)"),
        _ => format!("ALTER TABLE {table} ADD {column} {sql_type} NULL"),
    })
}
