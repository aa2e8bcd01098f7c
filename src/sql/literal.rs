//! Dialect-specific literal rendering.

use crate::core::{Dialect, SeError};

use super::value::SqlValue;

/// The SQL `NULL` keyword.
pub const NULL: &str = "NULL";

/// Wrap in single quotes, doubling every embedded quote.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Truncate to at most `max_chars` characters (not bytes).
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// The built-in "current timestamp" expression of a dialect.
pub fn current_timestamp(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Asql => "NOW",
        Dialect::SqlServer => "GETDATE()",
        Dialect::Oracle => "SYSDATE",
    }
}

/// Render a value as a literal for `dialect`.
///
/// Fails for non-finite floats and for GUIDs under Oracle.
pub fn render_literal(dialect: Dialect, value: &SqlValue) -> Result<String, SeError> {
    let literal = match value {
        SqlValue::Raw(expr) => expr.clone(),
        SqlValue::Int(v) => v.to_string(),
        SqlValue::Bool(v) => (if *v { "1" } else { "0" }).to_string(),
        SqlValue::Float(v) => {
            if !v.is_finite() {
                return Err(SeError::invalid_input(
                    format!("render {} literal", value.kind()),
                    v.to_string(),
                ));
            }
            // Display for f64 always uses '.', independent of locale
            v.to_string()
        }
        SqlValue::Decimal(v) => v.normalize().to_string(),
        SqlValue::Char(c) => quote_string(c.encode_utf8(&mut [0; 4])),
        SqlValue::Text(s) => quote_string(s),
        SqlValue::DateTime(dt) => match dialect {
            Dialect::SqlServer => quote_string(&dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            Dialect::Oracle => format!(
                "TO_DATE('{}', 'YYYY-MM-DD HH24:MI:SS')",
                dt.format("%Y-%m-%d %H:%M:%S")
            ),
            Dialect::Asql => format!("TO_DATE('{}')", dt.format("%Y%m%d %H:%M:%S")),
        },
        SqlValue::Guid(id) => match dialect {
            Dialect::SqlServer => quote_string(&id.braced().to_string()),
            Dialect::Asql => format!("TO_GUID('{}')", id.braced()),
            Dialect::Oracle => {
                return Err(SeError::Unsupported(format!(
                    "{} literal {id} in dialect {}",
                    value.kind(),
                    dialect.code()
                )));
            }
        },
    };
    Ok(literal)
}

/// Strip the enclosing quotes of a rendered string literal and undo quote
/// doubling. Anything that is not a quoted literal is returned as is.
pub fn unwrap_literal(rendered: &str) -> String {
    if rendered.len() >= 2 && rendered.starts_with('\'') && rendered.ends_with('\'') {
        rendered[1..rendered.len() - 1].replace("''", "'")
    } else {
        rendered.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn ts() -> SqlValue {
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(13, 45, 7)
            .unwrap()
            .into()
    }

    fn guid() -> Uuid {
        Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap()
    }

    #[test]
    fn quoting_doubles_quotes() {
        assert_eq!(quote_string("O'Brien"), "'O''Brien'");
        assert_eq!(quote_string("''"), "''''''");
        assert_eq!(quote_string(""), "''");
    }

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("åäö", 2), "åä");
        assert_eq!(truncate_chars("ab", 5), "ab");
        assert_eq!(truncate_chars("ab", 0), "");
    }

    #[test]
    fn datetime_per_dialect() {
        assert_eq!(
            render_literal(Dialect::SqlServer, &ts()).unwrap(),
            "'2024-01-10 13:45:07'"
        );
        assert_eq!(
            render_literal(Dialect::Oracle, &ts()).unwrap(),
            "TO_DATE('2024-01-10 13:45:07', 'YYYY-MM-DD HH24:MI:SS')"
        );
        assert_eq!(
            render_literal(Dialect::Asql, &ts()).unwrap(),
            "TO_DATE('20240110 13:45:07')"
        );
    }

    #[test]
    fn guid_per_dialect() {
        let v = SqlValue::Guid(guid());
        assert_eq!(
            render_literal(Dialect::SqlServer, &v).unwrap(),
            "'{67e55044-10b1-426f-9247-bb680e5fe0c8}'"
        );
        assert_eq!(
            render_literal(Dialect::Asql, &v).unwrap(),
            "TO_GUID('{67e55044-10b1-426f-9247-bb680e5fe0c8}')"
        );
        let err = render_literal(Dialect::Oracle, &v).unwrap_err();
        assert!(matches!(err, SeError::Unsupported(_)));
        assert_eq!(
            err.to_string(),
            "not supported: guid literal 67e55044-10b1-426f-9247-bb680e5fe0c8 in dialect ORACLE"
        );
    }

    #[test]
    fn numbers_and_flags() {
        let asql = |v: SqlValue| render_literal(Dialect::Asql, &v);
        assert_eq!(asql(SqlValue::Float(1234.5)).unwrap(), "1234.5");
        assert_eq!(asql(SqlValue::Float(-0.25)).unwrap(), "-0.25");
        assert_eq!(asql(SqlValue::Decimal(dec!(10.500))).unwrap(), "10.5");
        assert_eq!(render_literal(Dialect::Oracle, &true.into()).unwrap(), "1");
        assert_eq!(render_literal(Dialect::Oracle, &false.into()).unwrap(), "0");
        assert_eq!(asql(SqlValue::Int(-7)).unwrap(), "-7");
        assert!(asql(SqlValue::Float(f64::NAN)).is_err());
        assert!(asql(SqlValue::Float(f64::INFINITY)).is_err());
    }

    #[test]
    fn chars_and_raw() {
        assert_eq!(render_literal(Dialect::Asql, &'\''.into()).unwrap(), "''''");
        assert_eq!(render_literal(Dialect::Asql, &'N'.into()).unwrap(), "'N'");
        assert_eq!(render_literal(Dialect::Asql, &SqlValue::null()).unwrap(), "NULL");
        let now = SqlValue::raw(current_timestamp(Dialect::SqlServer));
        assert_eq!(render_literal(Dialect::SqlServer, &now).unwrap(), "GETDATE()");
    }

    #[test]
    fn unwrap_reverses_quoting() {
        assert_eq!(unwrap_literal("'O''Brien'"), "O'Brien");
        assert_eq!(unwrap_literal("42"), "42");
        assert_eq!(unwrap_literal("''"), "");
        assert_eq!(unwrap_literal("'"), "'");
        let call = "TO_DATE('20240110 00:00:00')";
        assert_eq!(unwrap_literal(call), call);
    }

    #[test]
    fn errors_name_the_value_kind() {
        let err = render_literal(Dialect::SqlServer, &SqlValue::Float(f64::NAN)).unwrap_err();
        assert_eq!(err.to_string(), "render float literal: invalid input 'NaN'");
        assert_eq!(SqlValue::Guid(guid()).kind(), "guid");
        assert_eq!(SqlValue::null().kind(), "expression");
    }
}
