//! Collaborator traits implemented by the surrounding ERP host.

use super::error::SeError;

/// One record returned by [`HostDatabase::read_rows`].
///
/// Columns keep their order; lookups ignore ASCII case. `None` is SQL `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRow {
    columns: Vec<(String, Option<String>)>,
}

impl HostRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, builder style.
    pub fn with(mut self, column: impl Into<String>, value: Option<&str>) -> Self {
        self.push(column, value.map(str::to_string));
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: Option<String>) {
        self.columns.push((column.into(), value));
    }

    /// Raw value of a column; `None` when the column is missing or `NULL`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(column))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Trimmed text value, empty string for `NULL`.
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// Parse a required integer column.
    pub fn parse_i64(&self, column: &str) -> Result<i64, SeError> {
        let raw = self
            .get(column)
            .ok_or_else(|| SeError::malformed(column, "NULL"))?;
        raw.trim()
            .parse()
            .map_err(|_| SeError::malformed(column, raw))
    }

    /// Parse a nullable integer column; `NULL` and blank give `None`.
    pub fn parse_opt_i64(&self, column: &str) -> Result<Option<i64>, SeError> {
        match self.get(column).map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| SeError::malformed(column, raw)),
        }
    }
}

/// Arguments of a host-side UPDATE, kept apart so the host can assemble the
/// statement in its own syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostUpdate {
    pub table: String,
    pub from: Option<String>,
    /// Comma-separated `column=value` list.
    pub set: String,
    /// Raw condition fragment including the `WHERE` keyword.
    pub where_clause: Option<String>,
}

/// SQL execution surface of the host.
///
/// Implementations decide transactions, isolation and retries; callers in
/// this crate never retry.
pub trait HostDatabase {
    /// Execute a statement and return the number of affected rows.
    fn execute(&self, sql: &str) -> Result<u64, SeError>;

    /// Read the first column of the first row, `None` when there is no row.
    fn read_scalar(&self, sql: &str) -> Result<Option<String>, SeError>;

    /// Read all rows of a query.
    fn read_rows(&self, sql: &str) -> Result<Vec<HostRow>, SeError>;

    /// Run an UPDATE from discrete parts.
    ///
    /// The default joins the parts as `UPDATE t SET .. [FROM ..] [WHERE ..]`
    /// and calls [`execute`](Self::execute).
    fn execute_update(&self, update: &HostUpdate) -> Result<u64, SeError> {
        let mut sql = format!("UPDATE {} SET {}", update.table, update.set);
        if let Some(from) = &update.from {
            sql.push_str(" FROM ");
            sql.push_str(from);
        }
        if let Some(where_clause) = &update.where_clause {
            sql.push(' ');
            sql.push_str(where_clause);
        }
        self.execute(&sql)
    }
}

/// Session parameters of the logged-in host user.
pub trait HostSession {
    fn session_parameter(&self, name: &str) -> Option<String>;
}
