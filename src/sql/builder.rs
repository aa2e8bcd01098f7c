use tracing::debug;

use crate::core::{Dialect, HostDatabase, SeError};

use super::assignments::Assignments;
use super::literal::{self, render_literal};
use super::value::SqlValue;

/// Mutable state shared by all statement builders.
#[derive(Debug, Clone, Default)]
pub struct BuilderParts {
    pub dialect: Dialect,
    pub table: String,
    pub assignments: Assignments,
    /// Raw condition text, including the `WHERE` keyword.
    pub where_clause: Option<String>,
    /// Source of an insert-from-select or an update-from.
    pub from: Option<String>,
    /// `SELECT DISTINCT` for insert-from-select.
    pub distinct: bool,
}

impl BuilderParts {
    pub fn new(dialect: Dialect, table: impl Into<String>) -> Self {
        Self {
            dialect,
            table: table.into(),
            ..Default::default()
        }
    }

    /// Back to the empty state; the dialect is kept.
    pub fn clear(&mut self) {
        self.table.clear();
        self.assignments.clear();
        self.where_clause = None;
        self.from = None;
        self.distinct = false;
    }

    /// Fail unless a table and at least one column are present.
    pub(crate) fn require_complete(&self, operation: &str) -> Result<(), SeError> {
        if self.table.trim().is_empty() {
            return Err(SeError::invalid_input(operation, "no target table"));
        }
        if self.assignments.is_empty() {
            return Err(SeError::invalid_input(
                operation,
                format!("{}: no columns", self.table),
            ));
        }
        Ok(())
    }

    pub(crate) fn where_text(&self) -> Option<&str> {
        self.where_clause
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }
}

/// Common surface of the INSERT and UPDATE builders.
///
/// Lifecycle: empty → accumulating (`add*`) → rendered/executed;
/// [`clear`](Self::clear) returns to empty from any state.
pub trait StatementBuilder {
    fn parts(&self) -> &BuilderParts;

    fn parts_mut(&mut self) -> &mut BuilderParts;

    /// Render the statement text.
    fn render(&self) -> Result<String, SeError>;

    /// Render and execute; returns the affected row count.
    ///
    /// Host failures propagate unchanged, nothing is retried.
    fn execute(&self, db: &dyn HostDatabase) -> Result<u64, SeError> {
        let sql = self.render()?;
        debug!(table = %self.parts().table, sql = %sql, "executing statement");
        let rows = db.execute(&sql)?;
        debug!(table = %self.parts().table, rows, "statement executed");
        Ok(rows)
    }

    fn dialect(&self) -> Dialect {
        self.parts().dialect
    }

    fn table(&self) -> &str {
        &self.parts().table
    }

    fn set_table(&mut self, table: &str) {
        self.parts_mut().table = table.to_string();
    }

    /// Reset to the empty state.
    fn clear(&mut self) {
        self.parts_mut().clear();
    }

    /// Set the raw condition fragment; the caller supplies the `WHERE` keyword.
    fn set_where(&mut self, clause: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.parts_mut().where_clause = Some(clause.to_string());
        self
    }

    /// Set a column, rendering `value` for the builder's dialect.
    ///
    /// A column set twice keeps only the last value.
    fn add(&mut self, target: &str, value: impl Into<SqlValue>) -> Result<&mut Self, SeError>
    where
        Self: Sized,
    {
        let value = value.into();
        let rendered = render_literal(self.dialect(), &value)?;
        self.parts_mut().assignments.set(target, rendered);
        Ok(self)
    }

    /// Set a column to an unquoted expression such as `NULL` or `a.amount * 2`.
    fn add_raw(&mut self, target: &str, expr: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.parts_mut().assignments.set(target, expr.to_string());
        self
    }

    /// Set a string column, truncated to `max_chars` before quoting.
    fn add_truncated(
        &mut self,
        target: &str,
        value: &str,
        max_chars: usize,
    ) -> Result<&mut Self, SeError>
    where
        Self: Sized,
    {
        self.add(target, literal::truncate_chars(value, max_chars))
    }

    /// Set a column to the dialect's current timestamp.
    fn add_now(&mut self, target: &str) -> &mut Self
    where
        Self: Sized,
    {
        let now = literal::current_timestamp(self.dialect());
        self.add_raw(target, now)
    }

    /// The value previously added for `name`, with string quoting removed.
    fn value_for_field(&self, name: &str) -> Option<String> {
        self.parts()
            .assignments
            .get(name)
            .map(literal::unwrap_literal)
    }
}
