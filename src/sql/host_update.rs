use tracing::debug;

use crate::core::{Context, Dialect, HostDatabase, HostUpdate, SeError};

use super::builder::{BuilderParts, StatementBuilder};

/// UPDATE builder that hands table, FROM, SET and WHERE to the host as
/// separate parts instead of concatenating them.
///
/// [`render`](StatementBuilder::render) produces a display form
/// (`UPDATE t SET .. FROM .. WHERE ..`) for logging; execution goes through
/// [`HostDatabase::execute_update`].
#[derive(Debug, Clone, Default)]
pub struct HostUpdateBuilder {
    parts: BuilderParts,
}

impl HostUpdateBuilder {
    pub fn new(dialect: Dialect, table: impl Into<String>) -> Self {
        Self {
            parts: BuilderParts::new(dialect, table),
        }
    }

    pub fn for_context(context: &Context) -> Self {
        Self::new(context.dialect, "")
    }

    /// Join source for the update.
    pub fn set_from(&mut self, source: &str) -> &mut Self {
        self.parts.from = Some(source.to_string());
        self
    }

    /// The discrete parts passed to the host.
    pub fn to_host_update(&self) -> Result<HostUpdate, SeError> {
        let p = &self.parts;
        p.require_complete("host update")?;
        Ok(HostUpdate {
            table: p.table.clone(),
            from: p
                .from
                .as_deref()
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string),
            set: p.assignments.set_list(),
            where_clause: p.where_text().map(str::to_string),
        })
    }
}

impl StatementBuilder for HostUpdateBuilder {
    fn parts(&self) -> &BuilderParts {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut BuilderParts {
        &mut self.parts
    }

    fn render(&self) -> Result<String, SeError> {
        let update = self.to_host_update()?;
        let mut sql = format!("UPDATE {} SET {}", update.table, update.set);
        if let Some(from) = &update.from {
            sql.push_str(" FROM ");
            sql.push_str(from);
        }
        if let Some(where_clause) = &update.where_clause {
            sql.push(' ');
            sql.push_str(where_clause);
        }
        Ok(sql)
    }

    fn execute(&self, db: &dyn HostDatabase) -> Result<u64, SeError> {
        let update = self.to_host_update()?;
        debug!(table = %update.table, set = %update.set, "executing host update");
        let rows = db.execute_update(&update)?;
        debug!(table = %update.table, rows, "host update executed");
        Ok(rows)
    }
}
