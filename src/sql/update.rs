use crate::core::{Context, Dialect, SeError};

use super::builder::{BuilderParts, StatementBuilder};

/// Builder for `UPDATE <table> SET <col>=<val>, ... [<where>]`.
#[derive(Debug, Clone, Default)]
pub struct UpdateBuilder {
    parts: BuilderParts,
}

impl UpdateBuilder {
    pub fn new(dialect: Dialect, table: impl Into<String>) -> Self {
        Self {
            parts: BuilderParts::new(dialect, table),
        }
    }

    pub fn for_context(context: &Context) -> Self {
        Self::new(context.dialect, "")
    }
}

impl StatementBuilder for UpdateBuilder {
    fn parts(&self) -> &BuilderParts {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut BuilderParts {
        &mut self.parts
    }

    fn render(&self) -> Result<String, SeError> {
        let p = &self.parts;
        p.require_complete("render update")?;

        let mut sql = format!("UPDATE {} SET {}", p.table, p.assignments.set_list());
        if let Some(where_clause) = p.where_text() {
            sql.push(' ');
            sql.push_str(where_clause);
        }
        Ok(sql)
    }
}
