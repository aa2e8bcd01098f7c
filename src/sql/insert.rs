use crate::core::{Context, Dialect, SeError};

use super::builder::{BuilderParts, StatementBuilder};

/// Builder for `INSERT INTO ... VALUES` and `INSERT INTO ... SELECT`.
///
/// Without a FROM source the statement is a plain `VALUES` insert and any
/// WHERE fragment is left out. With a FROM source the values become the
/// select list.
///
/// ```
/// use sekit::sql::*;
///
/// let mut insert = InsertBuilder::new(Dialect::SqlServer, "bank_days_hist");
/// insert
///     .add_raw("client", "c.client")
///     .add_raw("year", "c.year")
///     .add("changed_by", "SYSTEM").unwrap();
/// insert.set_from("bank_days c").set_where("WHERE c.year = 2024");
/// assert_eq!(
///     insert.render().unwrap(),
///     "INSERT INTO bank_days_hist (client, year, changed_by) \
///      SELECT c.client, c.year, 'SYSTEM' FROM bank_days c WHERE c.year = 2024"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct InsertBuilder {
    parts: BuilderParts,
}

impl InsertBuilder {
    pub fn new(dialect: Dialect, table: impl Into<String>) -> Self {
        Self {
            parts: BuilderParts::new(dialect, table),
        }
    }

    /// An empty builder in the context's dialect.
    pub fn for_context(context: &Context) -> Self {
        Self::new(context.dialect, "")
    }

    /// Turn the statement into an insert-from-select over `source`.
    pub fn set_from(&mut self, source: &str) -> &mut Self {
        self.parts.from = Some(source.to_string());
        self
    }

    /// Use `SELECT DISTINCT` for insert-from-select.
    pub fn distinct(&mut self, distinct: bool) -> &mut Self {
        self.parts.distinct = distinct;
        self
    }
}

impl StatementBuilder for InsertBuilder {
    fn parts(&self) -> &BuilderParts {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut BuilderParts {
        &mut self.parts
    }

    fn render(&self) -> Result<String, SeError> {
        let p = &self.parts;
        p.require_complete("render insert")?;

        let columns = p.assignments.column_list();
        let values = p.assignments.value_list();
        let from = p.from.as_deref().map(str::trim).filter(|f| !f.is_empty());

        let Some(from) = from else {
            // A WHERE without a FROM source has nothing to filter
            return Ok(format!(
                "INSERT INTO {} ({columns}) VALUES ({values})",
                p.table
            ));
        };

        let distinct = if p.distinct { "DISTINCT " } else { "" };
        let mut sql = format!(
            "INSERT INTO {} ({columns}) SELECT {distinct}{values} FROM {from}",
            p.table
        );
        if let Some(where_clause) = p.where_text() {
            sql.push(' ');
            sql.push_str(where_clause);
        }
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_insert() {
        let mut b = InsertBuilder::new(Dialect::Asql, "t");
        b.add("a", 1).unwrap().add("b", "x").unwrap();
        assert_eq!(b.render().unwrap(), "INSERT INTO t (a, b) VALUES (1, 'x')");
    }

    #[test]
    fn where_without_from_is_dropped() {
        let mut b = InsertBuilder::new(Dialect::Asql, "t");
        b.add("a", 1).unwrap();
        b.set_where("WHERE 1 = 0");
        let sql = b.render().unwrap();
        assert!(!sql.contains("WHERE"));
        assert_eq!(sql, "INSERT INTO t (a) VALUES (1)");
    }

    #[test]
    fn select_distinct() {
        let mut b = InsertBuilder::new(Dialect::Asql, "t");
        b.add_raw("a", "s.a");
        b.set_from("s").distinct(true);
        assert_eq!(b.render().unwrap(), "INSERT INTO t (a) SELECT DISTINCT s.a FROM s");
    }

    #[test]
    fn empty_builder_is_an_error() {
        let b = InsertBuilder::new(Dialect::Asql, "t");
        assert!(matches!(b.render(), Err(SeError::InvalidInput { .. })));
        let mut b = InsertBuilder::default();
        b.add("a", 1).unwrap();
        assert!(b.render().is_err());
    }

    #[test]
    fn clear_resets_everything_but_dialect() {
        let mut b = InsertBuilder::new(Dialect::Oracle, "t");
        b.add("a", 1).unwrap();
        b.set_from("s").distinct(true).set_where("WHERE x = 1");
        b.clear();
        assert_eq!(b.table(), "");
        assert!(b.parts().assignments.is_empty());
        assert!(b.parts().from.is_none());
        assert!(!b.parts().distinct);
        assert_eq!(b.dialect(), Dialect::Oracle);

        b.set_table("u");
        b.add("c", 'Y').unwrap();
        assert_eq!(b.render().unwrap(), "INSERT INTO u (c) VALUES ('Y')");
    }
}
