//! INSERT/UPDATE statement builders for the host database.
//!
//! A builder collects `column = value` assignments, renders each value as a
//! literal for the selected [`Dialect`], and produces the statement text on
//! demand. No AST is built; the table, FROM and WHERE parts are raw text
//! supplied by the caller.
//!
//! # Example
//!
//! ```
//! use sekit::sql::*;
//!
//! let mut update = UpdateBuilder::new(Dialect::Oracle, "suppliers");
//! update
//!     .add("blocked", true).unwrap()
//!     .add_truncated("note", "Blocked by credit check", 10).unwrap()
//!     .set_where("WHERE supplier_id = 'S100'");
//! assert_eq!(
//!     update.render().unwrap(),
//!     "UPDATE suppliers SET blocked=1, note='Blocked by' WHERE supplier_id = 'S100'"
//! );
//! ```

mod assignments;
mod builder;
mod ddl;
mod host_update;
mod insert;
mod literal;
mod update;
mod value;

pub use crate::core::Dialect;
pub use assignments::{Assignment, Assignments};
pub use builder::{BuilderParts, StatementBuilder};
pub use ddl::{ColumnType, add_column_statement};
pub use host_update::HostUpdateBuilder;
pub use insert::InsertBuilder;
pub use literal::{NULL, current_timestamp, quote_string, render_literal, unwrap_literal};
pub use update::UpdateBuilder;
pub use value::SqlValue;
