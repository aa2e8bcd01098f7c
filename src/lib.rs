//! # sekit
//!
//! Swedish and Finnish extension helpers for ERP integrations:
//! a dialect-aware SQL statement builder, Nordic identity-number
//! validators, and a payment-terms due-date calculator with bank-day
//! adjustment.
//!
//! Nothing in this crate owns state beyond its own values. Database access
//! goes through the [`HostDatabase`](crate::core::HostDatabase) trait, and
//! per-session settings (client, business unit, dialect) live in a
//! caller-owned [`Context`](crate::core::Context).
//!
//! ## Quick Start
//!
//! ```rust
//! use sekit::checksum::*;
//! use sekit::sql::*;
//!
//! assert_eq!(luhn_checksum("671224123"), Some(8));
//! assert_eq!(validate_finnish_personal_number("131052-308T"), IdValidation::Valid);
//!
//! let mut insert = InsertBuilder::new(Dialect::SqlServer, "customers");
//! insert.add("name", "O'Brien").unwrap().add("credit_days", 30).unwrap();
//! assert_eq!(
//!     insert.render().unwrap(),
//!     "INSERT INTO customers (name, credit_days) VALUES ('O''Brien', 30)"
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Errors, context, host traits, country tables, time-of-day |
//! | `sql` (default) | INSERT/UPDATE statement builders for ASQL, SQL Server, Oracle |
//! | `checksum` (default) | Luhn, Swedish and Finnish personal/organisation/VAT numbers |
//! | `terms` (default) | Payment terms due dates with bank-day adjustment |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "sql")]
pub mod sql;

#[cfg(feature = "checksum")]
pub mod checksum;

#[cfg(feature = "terms")]
pub mod terms;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
