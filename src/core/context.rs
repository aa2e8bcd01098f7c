use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::SeError;
use super::host::HostSession;

/// SQL dialect the host database speaks.
///
/// Selects how date-times, GUIDs and booleans are written as literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dialect {
    /// Host-normalized generic SQL (ASQL), translated by the host before execution.
    #[default]
    Asql,
    /// Microsoft SQL Server.
    SqlServer,
    /// Oracle.
    Oracle,
}

impl Dialect {
    /// Short code as stored in host configuration.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Asql => "ASQL",
            Self::SqlServer => "MSSQL",
            Self::Oracle => "ORACLE",
        }
    }

    /// Parse from a host configuration code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "ASQL" => Some(Self::Asql),
            "MSSQL" | "SQLSERVER" => Some(Self::SqlServer),
            "ORACLE" => Some(Self::Oracle),
            _ => None,
        }
    }
}

/// Caller-owned settings passed to each component at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// ERP client (company) code.
    pub client: String,
    /// Business unit within the client, if the caller works on one.
    pub business_unit: Option<String>,
    /// Dialect of the host database.
    pub dialect: Dialect,
    /// Fixed "today"; falls back to the local clock when unset.
    pub reference_date: Option<NaiveDate>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            client: String::new(),
            business_unit: None,
            dialect: Dialect::Asql,
            reference_date: None,
        }
    }
}

impl Context {
    /// Read client and business unit from the host session.
    ///
    /// The session must carry a non-blank `client` parameter; `business_unit`
    /// is optional.
    pub fn from_session(session: &impl HostSession, dialect: Dialect) -> Result<Self, SeError> {
        let client = session
            .session_parameter("client")
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| SeError::Host("session has no client parameter".into()))?;
        let business_unit = session
            .session_parameter("business_unit")
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        Ok(Self {
            client,
            business_unit,
            dialect,
            reference_date: None,
        })
    }

    /// The date this context treats as today.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Builder for [`Context`].
///
/// # Example
///
/// ```
/// use sekit::core::{ContextBuilder, Dialect};
///
/// let ctx = ContextBuilder::new("SE01")
///     .business_unit("STHLM")
///     .dialect(Dialect::SqlServer)
///     .build();
/// assert_eq!(ctx.client, "SE01");
/// ```
pub struct ContextBuilder {
    context: Context,
}

impl ContextBuilder {
    /// Create a builder for the given client.
    pub fn new(client: impl Into<String>) -> Self {
        Self {
            context: Context {
                client: client.into(),
                ..Default::default()
            },
        }
    }

    pub fn business_unit(mut self, unit: impl Into<String>) -> Self {
        self.context.business_unit = Some(unit.into());
        self
    }

    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.context.dialect = dialect;
        self
    }

    /// Pin "today", e.g. for reproducible century resolution.
    pub fn reference_date(mut self, date: NaiveDate) -> Self {
        self.context.reference_date = Some(date);
        self
    }

    pub fn build(self) -> Context {
        self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_codes_roundtrip() {
        for d in [Dialect::Asql, Dialect::SqlServer, Dialect::Oracle] {
            assert_eq!(Dialect::from_code(d.code()), Some(d));
        }
        assert_eq!(Dialect::from_code(" sqlserver "), Some(Dialect::SqlServer));
        assert_eq!(Dialect::from_code("db2"), None);
    }

    #[test]
    fn pinned_today() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let ctx = ContextBuilder::new("FI").reference_date(date).build();
        assert_eq!(ctx.today(), date);
    }

    struct Session(Vec<(&'static str, &'static str)>);

    impl HostSession for Session {
        fn session_parameter(&self, name: &str) -> Option<String> {
            self.0
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn context_from_session() {
        let session = Session(vec![("client", " SE01 "), ("business_unit", "")]);
        let ctx = Context::from_session(&session, Dialect::Oracle).unwrap();
        assert_eq!(ctx.client, "SE01");
        assert_eq!(ctx.business_unit, None);
        assert_eq!(ctx.dialect, Dialect::Oracle);
    }

    #[test]
    fn session_without_client() {
        let session = Session(vec![("business_unit", "X")]);
        assert!(matches!(
            Context::from_session(&session, Dialect::Asql),
            Err(SeError::Host(_))
        ));
    }

    #[test]
    fn defaults() {
        let ctx = ContextBuilder::new("SE").build();
        assert_eq!(ctx.dialect, Dialect::Asql);
        assert!(ctx.business_unit.is_none());
        assert!(ctx.reference_date.is_none());
    }
}
