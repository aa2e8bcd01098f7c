use serde::{Deserialize, Serialize};

/// How the tentative due date is derived from a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DueDateStrategy {
    /// Three cases on due days, day-of-month due and free-month due.
    #[default]
    Simple,
    /// Dispatch on the rule's method code (FP, DD, DDS, DFM).
    MethodCode,
}

/// Host tables read by [`HostTermsSource`](super::HostTermsSource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermsTables {
    /// Payment terms rules, one row per (client, terms_id).
    pub terms: String,
    /// Bank-day masks, one row per (client, year).
    pub calendar: String,
    /// Client/business-unit parameters holding the adjustment policy.
    pub parameters: String,
    /// Parameter name of the adjustment policy.
    pub policy_parameter: String,
}

impl Default for TermsTables {
    fn default() -> Self {
        Self {
            terms: "se_payment_terms".into(),
            calendar: "se_bank_days".into(),
            parameters: "se_parameters".into(),
            policy_parameter: "BANKDAY_ADJUST".into(),
        }
    }
}

/// Configuration of the payment terms calculator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TermsConfig {
    pub strategy: DueDateStrategy,
    pub tables: TermsTables,
}

/// Builder for [`TermsConfig`].
///
/// ```
/// use sekit::terms::{DueDateStrategy, TermsConfigBuilder};
///
/// let config = TermsConfigBuilder::new()
///     .strategy(DueDateStrategy::MethodCode)
///     .terms_table("acr_terms")
///     .build();
/// assert_eq!(config.tables.terms, "acr_terms");
/// ```
#[derive(Default)]
pub struct TermsConfigBuilder {
    config: TermsConfig,
}

impl TermsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: DueDateStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn terms_table(mut self, table: impl Into<String>) -> Self {
        self.config.tables.terms = table.into();
        self
    }

    pub fn calendar_table(mut self, table: impl Into<String>) -> Self {
        self.config.tables.calendar = table.into();
        self
    }

    pub fn parameters_table(mut self, table: impl Into<String>) -> Self {
        self.config.tables.parameters = table.into();
        self
    }

    pub fn policy_parameter(mut self, name: impl Into<String>) -> Self {
        self.config.tables.policy_parameter = name.into();
        self
    }

    pub fn build(self) -> TermsConfig {
        self.config
    }
}
