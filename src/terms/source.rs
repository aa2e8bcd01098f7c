use std::cell::Cell;
use std::collections::HashMap;

use crate::core::SeError;

use super::calendar::{AdjustmentPolicy, ApArType, BankDayCalendar};
use super::rule::TermRule;

/// Lookups the calculator needs from the host.
///
/// Each call is one synchronous read; "not found" is `Ok(None)` (or the
/// default policy), failures are errors.
pub trait TermsSource {
    fn term_rule(&self, client: &str, terms_id: &str) -> Result<Option<TermRule>, SeError>;

    fn bank_day_mask(&self, client: &str, year: i32) -> Result<Option<String>, SeError>;

    /// Policy for the client; [`AdjustmentPolicy::NoAdjustment`] when none is configured.
    fn adjustment_policy(&self, client: &str, ap_ar: ApArType)
    -> Result<AdjustmentPolicy, SeError>;
}

impl<T: TermsSource + ?Sized> TermsSource for &T {
    fn term_rule(&self, client: &str, terms_id: &str) -> Result<Option<TermRule>, SeError> {
        (**self).term_rule(client, terms_id)
    }

    fn bank_day_mask(&self, client: &str, year: i32) -> Result<Option<String>, SeError> {
        (**self).bank_day_mask(client, year)
    }

    fn adjustment_policy(
        &self,
        client: &str,
        ap_ar: ApArType,
    ) -> Result<AdjustmentPolicy, SeError> {
        (**self).adjustment_policy(client, ap_ar)
    }
}

/// A [`TermsSource`] backed by maps, for tests and offline use.
///
/// Counts mask lookups so callers can see when a mask is re-fetched.
#[derive(Debug, Default)]
pub struct InMemoryTermsSource {
    rules: HashMap<(String, String), TermRule>,
    masks: HashMap<(String, i32), String>,
    policies: HashMap<(String, ApArType), AdjustmentPolicy>,
    mask_lookups: Cell<usize>,
}

impl InMemoryTermsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, client: &str, rule: TermRule) -> Self {
        self.rules
            .insert((client.to_string(), rule.terms_id.clone()), rule);
        self
    }

    pub fn with_mask(mut self, client: &str, year: i32, mask: impl Into<String>) -> Self {
        self.masks.insert((client.to_string(), year), mask.into());
        self
    }

    pub fn with_calendar(self, client: &str, calendar: &BankDayCalendar) -> Self {
        let year = calendar.year();
        self.with_mask(client, year, calendar.to_mask())
    }

    pub fn with_policy(mut self, client: &str, ap_ar: ApArType, policy: AdjustmentPolicy) -> Self {
        self.policies.insert((client.to_string(), ap_ar), policy);
        self
    }

    /// Number of [`bank_day_mask`](TermsSource::bank_day_mask) calls so far.
    pub fn mask_lookups(&self) -> usize {
        self.mask_lookups.get()
    }
}

impl TermsSource for InMemoryTermsSource {
    fn term_rule(&self, client: &str, terms_id: &str) -> Result<Option<TermRule>, SeError> {
        Ok(self
            .rules
            .get(&(client.to_string(), terms_id.to_string()))
            .cloned())
    }

    fn bank_day_mask(&self, client: &str, year: i32) -> Result<Option<String>, SeError> {
        self.mask_lookups.set(self.mask_lookups.get() + 1);
        Ok(self.masks.get(&(client.to_string(), year)).cloned())
    }

    fn adjustment_policy(
        &self,
        client: &str,
        ap_ar: ApArType,
    ) -> Result<AdjustmentPolicy, SeError> {
        Ok(self
            .policies
            .get(&(client.to_string(), ap_ar))
            .copied()
            .unwrap_or_default())
    }
}
