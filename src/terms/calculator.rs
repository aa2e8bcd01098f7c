use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::SeError;

use super::calendar::{AdjustmentPolicy, ApArType, MIN_MASK_LEN, is_non_banking};
use super::config::{DueDateStrategy, TermsConfig};
use super::rule::{TermRule, TermsMethod, add_days, last_day_of_month};
use super::source::TermsSource;

/// Upper bound on single-day moves in one adjustment.
///
/// Runs of non-banking days are short in practice (a long weekend plus
/// holidays), so the recursion depth stays in single digits. The bound only
/// matters for a mask that closes a whole year.
pub const MAX_ADJUSTMENT_STEPS: u32 = 366;

/// Due date computed for one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTermsResult {
    pub terms_id: String,
    pub description: String,
    /// Due date before bank-day adjustment.
    pub tentative_due_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Computes due dates from payment terms and moves them off non-banking days.
///
/// ```
/// use chrono::NaiveDate;
/// use sekit::terms::*;
///
/// let source = InMemoryTermsSource::new()
///     .with_rule("SE01", TermRuleBuilder::new("EOM").free_month_due(1).build().unwrap());
/// let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());
/// let base = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let result = calc
///     .calculate("SE01", "EOM", ApArType::Receivable, base)
///     .unwrap()
///     .unwrap();
/// assert_eq!(result.due_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
/// ```
pub struct PaymentTermsCalculator<S> {
    source: S,
    config: TermsConfig,
}

impl<S: TermsSource> PaymentTermsCalculator<S> {
    pub fn new(source: S, config: TermsConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &TermsConfig {
        &self.config
    }

    /// Resolve the rule, compute the due date, and adjust it for bank days.
    ///
    /// Returns `Ok(None)` when no rule exists for (client, terms id).
    pub fn calculate(
        &self,
        client: &str,
        terms_id: &str,
        ap_ar: ApArType,
        base: NaiveDate,
    ) -> Result<Option<PaymentTermsResult>, SeError> {
        let Some(rule) = self.source.term_rule(client, terms_id)? else {
            debug!(client, terms_id, "no payment terms rule");
            return Ok(None);
        };

        let tentative = self.due_date(&rule, base)?;
        let policy = self.source.adjustment_policy(client, ap_ar)?;
        let due_date = self.adjust(client, tentative, policy)?;

        debug!(
            client,
            terms_id,
            %base,
            %tentative,
            %due_date,
            policy = %policy.as_char(),
            "payment terms calculated"
        );

        Ok(Some(PaymentTermsResult {
            terms_id: rule.terms_id,
            description: rule.description,
            tentative_due_date: tentative,
            due_date,
        }))
    }

    /// Tentative due date for `rule` under the configured strategy.
    pub fn due_date(&self, rule: &TermRule, base: NaiveDate) -> Result<NaiveDate, SeError> {
        let date = match self.config.strategy {
            DueDateStrategy::Simple => simple_due_date(rule, base),
            DueDateStrategy::MethodCode => method_due_date(rule, base)?,
        };
        date.ok_or_else(|| {
            SeError::malformed(
                format!("terms {}", rule.terms_id),
                format!("due date out of range from {base}"),
            )
        })
    }

    /// Move `date` off non-banking days in the policy direction.
    ///
    /// Without a usable mask for the year the date is returned unchanged.
    pub fn adjust(
        &self,
        client: &str,
        date: NaiveDate,
        policy: AdjustmentPolicy,
    ) -> Result<NaiveDate, SeError> {
        self.adjust_step(client, date, policy, None, 0)
    }

    fn adjust_step(
        &self,
        client: &str,
        date: NaiveDate,
        policy: AdjustmentPolicy,
        mask: Option<&str>,
        steps: u32,
    ) -> Result<NaiveDate, SeError> {
        let fetched;
        let mask = match mask {
            Some(m) => m,
            None => match self.source.bank_day_mask(client, date.year())? {
                Some(m) => {
                    fetched = m;
                    fetched.as_str()
                }
                None => return Ok(date),
            },
        };
        if mask.len() < MIN_MASK_LEN {
            return Ok(date);
        }

        let Some(step) = policy.step() else {
            return Ok(date);
        };
        if !is_non_banking(mask, date) {
            return Ok(date);
        }
        if steps >= MAX_ADJUSTMENT_STEPS {
            warn!(client, %date, "bank day adjustment gave up, no banking day found");
            return Ok(date);
        }

        let Some(next) = add_days(date, step) else {
            return Ok(date);
        };
        trace!(client, from = %date, to = %next, "skipping non-banking day");

        // Crossing into another year needs that year's mask
        let next_mask = (next.year() == date.year()).then_some(mask);
        self.adjust_step(client, next, policy, next_mask, steps + 1)
    }
}

/// The three-case rule: end of month, plus days, or plus months and days.
fn simple_due_date(rule: &TermRule, base: NaiveDate) -> Option<NaiveDate> {
    let (due_days, day_due, free_month) =
        (rule.due_days, rule.day_of_month_due, rule.free_month_due);

    if due_days == 0 && day_due == 0 && free_month == 1 {
        last_day_of_month(base)
    } else if due_days > 0 && day_due == 0 && free_month == 0 {
        add_days(base, due_days)
    } else if due_days == 0 && free_month > 0 && day_due > 0 {
        let months = u32::try_from(free_month).ok()?;
        let shifted = base.checked_add_months(chrono::Months::new(months))?;
        add_days(shifted, day_due)
    } else {
        Some(base)
    }
}

/// Dispatch on the rule's method code.
fn method_due_date(rule: &TermRule, base: NaiveDate) -> Result<Option<NaiveDate>, SeError> {
    let date = match rule.method {
        TermsMethod::None => Some(base),
        TermsMethod::DueDays => add_days(base, rule.offset.days),
        TermsMethod::FixedPeriod => rule.offset.apply(base),
        TermsMethod::DaysFromMonthEnd => {
            last_day_of_month(base).and_then(|eom| rule.offset.apply(eom))
        }
        TermsMethod::DueDaysSplit => {
            let split = rule.split.as_ref().ok_or_else(|| {
                SeError::malformed(format!("terms {}", rule.terms_id), "DDS without split rule")
            })?;
            split.offset_for(base).apply(base)
        }
    };
    Ok(date)
}
