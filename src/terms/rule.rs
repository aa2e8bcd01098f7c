use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{SeError, ValidationError};

/// Due-date method code of a terms rule, used by
/// [`DueDateStrategy::MethodCode`](super::DueDateStrategy::MethodCode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TermsMethod {
    /// No method: the due date is the base date.
    #[default]
    None,
    /// FP, fixed payment day: months, then fixed/last day, then days.
    FixedPeriod,
    /// DD: base date plus days.
    DueDays,
    /// DDS: like FP, with the offset chosen by the base date's day of month.
    DueDaysSplit,
    /// DFM: offset counted from the end of the base date's month.
    DaysFromMonthEnd,
}

impl TermsMethod {
    pub fn code(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::FixedPeriod => "FP",
            Self::DueDays => "DD",
            Self::DueDaysSplit => "DDS",
            Self::DaysFromMonthEnd => "DFM",
        }
    }

    /// Parse a stored method code; blank means [`TermsMethod::None`].
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "" => Some(Self::None),
            "FP" => Some(Self::FixedPeriod),
            "DD" => Some(Self::DueDays),
            "DDS" => Some(Self::DueDaysSplit),
            "DFM" => Some(Self::DaysFromMonthEnd),
            _ => None,
        }
    }
}

/// A set of date offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TermOffset {
    pub months: u32,
    pub days: i64,
    /// Day of month to land on after adding months (clamped to the month's length).
    pub fixed_day: Option<u32>,
    /// Land on the last day of the month after adding months; wins over `fixed_day`.
    pub last_day_of_month: bool,
}

impl TermOffset {
    /// Add months, then snap to the last/fixed day, then add days.
    pub fn apply(&self, from: NaiveDate) -> Option<NaiveDate> {
        let mut date = from.checked_add_months(Months::new(self.months))?;
        if self.last_day_of_month {
            date = last_day_of_month(date)?;
        } else if let Some(day) = self.fixed_day {
            date = with_day_clamped(date, day)?;
        }
        add_days(date, self.days)
    }
}

/// Day-of-month threshold choosing between two offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRule {
    /// Base dates on or before this day of month use `before`, later ones `after`.
    pub split_day: u32,
    pub before: TermOffset,
    pub after: TermOffset,
}

impl SplitRule {
    pub fn offset_for(&self, base: NaiveDate) -> &TermOffset {
        if base.day() <= self.split_day {
            &self.before
        } else {
            &self.after
        }
    }
}

/// Payment terms for one (client, terms id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRule {
    pub terms_id: String,
    pub description: String,
    pub due_days: i64,
    pub day_of_month_due: i64,
    pub free_month_due: i64,
    pub method: TermsMethod,
    pub offset: TermOffset,
    pub split: Option<SplitRule>,
}

impl TermRule {
    /// Check the rule for values no strategy can use.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("due_days", self.due_days),
            ("day_of_month_due", self.day_of_month_due),
            ("free_month_due", self.free_month_due),
        ] {
            if value < 0 {
                errors.push(ValidationError::with_rule(
                    field,
                    format!("must not be negative, got {value}"),
                    "TERMS-01",
                ));
            }
        }

        validate_offset(&self.offset, "offset", &mut errors);

        if let Some(split) = &self.split {
            if !(1..=31).contains(&split.split_day) {
                errors.push(ValidationError::with_rule(
                    "split.split_day",
                    format!("must be between 1 and 31, got {}", split.split_day),
                    "TERMS-03",
                ));
            }
            validate_offset(&split.before, "split.before", &mut errors);
            validate_offset(&split.after, "split.after", &mut errors);
        } else if self.method == TermsMethod::DueDaysSplit {
            errors.push(ValidationError::with_rule(
                "split",
                "method DDS needs a split rule",
                "TERMS-04",
            ));
        }

        errors
    }
}

fn validate_offset(offset: &TermOffset, prefix: &str, errors: &mut Vec<ValidationError>) {
    if offset.days < 0 {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.days"),
            format!("must not be negative, got {}", offset.days),
            "TERMS-02",
        ));
    }
    if let Some(day) = offset.fixed_day {
        if !(1..=31).contains(&day) {
            errors.push(ValidationError::with_rule(
                format!("{prefix}.fixed_day"),
                format!("must be between 1 and 31, got {day}"),
                "TERMS-02",
            ));
        }
    }
}

/// Builder for [`TermRule`].
///
/// ```
/// use sekit::terms::*;
///
/// let rule = TermRuleBuilder::new("30")
///     .description("30 days net")
///     .due_days(30)
///     .build()
///     .unwrap();
/// assert_eq!(rule.due_days, 30);
/// ```
pub struct TermRuleBuilder {
    rule: TermRule,
}

impl TermRuleBuilder {
    pub fn new(terms_id: impl Into<String>) -> Self {
        Self {
            rule: TermRule {
                terms_id: terms_id.into(),
                description: String::new(),
                due_days: 0,
                day_of_month_due: 0,
                free_month_due: 0,
                method: TermsMethod::None,
                offset: TermOffset::default(),
                split: None,
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.rule.description = description.into();
        self
    }

    pub fn due_days(mut self, days: i64) -> Self {
        self.rule.due_days = days;
        self
    }

    pub fn day_of_month_due(mut self, days: i64) -> Self {
        self.rule.day_of_month_due = days;
        self
    }

    pub fn free_month_due(mut self, months: i64) -> Self {
        self.rule.free_month_due = months;
        self
    }

    pub fn method(mut self, method: TermsMethod) -> Self {
        self.rule.method = method;
        self
    }

    pub fn offset(mut self, offset: TermOffset) -> Self {
        self.rule.offset = offset;
        self
    }

    /// Split at `split_day`: `before` applies up to and including that day.
    pub fn split(mut self, split_day: u32, before: TermOffset, after: TermOffset) -> Self {
        self.rule.split = Some(SplitRule {
            split_day,
            before,
            after,
        });
        self
    }

    /// Build the rule; all findings are joined into one error.
    pub fn build(self) -> Result<TermRule, SeError> {
        let errors = self.rule.validate();
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SeError::Validation(format!(
                "terms '{}': {msg}",
                self.rule.terms_id
            )));
        }
        Ok(self.rule)
    }
}

/// Last day of the month `date` falls in.
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// `date` moved to `day` within its month, clamped to the month's last day.
pub fn with_day_clamped(date: NaiveDate, day: u32) -> Option<NaiveDate> {
    let last = last_day_of_month(date)?;
    date.with_day(day.clamp(1, last.day()))
}

/// Add a signed number of calendar days.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_helpers() {
        assert_eq!(last_day_of_month(date(2024, 2, 10)), Some(date(2024, 2, 29)));
        assert_eq!(last_day_of_month(date(2023, 12, 31)), Some(date(2023, 12, 31)));
        assert_eq!(with_day_clamped(date(2023, 2, 1), 31), Some(date(2023, 2, 28)));
        assert_eq!(with_day_clamped(date(2023, 3, 1), 15), Some(date(2023, 3, 15)));
        assert_eq!(add_days(date(2024, 3, 1), -1), Some(date(2024, 2, 29)));
    }

    #[test]
    fn offset_order() {
        let offset = TermOffset {
            months: 1,
            days: 5,
            fixed_day: Some(25),
            last_day_of_month: false,
        };
        assert_eq!(offset.apply(date(2024, 1, 31)), Some(date(2024, 3, 1)));

        let eom = TermOffset {
            months: 1,
            days: 0,
            fixed_day: Some(10),
            last_day_of_month: true,
        };
        assert_eq!(eom.apply(date(2024, 1, 15)), Some(date(2024, 2, 29)));
    }

    #[test]
    fn method_codes() {
        for m in [
            TermsMethod::None,
            TermsMethod::FixedPeriod,
            TermsMethod::DueDays,
            TermsMethod::DueDaysSplit,
            TermsMethod::DaysFromMonthEnd,
        ] {
            assert_eq!(TermsMethod::from_code(m.code()), Some(m));
        }
        assert_eq!(TermsMethod::from_code(" dfm "), Some(TermsMethod::DaysFromMonthEnd));
        assert_eq!(TermsMethod::from_code("XYZ"), None);
    }

    #[test]
    fn builder_rejects_bad_rules() {
        let err = TermRuleBuilder::new("BAD")
            .due_days(-1)
            .method(TermsMethod::DueDaysSplit)
            .build()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("TERMS-01"), "{msg}");
        assert!(msg.contains("TERMS-04"), "{msg}");

        let err = TermRuleBuilder::new("SPLIT")
            .split(0, TermOffset::default(), TermOffset::default())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("split.split_day"));
    }

    #[test]
    fn split_selection() {
        let split = SplitRule {
            split_day: 15,
            before: TermOffset {
                days: 1,
                ..Default::default()
            },
            after: TermOffset {
                days: 2,
                ..Default::default()
            },
        };
        assert_eq!(split.offset_for(date(2024, 1, 15)).days, 1);
        assert_eq!(split.offset_for(date(2024, 1, 16)).days, 2);
    }
}
