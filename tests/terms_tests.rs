#![cfg(feature = "terms")]

use chrono::NaiveDate;
use sekit::core::SeError;
use sekit::terms::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn end_of_month() -> TermRule {
    TermRuleBuilder::new("EOM")
        .description("End of month")
        .free_month_due(1)
        .build()
        .unwrap()
}

fn calendar_closing(year: i32, closed: &[NaiveDate]) -> BankDayCalendar {
    let mut cal = BankDayCalendar::open(year);
    for d in closed {
        cal.close(*d);
    }
    cal
}

// --- Due date ---

#[test]
fn end_of_month_without_adjustment() {
    let source = InMemoryTermsSource::new().with_rule("SE01", end_of_month());
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());

    let result = calc
        .calculate("SE01", "EOM", ApArType::Receivable, date(2024, 1, 10))
        .unwrap()
        .unwrap();
    assert_eq!(result.terms_id, "EOM");
    assert_eq!(result.description, "End of month");
    assert_eq!(result.tentative_due_date, date(2024, 1, 31));
    assert_eq!(result.due_date, date(2024, 1, 31));
}

#[test]
fn unknown_terms_id_is_none() {
    let source = InMemoryTermsSource::new().with_rule("SE01", end_of_month());
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());
    assert!(calc
        .calculate("SE01", "NET30", ApArType::Payable, date(2024, 1, 10))
        .unwrap()
        .is_none());
    // Rules are per client
    assert!(calc
        .calculate("FI01", "EOM", ApArType::Payable, date(2024, 1, 10))
        .unwrap()
        .is_none());
}

#[test]
fn net_days_cross_leap_day() {
    let rule = TermRuleBuilder::new("30").due_days(30).build().unwrap();
    let source = InMemoryTermsSource::new().with_rule("SE01", rule);
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());
    let result = calc
        .calculate("SE01", "30", ApArType::Payable, date(2024, 2, 15))
        .unwrap()
        .unwrap();
    assert_eq!(result.due_date, date(2024, 3, 16));
}

#[test]
fn method_code_split_terms() {
    let before = TermOffset {
        months: 1,
        fixed_day: Some(10),
        ..Default::default()
    };
    let after = TermOffset {
        months: 2,
        last_day_of_month: true,
        ..Default::default()
    };
    let rule = TermRuleBuilder::new("SPLIT")
        .method(TermsMethod::DueDaysSplit)
        .split(15, before, after)
        .build()
        .unwrap();
    let source = InMemoryTermsSource::new().with_rule("SE01", rule);
    let config = TermsConfigBuilder::new()
        .strategy(DueDateStrategy::MethodCode)
        .build();
    let calc = PaymentTermsCalculator::new(&source, config);

    let due = |base| {
        calc.calculate("SE01", "SPLIT", ApArType::Receivable, base)
            .unwrap()
            .unwrap()
            .due_date
    };
    assert_eq!(due(date(2024, 1, 15)), date(2024, 2, 10));
    assert_eq!(due(date(2024, 1, 16)), date(2024, 3, 31));
    assert_eq!(due(date(2024, 12, 20)), date(2025, 2, 28));
}

#[test]
fn invalid_rules_are_rejected() {
    let err = TermRuleBuilder::new("BAD")
        .due_days(-5)
        .method(TermsMethod::DueDaysSplit)
        .build()
        .unwrap_err();
    let SeError::Validation(message) = err else {
        panic!("expected a validation error, got {err:?}");
    };
    assert!(message.contains("BAD"), "{message}");
    assert!(message.contains("; "), "{message}");
}

// --- Bank-day adjustment ---

#[test]
fn closed_month_end_moves_later() {
    let cal = calendar_closing(2024, &[date(2024, 1, 31)]);
    let source = InMemoryTermsSource::new()
        .with_rule("SE01", end_of_month())
        .with_calendar("SE01", &cal)
        .with_policy("SE01", ApArType::Receivable, AdjustmentPolicy::Later);
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());

    let result = calc
        .calculate("SE01", "EOM", ApArType::Receivable, date(2024, 1, 10))
        .unwrap()
        .unwrap();
    assert_eq!(result.tentative_due_date, date(2024, 1, 31));
    assert_eq!(result.due_date, date(2024, 2, 1));

    // The payable side has no policy configured
    let payable = calc
        .calculate("SE01", "EOM", ApArType::Payable, date(2024, 1, 10))
        .unwrap()
        .unwrap();
    assert_eq!(payable.due_date, date(2024, 1, 31));
}

#[test]
fn closed_run_moves_earlier() {
    let cal = calendar_closing(2024, &[date(2024, 1, 29), date(2024, 1, 30), date(2024, 1, 31)]);
    let source = InMemoryTermsSource::new()
        .with_rule("SE01", end_of_month())
        .with_calendar("SE01", &cal)
        .with_policy("SE01", ApArType::Payable, AdjustmentPolicy::Earlier);
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());

    let result = calc
        .calculate("SE01", "EOM", ApArType::Payable, date(2024, 1, 10))
        .unwrap()
        .unwrap();
    assert_eq!(result.due_date, date(2024, 1, 28));
}

#[test]
fn missing_or_short_mask_leaves_date() {
    let closed_all = "1".repeat(366);
    let short = "1".repeat(MIN_MASK_LEN - 1);

    let source = InMemoryTermsSource::new().with_mask("SHORT", 2024, short);
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());
    let d = date(2024, 1, 31);
    assert_eq!(calc.adjust("NOMASK", d, AdjustmentPolicy::Later).unwrap(), d);
    assert_eq!(calc.adjust("SHORT", d, AdjustmentPolicy::Later).unwrap(), d);

    let source = InMemoryTermsSource::new().with_mask("ALL", 2024, closed_all);
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());
    assert_eq!(calc.adjust("ALL", d, AdjustmentPolicy::NoAdjustment).unwrap(), d);
}

#[test]
fn crossing_into_next_year_fetches_its_mask() {
    let this_year = calendar_closing(2024, &[date(2024, 12, 31)]);
    let next_year = calendar_closing(2025, &[date(2025, 1, 1)]);
    let source = InMemoryTermsSource::new()
        .with_calendar("SE01", &this_year)
        .with_calendar("SE01", &next_year);
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());

    let result = calc
        .adjust("SE01", date(2024, 12, 31), AdjustmentPolicy::Later)
        .unwrap();
    assert_eq!(result, date(2025, 1, 2));
    assert_eq!(source.mask_lookups(), 2);
}

#[test]
fn crossing_into_previous_year_fetches_its_mask() {
    let last_year = calendar_closing(2024, &[date(2024, 12, 31)]);
    let this_year = calendar_closing(2025, &[date(2025, 1, 1)]);
    let source = InMemoryTermsSource::new()
        .with_calendar("SE01", &last_year)
        .with_calendar("SE01", &this_year);
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());

    let result = calc
        .adjust("SE01", date(2025, 1, 1), AdjustmentPolicy::Earlier)
        .unwrap();
    assert_eq!(result, date(2024, 12, 30));
    assert_eq!(source.mask_lookups(), 2);
}

#[test]
fn crossing_into_year_without_mask_stops() {
    let cal = calendar_closing(2024, &[date(2024, 12, 31)]);
    let source = InMemoryTermsSource::new().with_calendar("SE01", &cal);
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());
    assert_eq!(
        calc.adjust("SE01", date(2024, 12, 31), AdjustmentPolicy::Later)
            .unwrap(),
        date(2025, 1, 1)
    );
}

#[test]
fn weekend_calendar_moves_to_monday() {
    let source = InMemoryTermsSource::new().with_calendar("SE01", &BankDayCalendar::weekends(2024));
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());
    // 2024-06-15 is a Saturday
    assert_eq!(
        calc.adjust("SE01", date(2024, 6, 15), AdjustmentPolicy::Later)
            .unwrap(),
        date(2024, 6, 17)
    );
    assert_eq!(
        calc.adjust("SE01", date(2024, 6, 15), AdjustmentPolicy::Earlier)
            .unwrap(),
        date(2024, 6, 14)
    );
}

#[test]
fn config_deserializes_with_defaults() {
    let config: TermsConfig =
        serde_json::from_str(r#"{"strategy":"MethodCode","tables":{"terms":"acr_terms"}}"#)
            .unwrap();
    assert_eq!(config.strategy, DueDateStrategy::MethodCode);
    assert_eq!(config.tables.terms, "acr_terms");
    assert_eq!(config.tables.calendar, TermsTables::default().calendar);

    let empty: TermsConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, TermsConfig::default());
}

// --- Host-backed source ---

#[cfg(feature = "sql")]
mod host {
    use super::*;
    use sekit::core::{ContextBuilder, HostDatabase, HostRow};

    struct ErpDb {
        mask_2024: String,
    }

    impl HostDatabase for ErpDb {
        fn execute(&self, _sql: &str) -> Result<u64, SeError> {
            Ok(0)
        }

        fn read_scalar(&self, sql: &str) -> Result<Option<String>, SeError> {
            if sql.contains("FROM se_bank_days") && sql.contains("year = 2024") {
                Ok(Some(self.mask_2024.clone()))
            } else {
                Ok(None)
            }
        }

        fn read_rows(&self, sql: &str) -> Result<Vec<HostRow>, SeError> {
            if sql.contains("FROM se_payment_terms") {
                if !sql.contains("terms_id = 'EOM'") {
                    return Ok(Vec::new());
                }
                return Ok(vec![HostRow::new()
                    .with("description", Some("End of month"))
                    .with("due_days", Some("0"))
                    .with("day_due", Some("0"))
                    .with("free_month_due", Some("1"))
                    .with("method", None)]);
            }
            if sql.contains("FROM se_parameters") {
                return Ok(vec![
                    HostRow::new()
                        .with("client", Some("*"))
                        .with("bu", None)
                        .with("param_value", Some("<")),
                    HostRow::new()
                        .with("client", Some("SE01"))
                        .with("bu", Some("NORTH"))
                        .with("param_value", Some(">")),
                ]);
            }
            Err(SeError::Host(format!("unexpected query: {sql}")))
        }
    }

    fn db() -> ErpDb {
        ErpDb {
            mask_2024: calendar_closing(2024, &[date(2024, 1, 31)]).to_mask(),
        }
    }

    #[test]
    fn business_unit_policy_wins() {
        let db = db();
        let ctx = ContextBuilder::new("SE01").business_unit("NORTH").build();
        let source = HostTermsSource::for_context(&db, TermsTables::default(), &ctx);
        let calc = PaymentTermsCalculator::new(source, TermsConfig::default());

        let result = calc
            .calculate("SE01", "EOM", ApArType::Receivable, date(2024, 1, 10))
            .unwrap()
            .unwrap();
        assert_eq!(result.due_date, date(2024, 2, 1));
    }

    #[test]
    fn global_policy_applies_elsewhere() {
        let db = db();
        let source = HostTermsSource::new(&db, TermsTables::default());
        let calc = PaymentTermsCalculator::new(source, TermsConfig::default());

        let result = calc
            .calculate("SE01", "EOM", ApArType::Receivable, date(2024, 1, 10))
            .unwrap()
            .unwrap();
        assert_eq!(result.due_date, date(2024, 1, 30));
        assert!(calc
            .calculate("SE01", "NET10", ApArType::Receivable, date(2024, 1, 10))
            .unwrap()
            .is_none());
    }
}
