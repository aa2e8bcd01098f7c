use chrono::NaiveDate;
use sekit::terms::*;

fn main() {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    // Swedish bank holidays on top of weekends
    let mut calendar = BankDayCalendar::weekends(2024);
    for holiday in [date(2024, 3, 29), date(2024, 4, 1), date(2024, 5, 1), date(2024, 12, 24)] {
        calendar.close(holiday);
    }

    let net30 = TermRuleBuilder::new("30")
        .description("30 days net")
        .due_days(30)
        .build()
        .unwrap();
    let eom = TermRuleBuilder::new("EOM")
        .description("End of month")
        .free_month_due(1)
        .build()
        .unwrap();

    let source = InMemoryTermsSource::new()
        .with_rule("SE01", net30)
        .with_rule("SE01", eom)
        .with_calendar("SE01", &calendar)
        .with_policy("SE01", ApArType::Receivable, AdjustmentPolicy::Later)
        .with_policy("SE01", ApArType::Payable, AdjustmentPolicy::Earlier);
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());

    for (terms_id, ap_ar, invoice_date) in [
        ("30", ApArType::Receivable, date(2024, 2, 28)),
        ("30", ApArType::Payable, date(2024, 2, 28)),
        ("EOM", ApArType::Receivable, date(2024, 8, 5)),
        ("NET60", ApArType::Receivable, date(2024, 8, 5)),
    ] {
        match calc.calculate("SE01", terms_id, ap_ar, invoice_date) {
            Ok(Some(r)) => println!(
                "{terms_id:<5} {ap_ar:?} {invoice_date} -> {} (tentative {}) {}",
                r.due_date, r.tentative_due_date, r.description
            ),
            Ok(None) => println!("{terms_id:<5} no such terms"),
            Err(e) => eprintln!("{terms_id:<5} failed: {e}"),
        }
    }
}
