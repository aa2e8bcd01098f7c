#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use sekit::terms::{
    AdjustmentPolicy, InMemoryTermsSource, PaymentTermsCalculator, TermsConfig,
};

fuzz_target!(|data: &[u8]| {
    let Ok(mask) = std::str::from_utf8(data) else {
        return;
    };
    let source = InMemoryTermsSource::new().with_mask("C", 2024, mask);
    let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());
    let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    for policy in [AdjustmentPolicy::Earlier, AdjustmentPolicy::Later] {
        let _ = calc.adjust("C", date, policy);
    }
});
