//! Payment terms and bank-day adjustment.
//!
//! A [`PaymentTermsCalculator`] resolves a [`TermRule`] for (client, terms
//! id), derives the tentative due date from the invoice date, and moves it off
//! non-banking days according to the client's [`AdjustmentPolicy`].
//!
//! Lookups go through a [`TermsSource`]. [`InMemoryTermsSource`] keeps
//! everything in maps; with the `sql` feature, `HostTermsSource` reads the
//! host's extension tables through a
//! [`HostDatabase`](crate::core::HostDatabase).
//!
//! ```
//! use chrono::NaiveDate;
//! use sekit::terms::*;
//!
//! let mut calendar = BankDayCalendar::weekends(2024);
//! calendar.close(NaiveDate::from_ymd_opt(2024, 3, 29).unwrap()); // Good Friday
//!
//! let source = InMemoryTermsSource::new()
//!     .with_rule("SE01", TermRuleBuilder::new("30").due_days(30).build().unwrap())
//!     .with_calendar("SE01", &calendar)
//!     .with_policy("SE01", ApArType::Receivable, AdjustmentPolicy::Later);
//!
//! let calc = PaymentTermsCalculator::new(&source, TermsConfig::default());
//! let base = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
//! let result = calc
//!     .calculate("SE01", "30", ApArType::Receivable, base)
//!     .unwrap()
//!     .unwrap();
//!
//! // Friday 29 March is closed, then the weekend
//! assert_eq!(result.tentative_due_date, NaiveDate::from_ymd_opt(2024, 3, 29).unwrap());
//! assert_eq!(result.due_date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
//! ```

mod calculator;
mod calendar;
mod config;
#[cfg(feature = "sql")]
mod host;
mod rule;
mod source;

pub use calculator::{MAX_ADJUSTMENT_STEPS, PaymentTermsCalculator, PaymentTermsResult};
pub use calendar::{AdjustmentPolicy, ApArType, BankDayCalendar, MIN_MASK_LEN, is_non_banking};
pub use config::{DueDateStrategy, TermsConfig, TermsConfigBuilder, TermsTables};
#[cfg(feature = "sql")]
pub use host::{GLOBAL_CLIENT, HostTermsSource};
pub use rule::{
    SplitRule, TermOffset, TermRule, TermRuleBuilder, TermsMethod, add_days, last_day_of_month,
    with_day_clamped,
};
pub use source::{InMemoryTermsSource, TermsSource};
