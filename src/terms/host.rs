use tracing::debug;

use crate::core::{Context, HostDatabase, HostRow, SeError};
use crate::sql::quote_string;

use super::calendar::{AdjustmentPolicy, ApArType};
use super::config::TermsTables;
use super::rule::{TermOffset, TermRule, TermRuleBuilder, TermsMethod};
use super::source::TermsSource;

/// Client code of parameter rows that apply to every client.
pub const GLOBAL_CLIENT: &str = "*";

/// [`TermsSource`] reading the extension tables through the host database.
///
/// Stored values that do not parse fail the lookup; nothing is defaulted.
pub struct HostTermsSource<'a, D: HostDatabase + ?Sized> {
    db: &'a D,
    tables: TermsTables,
    business_unit: Option<String>,
}

impl<'a, D: HostDatabase + ?Sized> HostTermsSource<'a, D> {
    pub fn new(db: &'a D, tables: TermsTables) -> Self {
        Self {
            db,
            tables,
            business_unit: None,
        }
    }

    /// Source that prefers policy rows of the context's business unit.
    pub fn for_context(db: &'a D, tables: TermsTables, context: &Context) -> Self {
        Self {
            db,
            tables,
            business_unit: context.business_unit.clone(),
        }
    }

    fn offset_from(row: &HostRow, prefix: &str) -> Result<TermOffset, SeError> {
        let col = |name: &str| format!("{prefix}{name}");
        let months = row.parse_opt_i64(&col("months_offset"))?.unwrap_or(0);
        let days = row.parse_opt_i64(&col("days_offset"))?.unwrap_or(0);
        let fixed_day = row.parse_opt_i64(&col("fixed_day"))?.unwrap_or(0);
        let last_day = row.parse_opt_i64(&col("last_day_flag"))?.unwrap_or(0);

        let months = u32::try_from(months)
            .map_err(|_| SeError::malformed(col("months_offset"), months.to_string()))?;
        let fixed_day = match fixed_day {
            0 => None,
            d => Some(
                u32::try_from(d)
                    .map_err(|_| SeError::malformed(col("fixed_day"), d.to_string()))?,
            ),
        };
        Ok(TermOffset {
            months,
            days,
            fixed_day,
            last_day_of_month: last_day != 0,
        })
    }

    fn rule_from(terms_id: &str, row: &HostRow) -> Result<TermRule, SeError> {
        let method_code = row.text("method");
        let method = TermsMethod::from_code(&method_code)
            .ok_or_else(|| SeError::malformed("method", method_code.clone()))?;

        let offset = Self::offset_from(row, "")?;
        let mut builder = TermRuleBuilder::new(terms_id)
            .description(row.text("description"))
            .due_days(row.parse_i64("due_days")?)
            .day_of_month_due(row.parse_i64("day_due")?)
            .free_month_due(row.parse_i64("free_month_due")?)
            .method(method)
            .offset(offset);

        if let Some(split_day) = row.parse_opt_i64("split_day")?.filter(|d| *d != 0) {
            let split_day = u32::try_from(split_day)
                .map_err(|_| SeError::malformed("split_day", split_day.to_string()))?;
            builder = builder.split(split_day, offset, Self::offset_from(row, "split_")?);
        }

        builder.build()
    }
}

impl<D: HostDatabase + ?Sized> TermsSource for HostTermsSource<'_, D> {
    fn term_rule(&self, client: &str, terms_id: &str) -> Result<Option<TermRule>, SeError> {
        let sql = format!(
            "SELECT description, due_days, day_due, free_month_due, method, \
             months_offset, days_offset, fixed_day, last_day_flag, split_day, \
             split_months_offset, split_days_offset, split_fixed_day, split_last_day_flag \
             FROM {} WHERE client = {} AND terms_id = {}",
            self.tables.terms,
            quote_string(client),
            quote_string(terms_id)
        );
        let rows = self.db.read_rows(&sql)?;
        let Some(row) = rows.first() else {
            return Ok(None);
        };
        let rule = Self::rule_from(terms_id, row)?;
        debug!(client, terms_id, method = rule.method.code(), "payment terms rule loaded");
        Ok(Some(rule))
    }

    fn bank_day_mask(&self, client: &str, year: i32) -> Result<Option<String>, SeError> {
        let sql = format!(
            "SELECT day_mask FROM {} WHERE client = {} AND year = {year}",
            self.tables.calendar,
            quote_string(client)
        );
        Ok(self
            .db
            .read_scalar(&sql)?
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty()))
    }

    fn adjustment_policy(
        &self,
        client: &str,
        ap_ar: ApArType,
    ) -> Result<AdjustmentPolicy, SeError> {
        let sql = format!(
            "SELECT client, bu, param_value FROM {} WHERE name = {} AND ap_ar = {} \
             AND client IN ({}, {})",
            self.tables.parameters,
            quote_string(&self.tables.policy_parameter),
            quote_string(ap_ar.code()),
            quote_string(client),
            quote_string(GLOBAL_CLIENT)
        );
        let rows = self.db.read_rows(&sql)?;

        // client + business unit, then client only, then global
        let rank = |row: &HostRow| -> Option<u8> {
            let row_client = row.text("client");
            let row_bu = row.text("bu");
            if row_client == client {
                match (&self.business_unit, row_bu.is_empty()) {
                    (_, true) => Some(1),
                    (Some(bu), false) if *bu == row_bu => Some(0),
                    _ => None,
                }
            } else if row_client == GLOBAL_CLIENT {
                Some(2)
            } else {
                None
            }
        };

        let best = rows
            .iter()
            .filter_map(|row| rank(row).map(|r| (r, row)))
            .min_by_key(|(r, _)| *r)
            .map(|(_, row)| row.text("param_value"));

        Ok(best
            .map(|value| AdjustmentPolicy::from_value(&value))
            .unwrap_or_default())
    }
}
