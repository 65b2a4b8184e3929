use crate::core::calculator::{calculate_totals, current_rates};
use crate::errors::AppResult;
use crate::models::{Entry, OvertimeMultiplier, Rates, Totals};
use serde::Serialize;

/// Everything the CLI shows under the entry list.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary {
    pub salary: f64,
    pub multiplier: OvertimeMultiplier,
    pub rates: Rates,
    pub totals: Totals,
}

pub struct Core;

impl Core {
    /// Recomputed from scratch on every call: rates for the current month,
    /// totals over all entries with the selected multiplier.
    pub fn build_summary(
        salary: f64,
        entries: &[Entry],
        multiplier: OvertimeMultiplier,
    ) -> AppResult<Summary> {
        let rates = current_rates(salary)?;
        let totals = calculate_totals(entries, rates.hourly, multiplier);

        Ok(Summary {
            salary,
            multiplier,
            rates,
            totals,
        })
    }
}
