pub mod rates;
pub mod totals;

pub use rates::{
    HOURS_PER_DAY, current_rates, daily_rate, days_in_month, hourly_rate, rates_for,
};
pub use totals::{calculate_totals, total_hours};
