use crate::errors::{AppError, AppResult};
use crate::models::Rates;
use crate::utils::date;

/// Length of a working day, used for hourly rate and the "in days" figure.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Gregorian month length (28–31, leap-year aware).
pub fn days_in_month(year: i32, month: u32) -> AppResult<u32> {
    date::days_in_month(year, month)
        .ok_or_else(|| AppError::InvalidDate(format!("{month:02}-{year}")))
}

/// salary / days in the month
pub fn daily_rate(salary: f64, year: i32, month: u32) -> AppResult<f64> {
    Ok(salary / days_in_month(year, month)? as f64)
}

/// daily rate / 8
pub fn hourly_rate(salary: f64, year: i32, month: u32) -> AppResult<f64> {
    Ok(daily_rate(salary, year, month)? / HOURS_PER_DAY)
}

pub fn rates_for(salary: f64, year: i32, month: u32) -> AppResult<Rates> {
    let daily = daily_rate(salary, year, month)?;
    Ok(Rates {
        daily,
        hourly: daily / HOURS_PER_DAY,
    })
}

/// Rates for the current calendar month, whatever the month of the entries.
pub fn current_rates(salary: f64) -> AppResult<Rates> {
    let (year, month) = date::current_year_month();
    rates_for(salary, year, month)
}
