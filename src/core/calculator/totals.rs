use crate::core::calculator::rates::HOURS_PER_DAY;
use crate::models::{Entry, OvertimeMultiplier, Totals};

pub fn total_hours(entries: &[Entry]) -> f64 {
    entries.iter().map(|e| e.hours).sum()
}

/// Hours, days (hours / 8) and amount (hours × hourly rate × multiplier).
pub fn calculate_totals(
    entries: &[Entry],
    hourly_rate: f64,
    multiplier: OvertimeMultiplier,
) -> Totals {
    let hours = total_hours(entries);

    Totals {
        hours,
        days: hours / HOURS_PER_DAY,
        amount: hours * hourly_rate * multiplier.factor(),
    }
}
