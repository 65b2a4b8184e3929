use crate::cli::commands::{open_state, resolve_multiplier};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::date::current_year_month;
use crate::utils::formatting::totals_line;
use crate::utils::fmt_amount;

/// Rates for the current month plus the overtime totals.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rates { multiplier } = cmd {
        let state = open_state(cfg);
        let multiplier = resolve_multiplier(*multiplier, cfg)?;
        let summary = state.summary(multiplier)?;
        let (year, month) = current_year_month();

        println!("Salary: {}  ({:02}-{year})", fmt_amount(summary.salary), month);
        println!(
            "Daily Rate: {}  |  Hourly Rate: {}",
            fmt_amount(summary.rates.daily),
            fmt_amount(summary.rates.hourly)
        );
        println!("Overtime Rate: {}", multiplier.label());
        println!(
            "{}",
            totals_line(
                summary.totals.hours,
                summary.totals.days,
                summary.totals.amount
            )
        );
    }

    Ok(())
}
