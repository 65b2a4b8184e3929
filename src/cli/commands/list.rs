use crate::cli::commands::{open_state, resolve_multiplier};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Entry;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, colorize_amount, colorize_date};
use crate::utils::formatting::totals_line;
use crate::utils::table::{Align, Column, Table};
use crate::utils::{fmt_amount, fmt_hours};

/// Wrap width for the task column.
const TASK_WIDTH: usize = 48;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { multiplier } = cmd {
        let state = open_state(cfg);
        let multiplier = resolve_multiplier(*multiplier, cfg)?;
        let summary = state.summary(multiplier)?;

        header("Overtime Entries");

        if state.entries().is_empty() {
            println!("No overtime entries.");
        } else {
            print!("{}", render_entries(state.entries()));
        }

        println!();
        println!(
            "Daily Rate: {}  |  Hourly Rate: {}  |  Overtime Rate: {}",
            colorize_amount(summary.rates.daily, &fmt_amount(summary.rates.daily), CYAN),
            colorize_amount(summary.rates.hourly, &fmt_amount(summary.rates.hourly), CYAN),
            multiplier.label()
        );
        let line = totals_line(
            summary.totals.hours,
            summary.totals.days,
            summary.totals.amount,
        );
        println!("{}", colorize_amount(summary.totals.amount, &line, GREEN));
    }
    Ok(())
}

/// Entries as a table: #, Hours, Date, Task.
pub fn render_entries(entries: &[Entry]) -> String {
    let mut table = Table::new(vec![
        Column::new("#", Align::Right),
        Column::new("Hours", Align::Right),
        Column::new("Date", Align::Left),
        Column::new("Task", Align::Left).wrapped(TASK_WIDTH),
    ]);

    for (i, e) in entries.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            fmt_hours(e.hours),
            colorize_date(&e.date, e.parsed_date().is_some()),
            e.task.clone(),
        ]);
    }

    table.render()
}
