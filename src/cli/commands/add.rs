use crate::cli::commands::open_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::repository::parse_hours;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::today_str;
use crate::utils::fmt_hours;

/// Add an overtime entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { hours, task, date } = cmd {
        //
        // 1. Parse hours (must be > 0, checked by the repository)
        //
        let h = parse_hours(hours)?;

        //
        // 2. Date (default = today)
        //
        let d = date.clone().unwrap_or_else(today_str);

        //
        // 3. Insert + persist
        //
        let mut state = open_state(cfg);
        let index = state.add_entry(h, &d, task)?;

        let e = &state.entries()[index];
        success(format!(
            "Entry #{} added: {}h on {} ({})",
            index + 1,
            fmt_hours(e.hours),
            e.date,
            e.task
        ));
    }

    Ok(())
}
