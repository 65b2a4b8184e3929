use crate::cli::commands::{ask_confirmation, open_state, to_index};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::fmt_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, yes } = cmd {
        let idx = to_index(*index)?;
        let mut state = open_state(cfg);

        let e = state.repository().get(idx)?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete entry #{index} ({}h on {}: {})? This action is irreversible.",
            fmt_hours(e.hours),
            e.date,
            e.task
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        state.delete_entry(idx)?;
        success(format!("Entry #{index} has been deleted."));
    }

    Ok(())
}
