use crate::cli::commands::{open_state, to_index};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Edit a single field of an entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        index,
        hours,
        date,
        task,
    } = cmd
    {
        let idx = to_index(*index)?;
        let mut state = open_state(cfg);

        if let Some(h) = hours {
            state.edit_hours(idx, h)?;
            success(format!("Entry #{index}: hours updated."));
        } else if let Some(t) = task {
            state.edit_task(idx, t)?;
            success(format!("Entry #{index}: task updated."));
        } else if let Some(d) = date {
            let new_idx = state.edit_date(idx, d)?;
            if new_idx == idx {
                success(format!("Entry #{index}: date updated."));
            } else {
                success(format!(
                    "Entry #{index}: date updated, now listed as #{}.",
                    new_idx + 1
                ));
            }
        }
    }

    Ok(())
}
