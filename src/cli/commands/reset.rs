use crate::cli::commands::{ask_confirmation, open_state};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let prompt = "This will reset all data including salary and overtime entries.";

        if !*yes && !ask_confirmation(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut state = open_state(cfg);
        state.reset()?;
        success("All data has been reset successfully.");
    }

    Ok(())
}
