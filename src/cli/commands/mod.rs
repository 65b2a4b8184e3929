pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod rates;
pub mod report;
pub mod reset;
pub mod salary;

use crate::config::Config;
use crate::core::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::OvertimeMultiplier;
use crate::store::FileStore;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Load salary and entries from the files named in `cfg`.
pub(crate) fn open_state(cfg: &Config) -> AppState<FileStore> {
    AppState::load(FileStore::from_config(cfg))
}

/// 1-based position typed by the user → 0-based index.
pub(crate) fn to_index(position: usize) -> AppResult<usize> {
    position.checked_sub(1).ok_or(AppError::InvalidIndex(position))
}

/// `--multiplier` if given, else the config default.
pub(crate) fn resolve_multiplier(
    arg: Option<OvertimeMultiplier>,
    cfg: &Config,
) -> AppResult<OvertimeMultiplier> {
    match arg {
        Some(m) => Ok(m),
        None => cfg.multiplier(),
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    io::stdout().flush().ok();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
