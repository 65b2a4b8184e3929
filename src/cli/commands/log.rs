use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::FileStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = FileStore::from_config(cfg);
        let records = store.read_log()?;

        if records.is_empty() {
            println!("📜 Internal log is empty.");
        } else {
            LogLogic::print_log(&records);
        }
    }

    Ok(())
}
