use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{FileStore, Store};
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the data directory (if missing)
///  - the configuration file (skipped in test mode)
///  - empty salary / entries files when they do not exist yet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rOvertime…");

    cfg.init_all(cli.test)?;
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    let mut store = FileStore::from_config(cfg);
    store.ensure_files()?;

    println!("💰 Salary file : {}", store.salary_path.display());
    println!("🗂️  Entries file: {}", store.entries_path.display());

    // internal log (non-blocking)
    if let Err(e) = store.append_log(
        "init",
        "",
        &format!("Data files initialized in {}", cfg.data_path().display()),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("rOvertime initialization completed!");
    Ok(())
}
