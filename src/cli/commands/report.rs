use crate::cli::commands::open_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::today;
use crate::utils::path::expand_tilde;

/// Generate the overtime report for the current entries.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        format,
        dir,
        force,
        open,
    } = cmd
    {
        let mut state = open_state(cfg);

        // ExportEmpty is raised here, before any file is touched
        let report = state.report()?;

        let out_dir = match dir {
            Some(d) => expand_tilde(d),
            None => cfg.report_path(),
        };

        let path = ExportLogic::export(&report, *format, &out_dir, today(), *force, *open)?;

        state.log_event(
            "report",
            format.as_str(),
            &format!("Report saved as {}", path.display()),
        );
    }
    Ok(())
}
