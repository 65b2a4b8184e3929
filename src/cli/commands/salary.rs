use crate::cli::commands::open_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::fmt_amount;

/// Show or set the monthly salary.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Salary { value } = cmd {
        let mut state = open_state(cfg);

        if let Some(raw) = value {
            let v = state.set_salary(raw)?;
            success(format!("Salary set to {}", fmt_amount(v)));
        } else {
            println!("Salary: {}", fmt_amount(state.salary()));
        }

        let rates = state.rates()?;
        println!(
            "Daily Rate: {}  |  Hourly Rate: {}",
            fmt_amount(rates.daily),
            fmt_amount(rates.hourly)
        );
    }

    Ok(())
}
