//! rOvertime main entrypoint.

use rovertime::run;
use rovertime::ui::messages::{error, input_hint};

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        if e.is_entry_input() {
            input_hint();
        }
        std::process::exit(1);
    }
}
