/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Zero figures are greyed out, the rest use `color`.
pub fn color_for_amount(value: f64, color: &'static str) -> &'static str {
    if value == 0.0 { GREY } else { color }
}

/// Wrap `value` in the colour chosen for `raw`.
pub fn colorize_amount(raw: f64, value: &str, color: &'static str) -> String {
    format!("{}{value}{RESET}", color_for_amount(raw, color))
}

/// Dates that survived a tolerant load without being normalized are flagged.
pub fn colorize_date(value: &str, canonical: bool) -> String {
    if canonical {
        value.to_string()
    } else {
        format!("{YELLOW}{value}{RESET}")
    }
}
