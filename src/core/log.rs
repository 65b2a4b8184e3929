use crate::store::LogRecord;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// ANSI colour for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "salary" => Colour::Cyan,
        "report" => Colour::Blue,
        "reset" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the internal log, one line per record, oldest first.
    pub fn render(records: &[LogRecord]) -> Vec<String> {
        let dates: Vec<String> = records
            .iter()
            .map(|r| {
                chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.date.clone())
            })
            .collect();

        let id_w = records.len().to_string().len();
        let date_w = dates.iter().map(String::len).max().unwrap_or(10);

        let op_w = records
            .iter()
            .map(|r| op_target(r).len())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        records
            .iter()
            .zip(dates)
            .enumerate()
            .map(|(i, (r, date))| {
                let color = color_for_operation(&r.operation);

                let mut colored = color.paint(r.operation.as_str()).to_string();
                if !r.target.is_empty() {
                    colored.push_str(&format!(" ({})", r.target));
                }

                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    i + 1,
                    date,
                    colored,
                    padding,
                    r.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(records: &[LogRecord]) {
        println!("📜 Internal log:\n");
        for line in Self::render(records) {
            println!("{line}");
        }
    }
}

fn op_target(r: &LogRecord) -> String {
    if r.target.is_empty() {
        r.operation.clone()
    } else {
        format!("{} ({})", r.operation, r.target)
    }
}
