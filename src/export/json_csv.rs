// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::Report;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed: `{ rows: [...], summary: {...} }`.
pub(crate) fn export_json(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the same layout as the spreadsheet (header, rows, blank, footer).
pub(crate) fn export_csv(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    for row in report.text_table() {
        wtr.write_record(&row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
