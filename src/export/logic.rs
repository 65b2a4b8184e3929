// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, open_with_system};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{Report, report_file_name};
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` as `overtime-report-<created>.<ext>` inside `dir`.
    ///
    /// - `dir` is created when missing
    /// - an existing file is replaced only with `force` or after confirmation
    /// - `open` hands the result to the platform opener
    pub fn export(
        report: &Report,
        format: ExportFormat,
        dir: &Path,
        created: NaiveDate,
        force: bool,
        open: bool,
    ) -> AppResult<PathBuf> {
        fs::create_dir_all(dir)?;

        let path = dir.join(report_file_name(created, format.extension()));
        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Xlsx => export_xlsx(report, &path)?,
            ExportFormat::Csv => export_csv(report, &path)?,
            ExportFormat::Json => export_json(report, &path)?,
        }

        if open {
            open_with_system(&path)?;
        }

        Ok(path)
    }
}
