// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{Cell, CellStyle, Report};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};
use std::path::Path;

/// Export XLSX: bold centered header and footer, centered cells, sized columns.
pub(crate) fn export_xlsx(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let plain = Format::new().set_align(FormatAlign::Center);
    let bold = Format::new().set_bold().set_align(FormatAlign::Center);
    let bold_amount = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_num_format("0.00");

    for (r, row) in report.table().iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let fmt = match report.cell_style(r, c) {
                CellStyle::Plain => &plain,
                CellStyle::Bold => &bold,
                CellStyle::BoldAmount => &bold_amount,
            };
            write_cell(worksheet, r as u32, c as u16, cell, fmt)?;
        }
    }

    for (c, width) in report.column_widths().into_iter().enumerate() {
        worksheet
            .set_column_width(c as u16, width as f64)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    fmt: &Format,
) -> AppResult<()> {
    match cell {
        Cell::Text(s) => ws.write_with_format(row, col, s.as_str(), fmt),
        Cell::Number(n) => ws.write_with_format(row, col, *n, fmt),
        Cell::Empty => ws.write_blank(row, col, fmt),
    }
    .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
