// src/export/model.rs

use crate::core::calculator::calculate_totals;
use crate::core::repository::sort_entries;
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, OvertimeMultiplier, Totals};
use crate::utils::{fmt_amount, fmt_hours};
use chrono::NaiveDate;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Extra width for every spreadsheet column, plus a little more for the date column.
const COLUMN_PADDING: usize = 2;
const FIRST_COLUMN_EXTRA: usize = 5;

/// One data row of the report.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub date: String,
    pub hours: f64,
    pub task: String,
}

/// Footer figures. The amount never includes the overtime multiplier.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct ReportSummary {
    pub total_hours: f64,
    pub in_days: f64,
    pub total_amount: f64,
}

impl From<Totals> for ReportSummary {
    fn from(t: Totals) -> Self {
        Self {
            total_hours: t.hours,
            in_days: t.days,
            total_amount: t.amount,
        }
    }
}

/// A single cell of the rendered table.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => fmt_hours(*n),
            Cell::Empty => String::new(),
        }
    }
}

/// Spreadsheet formatting of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellStyle {
    /// centered
    Plain,
    /// bold, centered
    Bold,
    /// bold, centered, two decimals
    BoldAmount,
}

#[derive(Serialize, Clone, Debug)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub summary: ReportSummary,
}

/// Header row: Date | Hours | Task
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["Date", "Hours", "Task"]
}

pub(crate) fn summary_labels() -> [&'static str; 3] {
    ["Total Hours", "In Days", "Total Amount"]
}

impl Report {
    /// Build the report table from the entries and the current hourly rate.
    /// An empty entry list is refused.
    pub fn build(entries: &[Entry], hourly_rate: f64) -> AppResult<Self> {
        if entries.is_empty() {
            return Err(AppError::ExportEmpty);
        }

        let mut sorted = entries.to_vec();
        sort_entries(&mut sorted);

        let rows = sorted
            .into_iter()
            .map(|e| ReportRow {
                date: e.date,
                hours: e.hours,
                task: e.task,
            })
            .collect();

        let totals = calculate_totals(entries, hourly_rate, OvertimeMultiplier::X1);

        Ok(Self {
            rows,
            summary: totals.into(),
        })
    }

    /// (label, value) of the three footer lines.
    pub fn summary_rows(&self) -> [(&'static str, f64); 3] {
        let [h, d, a] = summary_labels();
        [
            (h, self.summary.total_hours),
            (d, self.summary.in_days),
            (a, self.summary.total_amount),
        ]
    }

    /// Full table: header, data rows, one blank row, then the three footer rows.
    pub fn table(&self) -> Vec<Vec<Cell>> {
        let mut out: Vec<Vec<Cell>> = Vec::with_capacity(self.rows.len() + 5);

        out.push(get_headers().into_iter().map(|h| Cell::Text(h.into())).collect());

        for r in &self.rows {
            out.push(vec![
                Cell::Text(r.date.clone()),
                Cell::Number(r.hours),
                Cell::Text(r.task.clone()),
            ]);
        }

        out.push(vec![Cell::Empty, Cell::Empty, Cell::Empty]);

        for (label, value) in self.summary_rows() {
            out.push(vec![Cell::Text(label.into()), Cell::Number(value), Cell::Empty]);
        }

        out
    }

    /// Same table as strings (CSV / terminal); footer figures get two decimals
    /// except the hours total.
    pub fn text_table(&self) -> Vec<Vec<String>> {
        let footer_start = self.rows.len() + 2;
        self.table()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .map(|c| match c {
                        Cell::Number(n) if i > footer_start => fmt_amount(*n),
                        other => other.as_text(),
                    })
                    .collect()
            })
            .collect()
    }

    /// Header and footer rows are bold; `In Days` and `Total Amount` values
    /// also get two decimals.
    pub fn cell_style(&self, row: usize, col: usize) -> CellStyle {
        let footer_start = self.rows.len() + 2;
        match row {
            0 => CellStyle::Bold,
            r if r > footer_start && col == 1 => CellStyle::BoldAmount,
            r if r >= footer_start => CellStyle::Bold,
            _ => CellStyle::Plain,
        }
    }

    /// Spreadsheet column widths: widest text + 2, the first column 5 more.
    pub fn column_widths(&self) -> [usize; 3] {
        let mut widths = [0usize; 3];
        for row in self.text_table() {
            for (c, v) in row.iter().enumerate() {
                widths[c] = widths[c].max(UnicodeWidthStr::width(v.as_str()));
            }
        }
        for (c, w) in widths.iter_mut().enumerate() {
            *w += COLUMN_PADDING;
            if c == 0 {
                *w += FIRST_COLUMN_EXTRA;
            }
        }
        widths
    }
}

/// `overtime-report-<DD-MM-YYYY>.<ext>`
pub fn report_file_name(created: NaiveDate, ext: &str) -> String {
    format!(
        "overtime-report-{}.{ext}",
        crate::utils::date::format_canonical(created)
    )
}
