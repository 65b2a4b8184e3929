//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{bold, pad_left, pad_right, strip_ansi};
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
    /// Cells wider than this are wrapped onto continuation lines.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(header: &str, align: Align) -> Self {
        Self {
            header: header.to_string(),
            align,
            max_width: None,
        }
    }

    pub fn wrapped(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Display width of each column (header included, capped by `max_width`).
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(strip_ansi(c).as_str()))
                    .max()
                    .unwrap_or(0);
                let w = content.max(UnicodeWidthStr::width(col.header.as_str()));
                match col.max_width {
                    Some(max) => w.min(max.max(col.header.len())),
                    None => w,
                }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&bold(&pad_cell(&col.header, *w, col.align)));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + widths.len();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows (wrapped cells spill onto extra lines)
        for row in &self.rows {
            let cells: Vec<Vec<String>> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (col, w))| {
                    let text = row.get(i).map(String::as_str).unwrap_or("");
                    match col.max_width {
                        Some(_) => textwrap::wrap(text, *w)
                            .into_iter()
                            .map(|l| l.into_owned())
                            .collect(),
                        None => vec![text.to_string()],
                    }
                })
                .collect();

            let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
            for line in 0..lines {
                for (i, col) in self.columns.iter().enumerate() {
                    let text = cells[i].get(line).map(String::as_str).unwrap_or("");
                    out.push_str(&pad_cell(text, widths[i], col.align));
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}

/// Pad using display width, so wide characters and ANSI codes line up.
fn pad_cell(s: &str, width: usize, align: Align) -> String {
    let visible = UnicodeWidthStr::width(strip_ansi(s).as_str());
    let extra = s.len().saturating_sub(visible);
    match align {
        Align::Left => pad_right(s, width + extra),
        Align::Right => pad_left(s, width + extra),
    }
}
