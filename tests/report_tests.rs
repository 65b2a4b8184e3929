mod common;
use chrono::NaiveDate;
use common::{entry, temp_out_dir};
use rovertime::errors::AppError;
use rovertime::export::{
    Cell, CellStyle, ExportFormat, ExportLogic, Report, report_file_name,
};
use std::fs;

fn sample_report() -> Report {
    // out of order on purpose: the report sorts its rows
    let entries = vec![
        entry(5.0, "15-02-2024", "Release deploy"),
        entry(3.0, "01-02-2024", "Hotfix"),
    ];
    Report::build(&entries, 10.0).unwrap()
}

fn created() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn test_empty_entries_refused() {
    let err = Report::build(&[], 10.0).unwrap_err();
    assert!(matches!(err, AppError::ExportEmpty));
}

#[test]
fn test_table_layout() {
    let report = sample_report();
    let table = report.table();

    // header + 2 rows + blank + 3 footer rows
    assert_eq!(table.len(), 7);
    assert_eq!(
        table[0],
        vec![
            Cell::Text("Date".into()),
            Cell::Text("Hours".into()),
            Cell::Text("Task".into())
        ]
    );
    assert_eq!(table[1][0], Cell::Text("01-02-2024".into()));
    assert_eq!(table[2][2], Cell::Text("Release deploy".into()));
    assert!(table[3].iter().all(|c| *c == Cell::Empty));
    assert_eq!(table[4][0], Cell::Text("Total Hours".into()));
    assert_eq!(table[4][1], Cell::Number(8.0));
    assert_eq!(table[6][2], Cell::Empty);
}

#[test]
fn test_totals_ignore_multiplier() {
    let s = sample_report().summary;
    assert_eq!(s.total_hours, 8.0);
    assert_eq!(s.in_days, 1.0);
    assert_eq!(s.total_amount, 80.0);
}

#[test]
fn test_text_table_footer_formatting() {
    let text = sample_report().text_table();

    assert_eq!(text[1], vec!["01-02-2024", "3", "Hotfix"]);
    assert_eq!(text[4], vec!["Total Hours", "8", ""]);
    assert_eq!(text[5], vec!["In Days", "1.00", ""]);
    assert_eq!(text[6], vec!["Total Amount", "80.00", ""]);
}

#[test]
fn test_spreadsheet_cell_styles() {
    let report = sample_report();

    for c in 0..3 {
        assert_eq!(report.cell_style(0, c), CellStyle::Bold);
        assert_eq!(report.cell_style(1, c), CellStyle::Plain);
        assert_eq!(report.cell_style(3, c), CellStyle::Plain);
        assert_eq!(report.cell_style(4, c), CellStyle::Bold);
    }
    // In Days / Total Amount values
    assert_eq!(report.cell_style(5, 1), CellStyle::BoldAmount);
    assert_eq!(report.cell_style(6, 1), CellStyle::BoldAmount);
    assert_eq!(report.cell_style(6, 0), CellStyle::Bold);
}

#[test]
fn test_spreadsheet_column_widths() {
    // "Total Amount" + 2 + 5, "80.00" loses to "Hours", "Release deploy" + 2
    assert_eq!(sample_report().column_widths(), [19, 7, 16]);

    let long_task = vec![entry(1.0, "01-02-2024", "Database migration rehearsal")];
    let report = Report::build(&long_task, 10.0).unwrap();
    assert_eq!(report.column_widths()[2], "Database migration rehearsal".len() + 2);
}

#[test]
fn test_report_file_name() {
    assert_eq!(
        report_file_name(created(), "xlsx"),
        "overtime-report-01-03-2024.xlsx"
    );
}

#[test]
fn test_export_csv() {
    let dir = temp_out_dir("report_csv");
    let report = sample_report();
    let path =
        ExportLogic::export(&report, ExportFormat::Csv, &dir, created(), true, false).unwrap();

    assert_eq!(path, dir.join("overtime-report-01-03-2024.csv"));
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Date,Hours,Task");
    assert_eq!(lines[1], "01-02-2024,3,Hotfix");
    assert!(content.contains("Total Hours,8"));
    assert!(content.contains("In Days,1.00"));
    assert!(content.contains("Total Amount,80.00"));
}

#[test]
fn test_export_xlsx() {
    let dir = temp_out_dir("report_xlsx");
    let report = sample_report();
    let path =
        ExportLogic::export(&report, ExportFormat::Xlsx, &dir, created(), true, false).unwrap();

    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("xlsx"));
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.len() > 100);
    // xlsx is a zip container
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_json() {
    let dir = temp_out_dir("report_json");
    let report = sample_report();
    let path =
        ExportLogic::export(&report, ExportFormat::Json, &dir, created(), true, false).unwrap();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["rows"].as_array().map(Vec::len), Some(2));
    assert_eq!(v["rows"][0]["task"], "Hotfix");
    assert_eq!(v["summary"]["total_hours"].as_f64(), Some(8.0));
    assert_eq!(v["summary"]["total_amount"].as_f64(), Some(80.0));
}

#[test]
fn test_export_overwrites_with_force() {
    let dir = temp_out_dir("report_force");
    let report = sample_report();

    let first =
        ExportLogic::export(&report, ExportFormat::Csv, &dir, created(), true, false).unwrap();
    fs::write(&first, "stale").unwrap();
    let second =
        ExportLogic::export(&report, ExportFormat::Csv, &dir, created(), true, false).unwrap();

    assert_eq!(first, second);
    assert!(fs::read_to_string(&second).unwrap().starts_with("Date,Hours,Task"));
}
