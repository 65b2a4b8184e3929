use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// One line of the internal log (JSON lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub date: String, // RFC 3339, local time
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl LogRecord {
    pub fn now(operation: &str, target: &str, message: &str) -> Self {
        Self {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        }
    }
}

/// Write an internal log line at the end of the log file.
pub fn append_record(path: &Path, record: &LogRecord) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let line = serde_json::to_string(record)?;
    writeln!(file, "{line}")?;
    Ok(())
}

/// Read all log records; malformed lines are skipped.
pub fn read_records(path: &Path) -> AppResult<Vec<LogRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect())
}
