//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Entry validation
    // ---------------------------
    #[error("Invalid hours: '{0}' (expected a positive number)")]
    InvalidHours(String),

    #[error("Invalid date: '{0}' (expected DD-MM-YYYY)")]
    InvalidDate(String),

    #[error("Task description must not be empty")]
    EmptyTask,

    #[error("No entry at position {0}")]
    InvalidIndex(usize),

    // ---------------------------
    // Salary / rates
    // ---------------------------
    #[error("Invalid salary: '{0}' (expected a non-negative number)")]
    InvalidSalary(String),

    #[error("Invalid overtime multiplier: '{0}' (use x1, x1.5, x2 or x3)")]
    InvalidMultiplier(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("There are no overtime entries to generate a report")]
    ExportEmpty,

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for rejected hours / date / task input (state was left untouched).
    pub fn is_entry_input(&self) -> bool {
        matches!(
            self,
            AppError::InvalidHours(_) | AppError::InvalidDate(_) | AppError::EmptyTask
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
