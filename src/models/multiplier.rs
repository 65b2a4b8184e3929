use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::Serialize;

/// Selectable overtime pay multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
pub enum OvertimeMultiplier {
    #[default]
    #[value(name = "x1", alias = "1")]
    X1,
    #[value(name = "x1.5", alias = "1.5")]
    X1_5,
    #[value(name = "x2", alias = "2")]
    X2,
    #[value(name = "x3", alias = "3")]
    X3,
}

impl OvertimeMultiplier {
    pub const ALL: [OvertimeMultiplier; 4] = [Self::X1, Self::X1_5, Self::X2, Self::X3];

    pub fn factor(&self) -> f64 {
        match self {
            OvertimeMultiplier::X1 => 1.0,
            OvertimeMultiplier::X1_5 => 1.5,
            OvertimeMultiplier::X2 => 2.0,
            OvertimeMultiplier::X3 => 3.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OvertimeMultiplier::X1 => "x1",
            OvertimeMultiplier::X1_5 => "x1.5",
            OvertimeMultiplier::X2 => "x2",
            OvertimeMultiplier::X3 => "x3",
        }
    }

    /// Parse "x1.5", "X2", "3", ... (used for the config default).
    pub fn from_code(code: &str) -> AppResult<Self> {
        let c = code.trim().to_lowercase();
        let bare = c.strip_prefix('x').unwrap_or(&c);

        Self::ALL
            .into_iter()
            .find(|m| &m.label()[1..] == bare)
            .ok_or_else(|| AppError::InvalidMultiplier(code.to_string()))
    }
}
