use serde::Serialize;

/// Daily / hourly pay rate for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rates {
    pub daily: f64,
    pub hourly: f64,
}

/// Aggregated figures over the entry list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub hours: f64,
    pub days: f64,
    pub amount: f64,
}
