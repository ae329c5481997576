use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point of a balance series from the JSON API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    /// Month as the wire's YYYYMM integer (e.g. 202401)
    pub month: u32,

    /// Balance in minor units, signed
    pub balance: i64,
}

impl BalancePoint {
    pub fn new(month: u32, balance: i64) -> Self {
        Self { month, balance }
    }

    /// Display label, "YYYY-MM".
    #[must_use]
    pub fn label(&self) -> String {
        format_month(self.month)
    }

    /// First day of the month, for time axes. `None` for a malformed month.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt((self.month / 100) as i32, self.month % 100, 1)
    }
}

/// Normalize a YYYYMM wire label to "YYYY-MM".
#[must_use]
pub fn format_month(ym: u32) -> String {
    format!("{:04}-{:02}", ym / 100, ym % 100)
}

/// Profit/loss breakdown from the JSON API: the account-name keys in
/// stacking order, plus one row per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossSeries {
    pub keys: Vec<String>,
    pub values: Vec<ProfitLossRow>,
}

/// One month's row of the profit/loss breakdown. The wire sends a flat
/// object: the `month` key next to one entry per account key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossRow {
    pub month: u32,

    #[serde(flatten)]
    pub amounts: HashMap<String, f64>,
}

impl ProfitLossRow {
    /// Amount for an account key; a missing key counts as zero.
    #[must_use]
    pub fn amount(&self, key: &str) -> f64 {
        self.amounts.get(key).copied().unwrap_or(0.0)
    }
}
