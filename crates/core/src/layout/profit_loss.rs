use serde::{Deserialize, Serialize};

use crate::models::series::{format_month, ProfitLossSeries};

/// One stacked segment of a profit/loss half-row, in amount units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlSegment {
    /// Account name, also the in-bar label
    pub key: String,

    /// Cumulative lower bound
    pub start: f64,

    /// Cumulative upper bound; `end - start` is this account's share
    pub end: f64,
}

/// One month of the profit/loss chart: the income half-row and the
/// expense half-row, each stacked from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlRow {
    /// "YYYY-MM"
    pub month: String,

    pub income: Vec<PlSegment>,
    pub expense: Vec<PlSegment>,
}

/// Sign-split stacked layout for the profit/loss chart.
///
/// Positive amounts stack into the income half of a month's row, negated
/// negative amounts into the expense half; both halves start at zero and
/// share one scale ceiling so the rows stay comparable. Every key appears
/// in both halves, zero-width where it does not apply, keeping segment
/// order identical across rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitLossLayout {
    rows: Vec<PlRow>,
    max_amount: f64,
}

impl ProfitLossLayout {
    #[must_use]
    pub fn new(series: &ProfitLossSeries) -> Self {
        let mut rows = Vec::with_capacity(series.values.len());
        let mut max_amount = 0.0_f64;

        for value_row in &series.values {
            let income = stack_signed(&series.keys, value_row, 1.0);
            let expense = stack_signed(&series.keys, value_row, -1.0);

            max_amount = max_amount.max(stack_total(&income)).max(stack_total(&expense));

            rows.push(PlRow {
                month: format_month(value_row.month),
                income,
                expense,
            });
        }

        Self { rows, max_amount }
    }

    #[must_use]
    pub fn rows(&self) -> &[PlRow] {
        &self.rows
    }

    /// Greater of the two halves' stack totals over all months.
    #[must_use]
    pub fn max_amount(&self) -> f64 {
        self.max_amount
    }

    /// Month labels in row order, for the vertical axis.
    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.month.as_str())
    }
}

/// Stack one sign's share of a month: amounts are multiplied by `sign` and
/// clamped at zero, so each half only ever grows.
fn stack_signed(
    keys: &[String],
    row: &crate::models::series::ProfitLossRow,
    sign: f64,
) -> Vec<PlSegment> {
    let mut total = 0.0;
    keys.iter()
        .map(|key| {
            let value = (row.amount(key) * sign).max(0.0);
            let segment = PlSegment {
                key: key.clone(),
                start: total,
                end: total + value,
            };
            total += value;
            segment
        })
        .collect()
}

fn stack_total(segments: &[PlSegment]) -> f64 {
    segments.last().map_or(0.0, |s| s.end)
}
