use async_trait::async_trait;
use chrono::Datelike;

use crate::errors::CoreError;
use crate::models::period::{AccountRecord, MonthlyAmounts};
use crate::models::series::{BalancePoint, ProfitLossSeries};

/// Query filter accepted by the balance and profit/loss endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesFilter {
    /// Restrict to one calendar year
    pub year: Option<i32>,

    /// Cash-basis figures instead of accrual
    pub cash: bool,

    /// Include extraordinary (one-off) entries
    pub extraordinary: bool,
}

impl SeriesFilter {
    /// Filter for the current calendar year.
    #[must_use]
    pub fn current_year() -> Self {
        Self {
            year: Some(chrono::Utc::now().date_naive().year()),
            ..Self::default()
        }
    }
}

/// Trait abstraction over the chart data endpoints.
///
/// Production sources fetch JSON and TSV over HTTP; tests substitute an
/// in-memory mock. If the backend changes, only the one implementation is
/// touched.
#[async_trait]
pub trait ChartDataSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Total-asset balances by month, oldest first.
    async fn fetch_assets(&self) -> Result<Vec<BalancePoint>, CoreError>;

    /// Net balances by month, optionally filtered.
    async fn fetch_balances(&self, filter: &SeriesFilter)
        -> Result<Vec<BalancePoint>, CoreError>;

    /// Profit/loss breakdown by account.
    async fn fetch_profit_loss(
        &self,
        filter: &SeriesFilter,
    ) -> Result<ProfitLossSeries, CoreError>;

    /// Account metadata for the stacked chart.
    async fn fetch_accounts(&self) -> Result<Vec<AccountRecord>, CoreError>;

    /// Monthly per-account amounts, newest month first.
    async fn fetch_monthly_amounts(&self) -> Result<Vec<MonthlyAmounts>, CoreError>;
}
