use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::period::{AccountRecord, MonthlyAmounts};
use crate::models::series::{BalancePoint, ProfitLossSeries};

use super::traits::{ChartDataSource, SeriesFilter};
use super::tsv;

/// Production data source: the bookkeeping backend's JSON endpoints
/// (`/api/assets`, `/api/balances`, `/api/pl`) and TSV feeds
/// (`/accounts.tsv`, `/monthly_amount.tsv`).
pub struct HttpDataSource {
    client: Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str, filter: Option<&SeriesFilter>) -> String {
        let query = filter.map(query_string).unwrap_or_default();
        format!("{}{path}{query}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: Option<&SeriesFilter>,
    ) -> Result<T, CoreError> {
        let url = self.url(path, filter);
        debug!(%url, "fetching chart data");

        let response = self.client.get(&url).send().await?;
        response.json().await.map_err(|e| CoreError::Api {
            endpoint: path.to_string(),
            message: format!("failed to parse response: {e}"),
        })
    }

    async fn get_text(&self, path: &str) -> Result<String, CoreError> {
        let url = self.url(path, None);
        debug!(%url, "fetching tabular data");

        let response = self.client.get(&url).send().await?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl ChartDataSource for HttpDataSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_assets(&self) -> Result<Vec<BalancePoint>, CoreError> {
        self.get_json("/api/assets", None).await
    }

    async fn fetch_balances(
        &self,
        filter: &SeriesFilter,
    ) -> Result<Vec<BalancePoint>, CoreError> {
        self.get_json("/api/balances", Some(filter)).await
    }

    async fn fetch_profit_loss(
        &self,
        filter: &SeriesFilter,
    ) -> Result<ProfitLossSeries, CoreError> {
        self.get_json("/api/pl", Some(filter)).await
    }

    async fn fetch_accounts(&self) -> Result<Vec<AccountRecord>, CoreError> {
        let text = self.get_text("/accounts.tsv").await?;
        tsv::parse_accounts(&text)
    }

    async fn fetch_monthly_amounts(&self) -> Result<Vec<MonthlyAmounts>, CoreError> {
        let text = self.get_text("/monthly_amount.tsv").await?;
        tsv::parse_monthly_amounts(&text)
    }
}

fn query_string(filter: &SeriesFilter) -> String {
    let mut params = Vec::new();

    if let Some(year) = filter.year {
        params.push(format!("year={year}"));
    }
    if filter.cash {
        params.push("cash=true".to_string());
    }
    if filter.extraordinary {
        params.push("extraordinary=true".to_string());
    }

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}
