// ═══════════════════════════════════════════════════════════════════
// Provider Tests — TSV parsing, fetch generations, mock data source,
// HttpDataSource construction
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;

use account_charts_core::errors::CoreError;
use account_charts_core::models::period::{AccountRecord, MonthlyAmounts};
use account_charts_core::models::series::{BalancePoint, ProfitLossSeries};
use account_charts_core::providers::generation::GenerationCounter;
use account_charts_core::providers::http::HttpDataSource;
use account_charts_core::providers::traits::{ChartDataSource, SeriesFilter};
use account_charts_core::providers::tsv::{parse_accounts, parse_monthly_amounts};

// ═══════════════════════════════════════════════════════════════════
// Mock Data Source (for testing without a backend)
// ═══════════════════════════════════════════════════════════════════

struct MockDataSource;

#[async_trait]
impl ChartDataSource for MockDataSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_assets(&self) -> Result<Vec<BalancePoint>, CoreError> {
        Ok(vec![
            BalancePoint::new(202401, 1000),
            BalancePoint::new(202402, 1200),
        ])
    }

    async fn fetch_balances(
        &self,
        filter: &SeriesFilter,
    ) -> Result<Vec<BalancePoint>, CoreError> {
        if filter.year == Some(1999) {
            return Err(CoreError::Api {
                endpoint: "/api/balances".to_string(),
                message: "no data for 1999".to_string(),
            });
        }
        Ok(vec![BalancePoint::new(202401, -50)])
    }

    async fn fetch_profit_loss(
        &self,
        _filter: &SeriesFilter,
    ) -> Result<ProfitLossSeries, CoreError> {
        Ok(serde_json::from_str(
            r#"{"keys": ["Salary"], "values": [{"month": 202401, "Salary": 100}]}"#,
        )?)
    }

    async fn fetch_accounts(&self) -> Result<Vec<AccountRecord>, CoreError> {
        parse_accounts("id\ttype\tname\n1\t3\tSalary\n2\t4\tRent\n")
    }

    async fn fetch_monthly_amounts(&self) -> Result<Vec<MonthlyAmounts>, CoreError> {
        parse_monthly_amounts("ym\t1\t2\n2024-02\t2500\t-950\n2024-01\t2500\t-900\n")
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TSV — accounts
// ═══════════════════════════════════════════════════════════════════

mod accounts_tsv {
    use super::*;

    #[test]
    fn parses_records() {
        let records = parse_accounts("id\ttype\tname\n1\t3\tSalary\n12\t4\tRent\n").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].type_code, 3);
        assert_eq!(records[0].name, "Salary");
        assert_eq!(records[1].id, 12);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(parse_accounts("id\ttype\tname\n").unwrap().is_empty());
    }

    #[test]
    fn name_may_contain_spaces() {
        let records = parse_accounts("id\ttype\tname\n1\t1\tMain bank account\n").unwrap();
        assert_eq!(records[0].name, "Main bank account");
    }

    #[test]
    fn malformed_id_is_an_error() {
        let result = parse_accounts("id\ttype\tname\nxyz\t3\tSalary\n");
        assert!(matches!(result, Err(CoreError::Tabular(_))));
    }

    #[test]
    fn unknown_type_codes_still_parse() {
        // type validation happens at dataset construction, not here
        let records = parse_accounts("id\ttype\tname\n9\t8\tMystery\n").unwrap();
        assert_eq!(records[0].type_code, 8);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TSV — monthly amounts
// ═══════════════════════════════════════════════════════════════════

mod monthly_tsv {
    use super::*;

    #[test]
    fn parses_rows_per_account_column() {
        let rows =
            parse_monthly_amounts("ym\t1\t2\n2024-02\t2500\t-950\n2024-01\t2500\t-900\n").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ym, "2024-02");
        assert_eq!(rows[0].amounts.get(&1), Some(&2500.0));
        assert_eq!(rows[0].amounts.get(&2), Some(&-950.0));
        assert_eq!(rows[1].ym, "2024-01");
    }

    #[test]
    fn empty_cell_is_zero() {
        let rows = parse_monthly_amounts("ym\t1\t2\n2024-01\t\t-900\n").unwrap();
        assert_eq!(rows[0].amounts.get(&1), Some(&0.0));
    }

    #[test]
    fn malformed_cell_is_zero() {
        let rows = parse_monthly_amounts("ym\t1\n2024-01\tn/a\n").unwrap();
        assert_eq!(rows[0].amounts.get(&1), Some(&0.0));
    }

    #[test]
    fn non_account_columns_are_ignored() {
        let rows = parse_monthly_amounts("ym\t1\tnote\n2024-01\t100\thello\n").unwrap();
        assert_eq!(rows[0].amounts.len(), 1);
    }

    #[test]
    fn missing_ym_is_an_error() {
        let result = parse_monthly_amounts("1\t2\n100\t-900\n");
        assert!(matches!(result, Err(CoreError::Tabular(_))));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(parse_monthly_amounts("ym\t1\t2\n").unwrap().is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Generations
// ═══════════════════════════════════════════════════════════════════

mod generations {
    use super::*;

    #[test]
    fn latest_generation_is_current() {
        let mut counter = GenerationCounter::new();
        let first = counter.begin();
        assert!(counter.is_current(first));
    }

    #[test]
    fn superseded_generation_is_stale() {
        let mut counter = GenerationCounter::new();
        let first = counter.begin();
        let second = counter.begin();

        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }

    #[test]
    fn generations_are_ordered() {
        let mut counter = GenerationCounter::new();
        let first = counter.begin();
        let second = counter.begin();
        assert!(first < second);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Mock source behaves like a data source
// ═══════════════════════════════════════════════════════════════════

mod mock_source {
    use super::*;

    #[tokio::test]
    async fn fetches_assets() {
        let points = MockDataSource.fetch_assets().await.unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].balance, 1000);
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let filter = SeriesFilter {
            year: Some(1999),
            ..SeriesFilter::default()
        };
        let result = MockDataSource.fetch_balances(&filter).await;
        assert!(matches!(result, Err(CoreError::Api { .. })));
    }

    #[tokio::test]
    async fn fetches_profit_loss() {
        let series = MockDataSource
            .fetch_profit_loss(&SeriesFilter::default())
            .await
            .unwrap();
        assert_eq!(series.keys, vec!["Salary"]);
    }

    #[tokio::test]
    async fn trait_object_is_usable() {
        let source: &dyn ChartDataSource = &MockDataSource;
        assert_eq!(source.name(), "mock");
        let accounts = source.fetch_accounts().await.unwrap();
        assert_eq!(accounts.len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SeriesFilter / HttpDataSource construction
// ═══════════════════════════════════════════════════════════════════

mod construction {
    use super::*;

    #[test]
    fn filter_default_is_unfiltered() {
        let filter = SeriesFilter::default();
        assert_eq!(filter.year, None);
        assert!(!filter.cash);
        assert!(!filter.extraordinary);
    }

    #[test]
    fn current_year_filter_is_plausible() {
        let filter = SeriesFilter::current_year();
        let year = filter.year.unwrap();
        assert!(year >= 2024);
    }

    #[test]
    fn http_source_has_a_name() {
        let source = HttpDataSource::new("http://localhost:8080/");
        assert_eq!(source.name(), "http");
    }
}
