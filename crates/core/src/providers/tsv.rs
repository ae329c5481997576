use std::collections::HashMap;

use tracing::warn;

use crate::errors::CoreError;
use crate::models::period::{AccountRecord, MonthlyAmounts};

/// Parse the account metadata feed: tab-separated `id`, `type`, `name`
/// with a header row.
pub fn parse_accounts(text: &str) -> Result<Vec<AccountRecord>, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for record in reader.deserialize::<AccountRecord>() {
        records.push(record?);
    }
    Ok(records)
}

/// Parse the monthly amounts feed: a `ym` column plus one column per
/// account id, newest month first.
///
/// A missing or malformed cell counts as zero; columns whose header is not
/// an account id are ignored. A row without its `ym` label is the one
/// malformation that cannot be normalized away.
pub fn parse_monthly_amounts(text: &str) -> Result<Vec<MonthlyAmounts>, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;

        let mut ym = String::new();
        let mut amounts = HashMap::new();

        for (header, field) in headers.iter().zip(record.iter()) {
            if header == "ym" {
                ym = field.to_string();
                continue;
            }
            let Ok(account_id) = header.parse::<u32>() else {
                warn!(column = header, "ignoring non-account column");
                continue;
            };
            let amount = field.trim().parse::<f64>().unwrap_or(0.0);
            amounts.insert(account_id, amount);
        }

        if ym.is_empty() {
            return Err(CoreError::Tabular(
                "monthly amounts row is missing its ym column".to_string(),
            ));
        }

        rows.push(MonthlyAmounts { ym, amounts });
    }

    Ok(rows)
}
