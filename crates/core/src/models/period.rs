use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::account::{AccountAmount, AccountType};

/// One time-bucketed row of the dataset: a month ("YYYY-MM") or a year
/// ("YYYY"), with one amount per charted account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// Period label, also the vertical-axis tick text
    pub label: String,

    /// Amounts in a fixed account order shared by every period of a dataset
    pub amounts: Vec<AccountAmount>,
}

impl Period {
    pub fn new(label: impl Into<String>, amounts: Vec<AccountAmount>) -> Self {
        Self {
            label: label.into(),
            amounts,
        }
    }
}

/// One account record from the tabular metadata feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: u32,

    /// Raw type code; converted via [`AccountType::from_code`] when the
    /// dataset is built
    #[serde(rename = "type")]
    pub type_code: u8,

    pub name: String,
}

/// One row of the monthly amounts feed: a month label plus the amount per
/// account id. Rows arrive newest month first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAmounts {
    pub ym: String,
    pub amounts: HashMap<u32, f64>,
}

/// Join account metadata with monthly amount rows into a dataset.
///
/// The feed delivers rows newest-first; the result is reversed so layout
/// code only ever sees chronologically ascending periods. Accounts with an
/// unknown type code are skipped: no type set could ever show them. A
/// missing cell counts as zero.
pub fn build_dataset(accounts: &[AccountRecord], rows: &[MonthlyAmounts]) -> Vec<Period> {
    let mut dataset: Vec<Period> = rows
        .iter()
        .map(|row| {
            let amounts = accounts
                .iter()
                .filter_map(|account| {
                    let Some(account_type) = AccountType::from_code(account.type_code) else {
                        warn!(
                            account_id = account.id,
                            type_code = account.type_code,
                            "skipping account with unknown type code"
                        );
                        return None;
                    };
                    let amount = row.amounts.get(&account.id).copied().unwrap_or(0.0);
                    Some(AccountAmount::new(
                        account.id,
                        account_type,
                        account.name.as_str(),
                        amount,
                    ))
                })
                .collect();
            Period::new(row.ym.as_str(), amounts)
        })
        .collect();

    dataset.reverse();
    dataset
}

/// Aggregate a monthly dataset into a yearly one.
///
/// Income and Expense are flows and sum across the year; Assets and
/// Liabilities are point-in-time balances and take the latest month's value.
/// Relies on all periods sharing the account order `build_dataset` produces.
pub fn monthly_to_yearly(monthly: &[Period]) -> Vec<Period> {
    let mut yearly: Vec<Period> = Vec::new();
    let mut current_year = String::new();

    for period in monthly {
        let year: String = period.label.chars().take(4).collect();

        if current_year != year {
            current_year = year.clone();
            yearly.push(Period::new(year, Vec::new()));
        }

        let Some(bucket) = yearly.last_mut() else {
            continue;
        };

        for (k, amount) in period.amounts.iter().enumerate() {
            match bucket.amounts.get_mut(k) {
                Some(slot) => match slot.account_type {
                    AccountType::Income | AccountType::Expense => slot.amount += amount.amount,
                    // balances: the latest month of the year wins
                    AccountType::Assets | AccountType::Liabilities => slot.amount = amount.amount,
                },
                None => bucket.amounts.push(amount.clone()),
            }
        }
    }

    yearly
}
