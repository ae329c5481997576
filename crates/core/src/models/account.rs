use serde::{Deserialize, Serialize};

/// The side of the books an account belongs to.
/// Decides which chart family shows the account and which color palette it
/// draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Assets (cash, bank accounts, receivables)
    Assets,
    /// Liabilities (loans, card balances)
    Liabilities,
    /// Income (salary, interest)
    Income,
    /// Expense (rent, groceries)
    Expense,
}

impl AccountType {
    /// Numeric code used by the tabular account feed.
    /// Unknown codes return `None`; such accounts are dropped from charting
    /// since no type set can ever show them.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(AccountType::Assets),
            2 => Some(AccountType::Liabilities),
            3 => Some(AccountType::Income),
            4 => Some(AccountType::Expense),
            _ => None,
        }
    }

    /// The wire code for this type (inverse of [`AccountType::from_code`]).
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            AccountType::Assets => 1,
            AccountType::Liabilities => 2,
            AccountType::Income => 3,
            AccountType::Expense => 4,
        }
    }

    /// Which of the two independent color palettes this type draws from.
    /// Assets/Liabilities share one palette, Income/Expense the other.
    #[must_use]
    pub fn palette_group(&self) -> PaletteGroup {
        match self {
            AccountType::Assets | AccountType::Liabilities => PaletteGroup::BalanceSheet,
            AccountType::Income | AccountType::Expense => PaletteGroup::ProfitLoss,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Assets => write!(f, "Assets"),
            AccountType::Liabilities => write!(f, "Liabilities"),
            AccountType::Income => write!(f, "Income"),
            AccountType::Expense => write!(f, "Expense"),
        }
    }
}

/// Palette family an account's color is assigned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteGroup {
    /// Assets and Liabilities
    BalanceSheet,
    /// Income and Expense
    ProfitLoss,
}

/// One account's value within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountAmount {
    /// Stable account identity across all periods
    pub account_id: u32,

    /// Account category
    pub account_type: AccountType,

    /// Display label
    pub account_name: String,

    /// Signed amount; the sign picks the stacking group (debit/credit side)
    pub amount: f64,
}

impl AccountAmount {
    pub fn new(
        account_id: u32,
        account_type: AccountType,
        account_name: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            account_id,
            account_type,
            account_name: account_name.into(),
            amount,
        }
    }
}
