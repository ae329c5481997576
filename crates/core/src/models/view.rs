use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::account::AccountType;

/// Rows visible in the stacked-chart window unless configured otherwise.
pub const DEFAULT_ROWS_NUM: usize = 12;

/// The set of account types currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSet(BTreeSet<AccountType>);

impl TypeSet {
    pub fn of(types: &[AccountType]) -> Self {
        Self(types.iter().copied().collect())
    }

    /// Income and Expense: the default view.
    #[must_use]
    pub fn profit_loss() -> Self {
        Self::of(&[AccountType::Income, AccountType::Expense])
    }

    /// Assets and Liabilities.
    #[must_use]
    pub fn balance_sheet() -> Self {
        Self::of(&[AccountType::Assets, AccountType::Liabilities])
    }

    /// A single type, for the one-sided views.
    #[must_use]
    pub fn only(account_type: AccountType) -> Self {
        Self::of(&[account_type])
    }

    #[must_use]
    pub fn contains(&self, account_type: AccountType) -> bool {
        self.0.contains(&account_type)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = AccountType> + '_ {
        self.0.iter().copied()
    }
}

impl Default for TypeSet {
    fn default() -> Self {
        Self::profit_loss()
    }
}

/// Ceiling of the horizontal amount scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MaxAmount {
    /// Derived from the visible data on every layout pass
    Auto,
    /// Fixed, so the scale stays comparable across windows and filters
    Fixed(f64),
}

/// The mutable display state of the windowed stacked chart.
///
/// All transitions go through [`ViewState::apply`]; the couplings between
/// fields (a type-set change drops the drill-down, a fixed ceiling disables
/// auto scaling) live there and nowhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Index of the first visible dataset row
    pub start_row: usize,

    /// Window length in rows
    pub rows_num: usize,

    /// Drill-down target; when set, only this account is shown, pinned to x=0
    pub filter_account_id: Option<u32>,

    /// Account types currently shown
    pub show_types: TypeSet,

    /// Amount-scale ceiling mode
    pub max_amount: MaxAmount,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            start_row: 0,
            rows_num: DEFAULT_ROWS_NUM,
            filter_account_id: None,
            show_types: TypeSet::default(),
            max_amount: MaxAmount::Auto,
        }
    }
}

/// A user-level event against the view. Plain data; the UI layer maps its
/// widget callbacks onto these and forwards them.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Show a different set of account types
    ShowTypes(TypeSet),
    /// Set or clear the single-account drill-down
    DrillDown(Option<u32>),
    /// Scroll the window; `dataset_len` bounds the clamp
    Window { start_row: usize, dataset_len: usize },
    /// Change the scale ceiling mode
    MaxAmount(MaxAmount),
}

impl ViewState {
    /// Apply an event, returning the successor state, or `None` when the
    /// event changes nothing. UI bindings call setters unconditionally on
    /// every click; `None` tells the caller to skip the redraw.
    #[must_use]
    pub fn apply(&self, event: &ViewEvent) -> Option<ViewState> {
        match event {
            ViewEvent::ShowTypes(types) => {
                // an empty set would blank the chart; ignore it
                if types.is_empty() || *types == self.show_types {
                    return None;
                }
                let mut next = self.clone();
                next.show_types = types.clone();
                // the drill-down is tied to the shown type set
                next.filter_account_id = None;
                Some(next)
            }
            ViewEvent::DrillDown(account_id) => {
                if *account_id == self.filter_account_id {
                    return None;
                }
                let mut next = self.clone();
                next.filter_account_id = *account_id;
                Some(next)
            }
            ViewEvent::Window {
                start_row,
                dataset_len,
            } => {
                let clamped = clamp_start_row(*start_row, *dataset_len, self.rows_num);
                if clamped == self.start_row {
                    return None;
                }
                let mut next = self.clone();
                next.start_row = clamped;
                Some(next)
            }
            ViewEvent::MaxAmount(max_amount) => {
                if *max_amount == self.max_amount {
                    return None;
                }
                let mut next = self.clone();
                next.max_amount = *max_amount;
                Some(next)
            }
        }
    }
}

/// Clamp a window start to `[0, max(0, dataset_len - rows_num)]`.
/// A dataset shorter than the window always starts at 0.
#[must_use]
pub fn clamp_start_row(start_row: usize, dataset_len: usize, rows_num: usize) -> usize {
    start_row.min(dataset_len.saturating_sub(rows_num))
}
