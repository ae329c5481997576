use std::collections::HashMap;

use crate::models::account::{AccountAmount, PaletteGroup};
use crate::models::period::Period;

/// The pastel palette account colors are drawn from, cycled when a palette
/// group holds more accounts than colors.
pub const PALETTE: [&str; 17] = [
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd", "#fddaec",
    "#f2f2f2", "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9", "#fff2ae", "#f1e2cc",
    "#cccccc",
];

/// Color used when an account somehow has no assignment.
pub const FALLBACK_COLOR: &str = "#cccccc";

/// Stable account-to-color assignment.
///
/// Colors are handed out in first-seen order over the whole dataset,
/// independently for the balance-sheet pair and the profit-and-loss pair,
/// and never change once assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorMap {
    assigned: HashMap<u32, &'static str>,
    next_index: HashMap<PaletteGroup, usize>,
}

impl ColorMap {
    /// Assign colors for every account appearing in `dataset`, in dataset
    /// iteration order.
    #[must_use]
    pub fn from_dataset(dataset: &[Period]) -> Self {
        let mut map = Self::default();
        for period in dataset {
            for amount in &period.amounts {
                map.assign(amount);
            }
        }
        map
    }

    fn assign(&mut self, amount: &AccountAmount) {
        if self.assigned.contains_key(&amount.account_id) {
            return;
        }
        let index = self
            .next_index
            .entry(amount.account_type.palette_group())
            .or_insert(0);
        self.assigned
            .insert(amount.account_id, PALETTE[*index % PALETTE.len()]);
        *index += 1;
    }

    #[must_use]
    pub fn color_of(&self, account_id: u32) -> Option<&'static str> {
        self.assigned.get(&account_id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
