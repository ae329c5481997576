use crate::models::account::AccountAmount;
use crate::models::layout::{BarGeometry, LayoutResult};
use crate::models::period::Period;
use crate::models::view::{MaxAmount, TypeSet, ViewEvent, ViewState};

use super::color::{ColorMap, FALLBACK_COLOR};
use super::scale::{BandScale, LinearScale};

/// The data side of the scrollable stacked bar chart.
///
/// Owns the dataset, the visible window and the display filters, and
/// computes per-bar geometry for the rendering collaborator on every
/// update. Within a period, negative and non-negative amounts stack
/// independently from zero; the negative group fills the top half of the
/// period's band, the non-negative group the bottom half.
///
/// All mutation goes through the setters, which report whether anything
/// changed so the caller knows when a redraw is due.
#[derive(Debug, Clone)]
pub struct WindowedStackLayout {
    dataset: Vec<Period>,
    view: ViewState,
    band_padding: f64,
    // rebuilt lazily after a dataset swap
    colors: Option<ColorMap>,
}

/// One amount of the visible window with its stacked offset.
struct Placed<'a> {
    amount: &'a AccountAmount,
    prev_total: f64,
}

impl WindowedStackLayout {
    pub fn new(rows_num: usize, band_padding: f64) -> Self {
        Self {
            dataset: Vec::new(),
            view: ViewState {
                rows_num,
                ..ViewState::default()
            },
            band_padding,
            colors: None,
        }
    }

    // ── State access ────────────────────────────────────────────────

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn dataset(&self) -> &[Period] {
        &self.dataset
    }

    #[must_use]
    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }

    // ── Mutation ────────────────────────────────────────────────────

    /// Replace the dataset (a new view session). The scroll position
    /// resets; type filters, drill-down and the scale ceiling carry over.
    /// Color assignments are rebuilt on the next layout pass.
    pub fn set_dataset(&mut self, dataset: Vec<Period>) {
        self.dataset = dataset;
        self.view.start_row = 0;
        self.colors = None;
    }

    /// Show a different set of account types, dropping any drill-down.
    /// Returns `false` (nothing changed, skip the redraw) when `types`
    /// equals the current set.
    pub fn set_show_types(&mut self, types: TypeSet) -> bool {
        self.apply(ViewEvent::ShowTypes(types))
    }

    /// Set or clear the single-account drill-down.
    pub fn set_filter_account(&mut self, account_id: Option<u32>) -> bool {
        self.apply(ViewEvent::DrillDown(account_id))
    }

    /// Scroll the window. The start row is clamped so the window never
    /// runs past the dataset.
    pub fn set_window(&mut self, start_row: usize) -> bool {
        self.apply(ViewEvent::Window {
            start_row,
            dataset_len: self.dataset.len(),
        })
    }

    /// Change the amount-scale ceiling. A fixed value disables auto
    /// scaling; [`MaxAmount::Auto`] restores it.
    pub fn set_max_amount(&mut self, max_amount: MaxAmount) -> bool {
        self.apply(ViewEvent::MaxAmount(max_amount))
    }

    fn apply(&mut self, event: ViewEvent) -> bool {
        match self.view.apply(&event) {
            Some(next) => {
                self.view = next;
                true
            }
            None => false,
        }
    }

    // ── Layout ──────────────────────────────────────────────────────

    /// Compute geometry for the current window.
    ///
    /// An empty visible slice (empty dataset, or every amount filtered
    /// out) yields an empty bar list, not an error.
    pub fn compute_layout(&mut self, plot_width: f64, row_height: f64) -> LayoutResult {
        let colors = self
            .colors
            .get_or_insert_with(|| ColorMap::from_dataset(&self.dataset));
        let view = &self.view;

        // window slice, then filter and stack each period
        let start = view.start_row.min(self.dataset.len());
        let end = (start + view.rows_num).min(self.dataset.len());
        let window = &self.dataset[start..end];

        let mut periods: Vec<(&str, Vec<Placed<'_>>)> = Vec::with_capacity(window.len());

        for period in window {
            let mut placed = Vec::new();
            // running totals per sign group: [negative, non-negative]
            let mut prev_totals = [0.0_f64; 2];

            for amount in &period.amounts {
                if amount.amount == 0.0 || !view.show_types.contains(amount.account_type) {
                    continue;
                }
                if let Some(filter) = view.filter_account_id {
                    if amount.account_id != filter {
                        continue;
                    }
                }
                let group = usize::from(amount.amount >= 0.0);
                placed.push(Placed {
                    amount,
                    prev_total: prev_totals[group],
                });
                prev_totals[group] += amount.amount.abs();
            }

            periods.push((period.label.as_str(), placed));
        }

        let max_amount = match view.max_amount {
            MaxAmount::Fixed(value) => value,
            MaxAmount::Auto => periods
                .iter()
                .flat_map(|(_, placed)| placed.iter())
                .map(|p| p.prev_total + p.amount.amount.abs())
                .fold(0.0, f64::max),
        };

        let visible_periods: Vec<String> =
            periods.iter().map(|(label, _)| label.to_string()).collect();

        let plot_height = periods.len() as f64 * row_height;
        let x_scale = LinearScale::new((0.0, max_amount), (0.0, plot_width));
        let y_scale = BandScale::new(visible_periods.clone(), (0.0, plot_height), self.band_padding);
        let bar_height = y_scale.bandwidth() / 2.0;

        let mut bars = Vec::new();

        for (label, placed) in &periods {
            let Some(band_y) = y_scale.position(label) else {
                continue;
            };

            for p in placed {
                let amount = p.amount;

                // the drill-down target is pinned to the origin
                let x = if view.filter_account_id == Some(amount.account_id) {
                    0.0
                } else {
                    x_scale.scale(p.prev_total)
                };
                let mut w = x_scale.scale(amount.amount.abs());

                // keep bars inside the plot when a fixed ceiling is exceeded
                if x >= plot_width {
                    w = 0.0;
                } else if x + w > plot_width {
                    w = plot_width - x;
                }

                let y = band_y + if amount.amount >= 0.0 { bar_height } else { 0.0 };

                bars.push(BarGeometry {
                    account_id: amount.account_id,
                    account_name: amount.account_name.clone(),
                    color: colors
                        .color_of(amount.account_id)
                        .unwrap_or(FALLBACK_COLOR)
                        .to_string(),
                    amount: amount.amount,
                    prev_total: p.prev_total,
                    x,
                    y,
                    w,
                    h: bar_height,
                });
            }
        }

        LayoutResult {
            bars,
            max_amount,
            visible_periods,
            plot_height,
        }
    }
}
