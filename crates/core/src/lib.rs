pub mod errors;
pub mod layout;
pub mod models;
pub mod providers;

use tracing::{debug, warn};

use errors::CoreError;
use layout::brush::BrushTrack;
use layout::stacked::WindowedStackLayout;
use models::layout::LayoutResult;
use models::period::{build_dataset, monthly_to_yearly, Period};
use models::settings::ChartSettings;
use models::view::MaxAmount;
use providers::generation::{Generation, GenerationCounter};
use providers::traits::ChartDataSource;

/// Aggregation granularity of the stacked chart's dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Monthly,
    Yearly,
}

/// Main entry point for the account-charts core library.
///
/// One instance per chart page, owned by the caller: holds the monthly and
/// yearly datasets, the windowed stacked layout, and the fetch generation
/// counter. The embedding UI forwards its widget events to the setters and
/// redraws from the returned layouts; nothing in here touches the DOM.
#[must_use]
pub struct AccountCharts {
    settings: ChartSettings,
    monthly: Vec<Period>,
    yearly: Vec<Period>,
    aggregation: Aggregation,
    stacked: WindowedStackLayout,
    generations: GenerationCounter,
}

impl std::fmt::Debug for AccountCharts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountCharts")
            .field("monthly_periods", &self.monthly.len())
            .field("yearly_periods", &self.yearly.len())
            .field("aggregation", &self.aggregation)
            .field("view", self.stacked.view())
            .finish()
    }
}

impl AccountCharts {
    pub fn new(settings: ChartSettings) -> Self {
        let mut stacked = WindowedStackLayout::new(settings.rows_num, settings.band_padding);
        if let Some(max) = settings.default_max_amount {
            stacked.set_max_amount(MaxAmount::Fixed(max));
        }

        Self {
            settings,
            monthly: Vec::new(),
            yearly: Vec::new(),
            aggregation: Aggregation::Monthly,
            stacked,
            generations: GenerationCounter::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Begin a reload, superseding any fetch still in flight.
    pub fn begin_reload(&mut self) -> Generation {
        self.generations.begin()
    }

    /// Install a freshly built monthly dataset; the yearly aggregate is
    /// derived from it and the view returns to the monthly dataset.
    ///
    /// Returns `false`, leaving all state untouched, when `generation` has
    /// been superseded by a newer [`AccountCharts::begin_reload`].
    pub fn install_dataset(&mut self, generation: Generation, monthly: Vec<Period>) -> bool {
        if !self.generations.is_current(generation) {
            warn!(?generation, "discarding stale dataset fetch");
            return false;
        }

        debug!(periods = monthly.len(), "installing dataset");
        self.yearly = monthly_to_yearly(&monthly);
        self.monthly = monthly;
        self.aggregation = Aggregation::Monthly;
        self.stacked.set_dataset(self.monthly.clone());
        true
    }

    /// Fetch account metadata and monthly amounts from `source`, build the
    /// dataset, and install it. Returns `Ok(false)` when a reload begun
    /// later finished first; the later data wins.
    pub async fn reload_from(
        &mut self,
        source: &dyn ChartDataSource,
    ) -> Result<bool, CoreError> {
        let generation = self.begin_reload();

        let accounts = source.fetch_accounts().await?;
        let rows = source.fetch_monthly_amounts().await?;
        let dataset = build_dataset(&accounts, &rows);

        Ok(self.install_dataset(generation, dataset))
    }

    // ── Stacked chart ───────────────────────────────────────────────

    /// Switch between the monthly and yearly dataset. A switch is a new
    /// view session: the window resets, filters carry over. Returns
    /// `false` when already on `aggregation`.
    pub fn set_aggregation(&mut self, aggregation: Aggregation) -> bool {
        if aggregation == self.aggregation {
            return false;
        }

        self.aggregation = aggregation;
        let dataset = match aggregation {
            Aggregation::Monthly => self.monthly.clone(),
            Aggregation::Yearly => self.yearly.clone(),
        };
        self.stacked.set_dataset(dataset);
        true
    }

    #[must_use]
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// The stacked layout, for reading state and computing geometry.
    #[must_use]
    pub fn stacked(&self) -> &WindowedStackLayout {
        &self.stacked
    }

    /// The stacked layout, for forwarding view events.
    pub fn stacked_mut(&mut self) -> &mut WindowedStackLayout {
        &mut self.stacked
    }

    /// Compute stacked-chart geometry at the current view state.
    pub fn compute_stacked_layout(&mut self, plot_width: f64, row_height: f64) -> LayoutResult {
        self.stacked.compute_layout(plot_width, row_height)
    }

    /// Brush arithmetic for a scroll track of the given height, bound to
    /// the current dataset and window length.
    #[must_use]
    pub fn brush_track(&self, track_height: f64) -> BrushTrack {
        BrushTrack::new(
            track_height,
            self.stacked.dataset_len(),
            self.stacked.view().rows_num,
        )
    }
}
