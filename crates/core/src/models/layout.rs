use serde::{Deserialize, Serialize};

/// Geometry for one visible bar, in chart-local coordinates.
///
/// The core computes these; the frontend only renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    /// Account this bar belongs to
    pub account_id: u32,

    /// Display label (also the in-bar text, if it fits)
    pub account_name: String,

    /// Assigned color, stable for the account across all periods
    pub color: String,

    /// Signed source amount (for tooltips)
    pub amount: f64,

    /// Stacked offset within this period and sign group, in amount units
    pub prev_total: f64,

    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Everything a rendering collaborator needs to draw one stacked-chart
/// update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// One entry per visible bar, in dataset order
    pub bars: Vec<BarGeometry>,

    /// Ceiling of the horizontal scale actually used for this pass
    pub max_amount: f64,

    /// Labels of the windowed periods, for the vertical axis
    pub visible_periods: Vec<String>,

    /// Vertical extent of the plot (visible rows times row height)
    pub plot_height: f64,
}
