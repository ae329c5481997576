use serde::{Deserialize, Serialize};

/// Caller-supplied chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Rows visible in the stacked-chart window
    pub rows_num: usize,

    /// Fixed amount-scale ceiling applied at startup; `None` keeps auto
    /// scaling
    pub default_max_amount: Option<f64>,

    /// Band padding of the stacked chart's vertical scale (inner and outer)
    pub band_padding: f64,

    /// Base URL of the chart data endpoints
    pub base_url: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            rows_num: super::view::DEFAULT_ROWS_NUM,
            default_max_amount: None,
            band_padding: 0.2,
            base_url: "http://localhost:8080".to_string(),
        }
    }
}
