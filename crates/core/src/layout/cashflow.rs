use serde::{Deserialize, Serialize};

use crate::models::series::BalancePoint;

use super::scale::LinearScale;

/// One bar of the cash-flow chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowBar {
    /// "YYYY-MM"
    pub month: String,

    pub balance: f64,

    /// Top edge in plot coordinates
    pub y: f64,

    pub height: f64,

    /// Beyond the outlier threshold; clamped to the full half-height so
    /// the renderer can tint it instead of letting it blow up the scale
    pub outlier: bool,
}

/// Mirrored monthly net-balance bars around a zero axis.
///
/// The vertical scale is symmetric and sized by the largest non-outlier
/// balance, so a handful of extreme months cannot flatten the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowLayout {
    bars: Vec<CashFlowBar>,
    threshold: f64,
    scale_max: f64,
}

impl CashFlowLayout {
    #[must_use]
    pub fn new(points: &[BalancePoint], plot_height: f64) -> Self {
        let threshold = outlier_threshold(points);

        let scale_max = points
            .iter()
            .map(|p| (p.balance as f64).abs())
            .filter(|b| *b < threshold)
            .fold(0.0, f64::max);

        let y_scale = LinearScale::new((-scale_max, scale_max), (plot_height, 0.0));
        let half = plot_height / 2.0;

        let bars = points
            .iter()
            .map(|point| {
                let balance = point.balance as f64;
                let outlier = balance.abs() >= threshold;

                let (y, height) = if balance >= 0.0 {
                    if outlier {
                        (0.0, half)
                    } else {
                        let y = y_scale.scale(balance);
                        (y, (half - y).max(0.0))
                    }
                } else if outlier {
                    (half, half)
                } else {
                    (half, (y_scale.scale(balance) - half).max(0.0))
                };

                CashFlowBar {
                    month: point.label(),
                    balance,
                    y,
                    height,
                    outlier,
                }
            })
            .collect();

        Self {
            bars,
            threshold,
            scale_max,
        }
    }

    #[must_use]
    pub fn bars(&self) -> &[CashFlowBar] {
        &self.bars
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Largest non-outlier |balance|; the symmetric domain is ±this.
    #[must_use]
    pub fn scale_max(&self) -> f64 {
        self.scale_max
    }
}

/// Threshold separating outlier months, derived from the interquartile
/// range. When the quartiles straddle zero the IQR widens to the larger
/// absolute quartile, since spans across zero understate the spread of
/// either side.
#[must_use]
pub fn outlier_threshold(points: &[BalancePoint]) -> f64 {
    let mut balances: Vec<f64> = points.iter().map(|p| p.balance as f64).collect();
    balances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = quantile(&balances, 0.25);
    let q3 = quantile(&balances, 0.75);

    let mut iqr = q3 - q1;
    if q3 > 0.0 && q1 < 0.0 {
        iqr = q3.max(q1.abs());
    }

    (q3 + iqr).abs() * 2.0
}

/// Linear-interpolated quantile of a sorted sample.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (h - lo as f64)
}

/// Clamp a horizontal pan offset for a virtual width wider than the
/// viewport: the stage may not scroll past either end.
#[must_use]
pub fn clamp_pan(x: f64, virtual_width: f64, viewport_width: f64) -> f64 {
    let max_translate = (virtual_width - viewport_width).max(0.0);
    x.clamp(-max_translate, 0.0)
}
