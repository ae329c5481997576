use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::series::BalancePoint;

use super::scale::LinearScale;

/// Default gradient colors: light/dark for the positive side, light/dark
/// for the negative side.
pub const POSITIVE_COLORS: (&str, &str) = ("lightsteelblue", "steelblue");
pub const NEGATIVE_COLORS: (&str, &str) = ("lightpink", "firebrick");

/// One renderable point of a balance time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// First day of the month, the time-axis coordinate
    pub date: NaiveDate,

    pub value: f64,

    /// Tooltip label, "YYYY-MM"
    pub label: String,
}

/// One stop of the area-fill gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Offset along the gradient axis, 0.0 to 1.0
    pub offset: f64,
    pub color: String,
}

/// The area-fill gradient in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    pub stops: Vec<GradientStop>,

    /// Gradient start (the negative end) in plot-space y
    pub y1: f64,

    /// Gradient end (the positive end) in plot-space y
    pub y2: f64,
}

/// Pan/zoom transform reported by the renderer's zoom gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// At scale 1 the translation snaps back to the origin.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.k == 1.0 {
            Self::IDENTITY
        } else {
            self
        }
    }
}

/// Layout for the balance time-series chart.
///
/// Computes the zero-anchored vertical domain and the sign-split area
/// gradient; the renderer draws the line, area and axes.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesLayout {
    points: Vec<SeriesPoint>,
    y_domain: (f64, f64),
}

impl TimeSeriesLayout {
    /// Build from a wire series. Points with a malformed month are dropped.
    #[must_use]
    pub fn new(series: &[BalancePoint]) -> Self {
        let points: Vec<SeriesPoint> = series
            .iter()
            .filter_map(|p| {
                Some(SeriesPoint {
                    date: p.date()?,
                    value: p.balance as f64,
                    label: p.label(),
                })
            })
            .collect();

        // always include zero so the gradient has an anchor
        let min = points.iter().map(|p| p.value).fold(0.0, f64::min);
        let max = points.iter().map(|p| p.value).fold(0.0, f64::max);

        Self {
            points,
            y_domain: (min, max),
        }
    }

    #[must_use]
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Vertical domain, `[min(0, data min), max(0, data max)]`.
    #[must_use]
    pub fn y_domain(&self) -> (f64, f64) {
        self.y_domain
    }

    /// The sign-split area gradient for a plot of the given height.
    ///
    /// All-positive and all-negative series fade between the two shades of
    /// their side. A mixed-sign series splits hard at zero, and the
    /// gradient span is mirrored around the zero line so the weaker side
    /// saturates at half the stronger side's depth.
    #[must_use]
    pub fn gradient(&self, plot_height: f64) -> GradientSpec {
        let (d0, d1) = self.y_domain;
        let y_scale = LinearScale::new((d0, d1), (plot_height, 0.0));
        let (pos_light, pos_dark) = POSITIVE_COLORS;
        let (neg_light, neg_dark) = NEGATIVE_COLORS;

        if d0 == 0.0 {
            return GradientSpec {
                stops: vec![stop(0.0, pos_light), stop(1.0, pos_dark)],
                y1: y_scale.scale(d0),
                y2: y_scale.scale(d1),
            };
        }

        if d1 == 0.0 {
            return GradientSpec {
                stops: vec![stop(0.0, neg_dark), stop(1.0, neg_light)],
                y1: y_scale.scale(d0),
                y2: y_scale.scale(d1),
            };
        }

        // the near-coincident middle stops make a hard break at zero
        let stops = vec![
            stop(0.0, neg_dark),
            stop(0.5, neg_light),
            stop(0.49999, pos_light),
            stop(1.0, pos_dark),
        ];

        let y_zero = y_scale.scale(0.0);
        let (y1, y2) = if -d0 > d1 {
            let y1 = y_scale.scale(d0);
            (y1, 2.0 * y_zero - y1)
        } else {
            let y2 = y_scale.scale(d1);
            (2.0 * y_zero - y2, y2)
        };

        GradientSpec { stops, y1, y2 }
    }

    /// Index of the point nearest to `date`, for tooltip snapping.
    #[must_use]
    pub fn nearest_index(&self, date: NaiveDate) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }

        let i = self.points.partition_point(|p| p.date < date);

        if i == 0 {
            return Some(0);
        }
        if i == self.points.len() {
            return Some(self.points.len() - 1);
        }

        let before = &self.points[i - 1];
        let after = &self.points[i];
        if date - before.date > after.date - date {
            Some(i)
        } else {
            Some(i - 1)
        }
    }
}

fn stop(offset: f64, color: &str) -> GradientStop {
    GradientStop {
        offset,
        color: color.to_string(),
    }
}
