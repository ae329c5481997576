/// Linear mapping between a numeric domain and a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    /// Map a domain value into the range. A degenerate domain maps
    /// everything to the range start.
    #[must_use]
    pub fn scale(&self, value: f64) -> f64 {
        if self.d1 == self.d0 {
            return self.r0;
        }
        self.r0 + (value - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    /// Map a range position back into the domain.
    #[must_use]
    pub fn invert(&self, position: f64) -> f64 {
        if self.r1 == self.r0 {
            return self.d0;
        }
        self.d0 + (position - self.r0) / (self.r1 - self.r0) * (self.d1 - self.d0)
    }
}

/// Evenly spaced bands over ordered labels.
///
/// The range is cut into one step per label with padding (a fraction of the
/// step) between bands and at the edges, and the bands centered in the
/// leftover space. `padding` sets both the inner and outer fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let span = range.1 - range.0;
        let step = span / (n - padding + 2.0 * padding).max(1.0);
        let bandwidth = step * (1.0 - padding);
        let start = range.0 + (span - step * (n - padding)) * 0.5;

        Self {
            domain,
            step,
            bandwidth,
            start,
        }
    }

    /// Leading edge of a label's band, or `None` for labels outside the
    /// domain.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == label)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Extent of each band.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between band leading edges.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}
