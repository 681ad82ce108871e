/// Applied to the upper bound when a range has no lower bound
const UPPER_BOUND_FACTOR: f64 = 0.8;
/// Applied to the lower bound when a range has no upper bound
const LOWER_BOUND_FACTOR: f64 = 1.2;

/// A salary range as published in a vacancy, either bound may be missing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl SalaryRange {
    /// Build a range from bounds reported by a job site.
    /// Sites report an unspecified bound as `0`, so non-positive bounds are dropped.
    pub fn from_bounds(from: Option<f64>, to: Option<f64>) -> Self {
        let specified = |bound: &f64| *bound > 0.0;
        Self {
            from: from.filter(specified),
            to: to.filter(specified),
        }
    }

    pub fn estimate(&self) -> Option<f64> {
        estimate(self.from, self.to)
    }
}

/// Estimate a single salary figure from a possibly partial range
pub fn estimate(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (None, Some(to)) => Some(to * UPPER_BOUND_FACTOR),
        (Some(from), None) => Some(from * LOWER_BOUND_FACTOR),
        (None, None) => None,
    }
}
