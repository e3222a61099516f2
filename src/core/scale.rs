use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Monotonic linear mapping from a data domain onto a pixel range.
///
/// The range may run backwards (`range_start > range_end`) so vertical axes
/// can place larger values higher on screen. Values outside the domain
/// extrapolate linearly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::DegenerateDomain {
                start: domain_start,
                end: domain_end,
            });
        }

        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Splits the domain into `parts` equal bands and returns the inner
    /// boundaries (excluding both domain ends).
    #[must_use]
    pub fn domain_separators(self, parts: usize) -> Vec<f64> {
        let span = self.domain_end - self.domain_start;
        (1..parts)
            .map(|index| self.domain_start + span * index as f64 / parts as f64)
            .collect()
    }

    /// Centres of the `parts` equal domain bands.
    #[must_use]
    pub fn band_centers(self, parts: usize) -> Vec<f64> {
        let span = self.domain_end - self.domain_start;
        (0..parts)
            .map(|index| self.domain_start + span * (2 * index + 1) as f64 / (2 * parts) as f64)
            .collect()
    }
}
