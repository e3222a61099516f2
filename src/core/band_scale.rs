use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Ordinal band scale: evenly spaced bands for discrete categories.
///
/// Uses the same spacing rule as d3's band scale with equal inner and
/// outer padding and centred alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    categories: IndexSet<String>,
    range_start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new<I, S>(categories: I, range: (f64, f64), padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for category in categories {
            let category = category.into();
            if !set.insert(category.clone()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate band category `{category}`"
                )));
            }
        }
        if set.is_empty() {
            return Err(ChartError::InvalidData(
                "band scale requires at least one category".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        let (start, stop) = range;
        if !start.is_finite() || !stop.is_finite() || start == stop {
            return Err(ChartError::DegenerateDomain { start, end: stop });
        }

        let count = set.len() as f64;
        let step = (stop - start) / (count - padding + 2.0 * padding).max(1.0);
        let range_start = start + (stop - start - step * (count - padding)) * 0.5;

        Ok(Self {
            categories: set,
            range_start,
            step,
            bandwidth: step * (1.0 - padding),
        })
    }

    /// Leading pixel edge of the band for `category`.
    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        self.categories
            .get_index_of(category)
            .map(|index| self.range_start + self.step * index as f64)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
