//! Value range helpers shared by the line chart and sparkline.

use crate::core::series::Series;

/// Inclusive extrema of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Exact extrema, `None` for an empty series.
    #[must_use]
    pub fn of(series: &Series) -> Option<Self> {
        let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
        let mut seen = false;
        for v in series.values() {
            min = min.min(v);
            max = max.max(v);
            seen = true;
        }
        seen.then_some(Self { min, max })
    }

    /// `max - min`, or `1` for a flat series so callers never divide by zero.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn span(&self) -> f64 {
        if self.max == self.min {
            1.0
        } else {
            self.max - self.min
        }
    }

    /// Position of `v` inside the range, `0.0` at the minimum.
    #[inline]
    #[must_use]
    pub fn fraction(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }
}
