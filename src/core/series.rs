//! Input series: either labeled `(label, value)` pairs or a plain sequence.
//!
//! Renderers only ever see the normalised view returned by
//! [`Series::points`], so both shapes are accepted everywhere.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::core::error::{ChartError, ConfigError};

#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// Unique labels, insertion order is display order.
    Labeled(IndexMap<String, f64>),
    /// Label is the positional index.
    Plain(Vec<f64>),
}

impl Series {
    /// Build a labeled series.  A repeated label overwrites the earlier value
    /// but keeps its original position.
    pub fn labeled<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self::Labeled(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    #[must_use]
    pub fn plain(values: Vec<f64>) -> Self {
        Self::Plain(values)
    }

    /// Zip `labels` onto `values`, or fall back to a plain series when no
    /// labels were given.
    pub fn try_zip(labels: Option<Vec<String>>, values: Vec<f64>) -> Result<Self, ConfigError> {
        match labels {
            None => Ok(Self::Plain(values)),
            Some(l) if l.len() != values.len() => Err(ConfigError::LabelCountMismatch {
                labels: l.len(),
                values: values.len(),
            }),
            Some(l) => Ok(Self::labeled(l.into_iter().zip(values))),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Labeled(m) => m.len(),
            Self::Plain(v) => v.len(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values in display order.
    pub fn values(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            Self::Labeled(m) => Box::new(m.values().copied()),
            Self::Plain(v) => Box::new(v.iter().copied()),
        }
    }

    /// Labels in display order; plain series are labeled `0`, `1`, …
    pub fn labels(&self) -> impl Iterator<Item = Cow<'_, str>> + '_ {
        self.points().map(|(label, _)| label)
    }

    /// Normalised `(label, value)` view.
    pub fn points(&self) -> Box<dyn Iterator<Item = (Cow<'_, str>, f64)> + '_> {
        match self {
            Self::Labeled(m) => Box::new(m.iter().map(|(k, v)| (Cow::Borrowed(k.as_str()), *v))),
            Self::Plain(v) => Box::new(
                v.iter()
                    .enumerate()
                    .map(|(i, v)| (Cow::Owned(i.to_string()), *v)),
            ),
        }
    }

    /// Reject NaN and infinities, naming the first offending entry.
    pub fn validate(&self) -> Result<(), ChartError> {
        match self.points().find(|(_, v)| !v.is_finite()) {
            Some((label, value)) => Err(ChartError::NonFinite {
                label: label.into_owned(),
                value,
            }),
            None => Ok(()),
        }
    }
}

// --- convenience conversions ---
impl From<Vec<f64>> for Series {
    #[inline]
    fn from(v: Vec<f64>) -> Self {
        Self::Plain(v)
    }
}

impl From<&[f64]> for Series {
    #[inline]
    fn from(v: &[f64]) -> Self {
        Self::Plain(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Series {
    #[inline]
    fn from(v: [f64; N]) -> Self {
        Self::Plain(v.to_vec())
    }
}

impl<K: Into<String>> From<Vec<(K, f64)>> for Series {
    #[inline]
    fn from(pairs: Vec<(K, f64)>) -> Self {
        Self::labeled(pairs)
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Series {
    #[inline]
    fn from(pairs: [(K, f64); N]) -> Self {
        Self::labeled(pairs)
    }
}

impl From<IndexMap<String, f64>> for Series {
    #[inline]
    fn from(m: IndexMap<String, f64>) -> Self {
        Self::Labeled(m)
    }
}
