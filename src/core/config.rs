//! Run-time chart options + fluent builder.

use crate::core::error::ConfigError;

/// Immutable parameters handed to a renderer.
///
/// `height` is only read by the line chart; the other renderers take their
/// single dimension from `width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
}

impl ChartConfig {
    #[inline]
    #[must_use]
    pub fn builder(width: usize, height: usize) -> ChartConfigBuilder {
        ChartConfigBuilder::new(width, height)
    }
}

/// Fluent builder; nothing is checked until `build`.
#[derive(Debug)]
pub struct ChartConfigBuilder {
    width: usize,
    height: usize,
    title: Option<String>,
}

impl ChartConfigBuilder {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            title: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn title_opt(mut self, t: Option<&str>) -> Self {
        if let Some(t) = t {
            self.title = Some(t.to_owned());
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, h: usize) -> Self {
        self.height = h;
        self
    }

    pub fn build(self) -> Result<ChartConfig, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension("width"));
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension("height"));
        }
        Ok(ChartConfig {
            title: self.title.unwrap_or_default(),
            width: self.width,
            height: self.height,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ChartConfigBuilder> for Result<ChartConfig, ConfigError> {
    fn from(b: ChartConfigBuilder) -> Self {
        b.build()
    }
}
