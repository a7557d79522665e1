//! Aggregates the value types and shared helpers.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod series;

// re-export frequently-used items for convenience
pub use bounds::Bounds;
pub use config::{ChartConfig, ChartConfigBuilder};
pub use constants::DECIMAL_PRECISION;
pub use error::{ChartError, ConfigError};
pub use format::format_number;
pub use series::Series;
