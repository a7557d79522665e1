//! Public-facing crate root – re-exports of every renderer and value type.
//!
//! ```
//! use ascii_chart::{Series, bar_chart, progress_bar};
//!
//! let sales = Series::from([("Jan", 100.0), ("Feb", 200.0)]);
//! print!("{}", bar_chart(&sales, "Sales", 20));
//! assert_eq!(
//!     progress_bar(1.0, 4.0, 4, "Done"),
//!     "  Done: [█░░░] 25.0% (1/4)"
//! );
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    bounds::Bounds,
    config::{ChartConfig, ChartConfigBuilder},
    error::{ChartError, ConfigError},
    format::format_number,
    series::Series,
};

pub use render::{Canvas, bar_chart, line_chart, progress_bar, sparkline, table};
