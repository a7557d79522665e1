//! A collection of constants.

/// Filled cell of a bar or progress bar
pub const FILLED: char = '█';
/// Empty cell of a bar or progress bar
pub const EMPTY: char = '░';

/// Data point on the line chart canvas
pub const POINT: char = '●';
/// Interpolated segment between two points
pub const TRACE: char = '·';
/// Untouched canvas cell
pub const BLANK: char = ' ';

/// Sparkline glyph ramp, empty to full block.
pub const SPARK_RAMP: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
/// Highest index into [`SPARK_RAMP`].
pub const SPARK_LEVELS: usize = SPARK_RAMP.len() - 1;

// Box-drawing glyphs
pub const H: char = '─';
pub const V: char = '│';
pub const TL: char = '┌';
pub const TR: char = '┐';
pub const BL: char = '└';
pub const BR: char = '┘';
pub const T_DOWN: char = '┬';
pub const T_UP: char = '┴';
pub const T_RIGHT: char = '├';
pub const T_LEFT: char = '┤';
pub const CROSS: char = '┼';

/// Every output line starts with two spaces
pub const INDENT: &str = "  ";

/// Bar chart borders run past the bars by this many cells
/// (label separator, spacing and the value column).
pub const BAR_BORDER_PADDING: usize = 10;

/// Width of the line chart's y axis labels.
pub const AXIS_LABEL_WIDTH: usize = 8;

/// Numbers on axes and in sparkline annotations keep one decimal.
///
/// 14.832 becomes 14.8
pub const DECIMAL_PRECISION: usize = 1;

pub const DEFAULT_BAR_WIDTH: usize = 50;
pub const DEFAULT_LINE_WIDTH: usize = 60;
pub const DEFAULT_LINE_HEIGHT: usize = 15;
pub const DEFAULT_PROGRESS_WIDTH: usize = 40;
pub const DEFAULT_PROGRESS_LABEL: &str = "Progress";
