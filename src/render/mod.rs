pub mod bar;
pub mod canvas;
pub mod line;
pub mod progress;
pub mod sparkline;
pub mod table;

pub use bar::bar_chart;
pub use canvas::Canvas;
pub use line::line_chart;
pub use progress::progress_bar;
pub use sparkline::sparkline;
pub use table::table;

use crate::core::constants::INDENT;

/// Opening lines of a titled block: a blank line, then the indented title.
/// Nothing for an empty title.
pub(crate) fn title_lines(title: &str) -> Vec<String> {
    if title.is_empty() {
        Vec::new()
    } else {
        vec![format!("\n{INDENT}{title}")]
    }
}

/// `n` copies of `c`.
#[inline]
pub(crate) fn run(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}
