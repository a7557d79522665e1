//! Horizontal bar chart.

use tracing::debug;

use crate::{
    core::{
        constants::{BAR_BORDER_PADDING, EMPTY, FILLED, H, INDENT, V},
        format::format_number,
        series::Series,
    },
    render::{run, title_lines},
};

/// Cells filled for `value` when `max_val` fills `max_width`.
///
/// Always in `0..=max_width`; every bar is empty when `max_val <= 0`.
#[inline]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn bar_length(value: f64, max_val: f64, max_width: usize) -> usize {
    if max_val <= 0.0 {
        return 0;
    }
    // saturating cast: negatives and NaN land on 0
    let len = (value / max_val * max_width as f64).floor() as usize;
    len.min(max_width)
}

/// One row per entry, labels right-aligned, bars scaled to the largest
/// value.  Empty input renders nothing.
#[must_use]
pub fn bar_chart(data: &Series, title: &str, max_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_val = data.values().fold(f64::NEG_INFINITY, f64::max);
    if max_val <= 0.0 {
        debug!(max_val, "bar chart has no positive maximum; all bars empty");
    }
    let label_width = data.labels().map(|l| l.chars().count()).max().unwrap_or(0);
    let border = format!(
        "{INDENT}{}",
        run(H, max_width + label_width + BAR_BORDER_PADDING)
    );

    let mut lines = title_lines(title);
    if !lines.is_empty() {
        lines.push(border.clone());
    }

    for (label, value) in data.points() {
        let filled = bar_length(value, max_val, max_width);
        lines.push(format!(
            "{INDENT}{label:>label_width$} {V} {}{} {}",
            run(FILLED, filled),
            run(EMPTY, max_width - filled),
            format_number(value, 0),
        ));
    }

    lines.push(border);
    lines.join("\n")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bar_length_in_bounds(value in -1e6f64..1e6, max in -1e6f64..1e6, width in 0usize..200) {
            prop_assert!(bar_length(value, max, width) <= width);
        }

        #[test]
        fn maximum_fills_the_width(values in prop::collection::vec(0.001f64..1e6, 1..20), width in 1usize..120) {
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(bar_length(max, max, width), width);
        }
    }
}
