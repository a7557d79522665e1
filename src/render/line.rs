//! ASCII line chart.
//!
//! ### Workflow
//! 1. Every value is mapped onto the `width × height` canvas: the x axis is
//!    spread evenly by index, the y axis scales `min..=max` onto the rows with
//!    the maximum on row 0.
//! 2. Each point is marked with `●`; the columns strictly between two
//!    consecutive points get a `·` on the linearly interpolated row, unless
//!    something is already drawn there.
//! 3. The canvas is framed with the max label on top, the min label beside
//!    the last row and a horizontal axis underneath.

use tracing::{debug, trace};

use crate::{
    core::{
        bounds::Bounds,
        constants::{AXIS_LABEL_WIDTH, BL, DECIMAL_PRECISION, H, INDENT, T_LEFT, V},
        format::format_number,
        series::Series,
    },
    render::{canvas::Canvas, run, title_lines},
};

/// Column of the `i`-th of `n` points.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn column(i: usize, n: usize, width: usize) -> usize {
    if n > 1 {
        (i as f64 / (n - 1) as f64 * (width - 1) as f64) as usize
    } else {
        0
    }
}

/// Clamp a signed row onto the canvas.
#[inline]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn clamp_row(row: i64, height: usize) -> usize {
    row.clamp(0, (height - 1) as i64) as usize
}

/// Row of `value`; higher values sit closer to row 0.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]
fn row(value: f64, bounds: &Bounds, height: usize) -> usize {
    let rise = (bounds.fraction(value) * (height - 1) as f64) as i64;
    clamp_row((height - 1) as i64 - rise, height)
}

/// Canvas coordinates `(col, row)` of every value, in series order.
///
/// Empty for an empty series or a zero-sized canvas.
#[must_use]
pub fn coordinates(data: &Series, width: usize, height: usize) -> Vec<(usize, usize)> {
    let Some(bounds) = Bounds::of(data) else {
        return Vec::new();
    };
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let n = data.len();
    data.values()
        .enumerate()
        .map(|(i, v)| (column(i, n, width), row(v, &bounds, height)))
        .collect()
}

/// Draw points and interpolated traces onto a fresh canvas.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn plot(data: &Series, width: usize, height: usize) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    let coords = coordinates(data, width, height);

    for (i, &(x, y)) in coords.iter().enumerate() {
        canvas.point(x, y);
        if i == 0 {
            continue;
        }
        let (prev_x, prev_y) = coords[i - 1];
        for x_pos in prev_x.min(x) + 1..prev_x.max(x) {
            // x never moves left, so equal columns leave the range empty
            let ratio = if x == prev_x {
                0.0
            } else {
                (x_pos - prev_x) as f64 / (x - prev_x) as f64
            };
            let y_pos = (prev_y as f64 + ratio * (y as f64 - prev_y as f64)) as i64;
            canvas.trace(x_pos, clamp_row(y_pos, height));
        }
    }
    canvas
}

/// Framed line chart of `data` on a `width × height` canvas.
///
/// Empty input, or a zero width/height, renders nothing.
#[must_use]
pub fn line_chart(data: &Series, title: &str, width: usize, height: usize) -> String {
    let Some(bounds) = Bounds::of(data) else {
        return String::new();
    };
    if width == 0 || height == 0 {
        debug!(width, height, "line chart canvas has no cells");
        return String::new();
    }
    trace!(min = bounds.min, max = bounds.max, span = bounds.span(), "line chart range");

    let canvas = plot(data, width, height);
    let gutter = format!("{INDENT}{:AXIS_LABEL_WIDTH$} ", "");
    let max_label = format_number(bounds.max, DECIMAL_PRECISION);
    let min_label = format_number(bounds.min, DECIMAL_PRECISION);

    let mut lines = title_lines(title);
    lines.push(format!("{INDENT}{max_label:>AXIS_LABEL_WIDTH$} {T_LEFT}"));
    for (i, cells) in canvas.rows().enumerate() {
        if i != 0 && i == height - 1 {
            lines.push(format!(
                "{INDENT}{min_label:>AXIS_LABEL_WIDTH$} {T_LEFT}{cells}"
            ));
        } else {
            lines.push(format!("{gutter}{V}{cells}"));
        }
    }
    lines.push(format!("{gutter}{BL}{}", run(H, width)));
    lines.join("\n")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn coordinates_stay_on_canvas(
            values in prop::collection::vec(-1e6f64..1e6, 1..40),
            width in 1usize..80,
            height in 1usize..30,
        ) {
            let coords = coordinates(&Series::from(values), width, height);
            for (x, y) in coords {
                prop_assert!(x < width);
                prop_assert!(y < height);
            }
        }

        #[test]
        fn equal_values_share_a_row(value in -1e6f64..1e6, n in 1usize..30, height in 1usize..30) {
            let coords = coordinates(&Series::from(vec![value; n]), 40, height);
            prop_assert!(coords.iter().all(|&(_, y)| y == coords[0].1));
        }
    }
}
