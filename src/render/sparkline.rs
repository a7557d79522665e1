//! Single-line sparkline over a nine-step block ramp.

use crate::core::{
    bounds::Bounds,
    constants::{DECIMAL_PRECISION, INDENT, SPARK_LEVELS, SPARK_RAMP},
    format::format_number,
    series::Series,
};

/// Ramp index of `value`, always in `0..=8`.
#[inline]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn level(value: f64, bounds: &Bounds) -> usize {
    let idx = (bounds.fraction(value) * SPARK_LEVELS as f64).floor() as usize;
    idx.min(SPARK_LEVELS)
}

/// `"  {title}: {glyphs}  (min: …, max: …)"`, or without the title prefix
/// when `title` is empty.  Empty input renders nothing.
#[must_use]
pub fn sparkline(data: &Series, title: &str) -> String {
    let Some(bounds) = Bounds::of(data) else {
        return String::new();
    };
    let glyphs: String = data
        .values()
        .map(|v| SPARK_RAMP[level(v, &bounds)])
        .collect();

    let mut out = if title.is_empty() {
        format!("{INDENT}{glyphs}")
    } else {
        format!("{INDENT}{title}: {glyphs}")
    };
    out.push_str(&format!(
        "{INDENT}(min: {}, max: {})",
        format_number(bounds.min, DECIMAL_PRECISION),
        format_number(bounds.max, DECIMAL_PRECISION),
    ));
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn level_in_range(values in prop::collection::vec(-1e9f64..1e9, 1..50)) {
            let series = Series::from(values);
            let bounds = Bounds::of(&series).unwrap();
            for v in series.values() {
                prop_assert!(level(v, &bounds) <= SPARK_LEVELS);
            }
        }

        #[test]
        fn flat_series_is_uniform(value in -1e9f64..1e9, n in 1usize..40) {
            let out = sparkline(&Series::from(vec![value; n]), "");
            let glyphs: Vec<char> = out.chars().skip(INDENT.len()).take(n).collect();
            prop_assert!(glyphs.iter().all(|&g| g == SPARK_RAMP[0]));
        }
    }
}
