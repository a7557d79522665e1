//! One-line progress bar.

use crate::{
    core::constants::{EMPTY, FILLED, INDENT},
    render::run,
};

/// `"  {label}: [████░░░░] 50.0% (current/total)"`.
///
/// A `total` of zero or less always reads 0%.  The bar itself never leaves
/// `0..=width` cells even when `current` is outside `0..=total`; the
/// percentage is printed as computed.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn progress_bar(current: f64, total: f64, width: usize, label: &str) -> String {
    let percent = if total > 0.0 { current / total } else { 0.0 };
    let filled = ((width as f64 * percent).floor() as usize).min(width);
    format!(
        "{INDENT}{label}: [{}{}] {:.1}% ({current}/{total})",
        run(FILLED, filled),
        run(EMPTY, width - filled),
        percent * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_quarters() {
        assert_eq!(
            progress_bar(75.0, 100.0, 40, "Download"),
            "  Download: [██████████████████████████████░░░░░░░░░░] 75.0% (75/100)"
        );
    }

    #[test]
    fn zero_total_reads_zero_percent() {
        assert_eq!(progress_bar(5.0, 0.0, 10, "x"), "  x: [░░░░░░░░░░] 0.0% (5/0)");
        assert!(progress_bar(5.0, -3.0, 4, "x").contains("] 0.0% "));
    }

    #[test]
    fn overshoot_keeps_bar_width() {
        let out = progress_bar(150.0, 100.0, 10, "over");
        assert_eq!(out, "  over: [██████████] 150.0% (150/100)");
    }

    #[test]
    fn fractional_counts() {
        assert!(progress_bar(42.5, 100.0, 4, "up").ends_with("42.5% (42.5/100)"));
    }

    #[test]
    fn no_trailing_newline() {
        assert!(!progress_bar(1.0, 2.0, 4, "x").ends_with('\n'));
    }
}
