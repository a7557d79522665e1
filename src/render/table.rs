//! Boxed table with centred headers and right-aligned cells.

use std::fmt::Display;

use crate::{
    core::constants::{BL, BR, CROSS, H, INDENT, T_DOWN, T_LEFT, T_RIGHT, T_UP, TL, TR, V},
    render::{run, title_lines},
};

/// Horizontal rule: `left`, one `─` run per column (`w + 2` wide) joined
/// by `mid`, then `right`.
fn rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut out = String::new();
    out.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        out.push_str(&run(H, w + 2));
    }
    out.push(right);
    out
}

/// `│ cell │ cell │`, each cell padded by `pad` to its column width.
fn row<F>(cells: &[String], widths: &[usize], pad: F) -> String
where
    F: Fn(&str, usize) -> String,
{
    let mut out = String::new();
    out.push(V);
    for (cell, &w) in cells.iter().zip(widths) {
        out.push(' ');
        out.push_str(&pad(cell, w));
        out.push(' ');
        out.push(V);
    }
    out
}

/// Max character count per column over the header and every cell.
#[must_use]
pub fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

/// Render `rows` under `headers`.  Empty headers or rows render nothing.
///
/// Every row is squared up to the header count: missing cells are blank,
/// extra cells are dropped.
#[must_use]
pub fn table<S, R, C>(headers: &[S], rows: &[R], title: &str) -> String
where
    S: AsRef<str>,
    R: AsRef<[C]>,
    C: Display,
{
    if headers.is_empty() || rows.is_empty() {
        return String::new();
    }

    let cols = headers.len();
    let headers: Vec<String> = headers.iter().map(|h| h.as_ref().to_owned()).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            let mut cells: Vec<String> = r
                .as_ref()
                .iter()
                .take(cols)
                .map(ToString::to_string)
                .collect();
            cells.resize(cols, String::new());
            cells
        })
        .collect();
    let widths = column_widths(&headers, &rows);

    let mut lines = title_lines(title);
    lines.push(format!("{INDENT}{}", rule(&widths, TL, T_DOWN, TR)));
    lines.push(format!(
        "{INDENT}{}",
        row(&headers, &widths, |h, w| format!("{h:^w$}"))
    ));
    lines.push(format!("{INDENT}{}", rule(&widths, T_RIGHT, CROSS, T_LEFT)));
    for r in &rows {
        lines.push(format!(
            "{INDENT}{}",
            row(r, &widths, |c, w| format!("{c:>w$}"))
        ));
    }
    lines.push(format!("{INDENT}{}", rule(&widths, BL, T_UP, BR)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NO_ROWS: [[&str; 1]; 0] = [];

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(table::<&str, [&str; 1], &str>(&[], &[["a"]], ""), "");
        assert_eq!(table(&["a"], &NO_ROWS, ""), "");
    }

    #[test]
    fn small_table() {
        let out = table(&["A", "Bee"], &[["1", "22"], ["333", "4"]], "T");
        let expected = [
            "",
            "  T",
            "  ┌─────┬─────┐",
            "  │  A  │ Bee │",
            "  ├─────┼─────┤",
            "  │   1 │  22 │",
            "  │ 333 │   4 │",
            "  └─────┴─────┘",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn ragged_rows_are_squared_up() {
        let rows = vec![vec!["1"], vec!["1", "2", "toolongtocount"]];
        let out = table(&["a", "b"], &rows, "");
        assert!(!out.contains("toolong"));
        assert!(out.contains("│ 1 │   │"));
        let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn numeric_cells_use_display() {
        let out = table(&["x"], &[[98.5], [0.62]], "");
        assert!(out.contains("│ 98.5 │"));
        assert!(out.contains("│ 0.62 │"));
    }
}
