//! Number formatting for chart annotations.

/// Fixed-decimal rendering with `,` between thousands groups.
///
/// ```
/// use ascii_chart::format_number;
/// assert_eq!(format_number(1_234_567.891, 1), "1,234,567.9");
/// assert_eq!(format_number(-12_500.0, 0), "-12,500");
/// ```
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    // inf / NaN have no digits to group
    if !unsigned.starts_with(|c: char| c.is_ascii_digit()) {
        return fixed;
    }
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(frac_part);
    out
}
