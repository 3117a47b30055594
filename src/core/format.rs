/// Formats a count with comma thousands separators: `1234567` -> `1,234,567`.
///
/// Fractional digits, if any, are kept as `f64` displays them.
#[must_use]
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = value.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// `"<count> cases"` as shown in tooltips and callouts.
#[must_use]
pub fn format_cases(value: f64) -> String {
    format!("{} cases", format_count(value))
}
