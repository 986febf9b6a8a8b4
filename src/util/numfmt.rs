//! Latin-American number formatting for display.

#[cfg(test)]
#[path = "numfmt_test.rs"]
mod numfmt_test;

/// Format `value` with dot thousands grouping and a comma decimal
/// separator: `8837.24` becomes `"8.837,24"`, `705000` becomes
/// `"705.000"`. With zero `decimals` the fraction is dropped entirely.
#[must_use]
pub fn latam(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) if decimals > 0 => format!("{sign}{grouped},{frac}"),
        _ => format!("{sign}{grouped}"),
    }
}
