//! Display formatting for calculator values.

/// Format a value the way the calculator display shows it.
///
/// Integral values render without a fractional part, everything else as a
/// decimal with at most ten fractional digits, trailing zeros trimmed.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(-4.0), "-4");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
/// ```
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
