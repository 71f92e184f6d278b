//! Number formatting for table cells.

/// Formats an amount the shortest way that round-trips, without a trailing
/// `.0` for integral values.
///
/// # Examples
///
/// ```
/// use craftwiki_table::format::amount;
///
/// assert_eq!(amount(4.0), "4");
/// assert_eq!(amount(0.5), "0.5");
/// assert_eq!(amount(-0.0), "0");
/// ```
#[must_use]
pub fn amount(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Formats a per-minute rate with two decimals.
///
/// # Examples
///
/// ```
/// use craftwiki_table::format::minute;
///
/// assert_eq!(minute(30.0), "30.00");
/// assert_eq!(minute(7.5), "7.50");
/// assert_eq!(minute(0.125), "0.13");
/// ```
#[must_use]
pub fn minute(value: f64) -> String {
    fixed(value, 2)
}

/// Formats a value with a fixed number of decimals.
///
/// Ties round away from zero: `22.5` becomes `23`.
#[must_use]
pub fn fixed(value: f64, digits: usize) -> String {
    let base = scale(digits);
    let rounded = (value * base).round() / base;
    if rounded.is_finite() {
        format!("{rounded:.digits$}")
    } else {
        format!("{value:.digits$}")
    }
}

fn scale(digits: usize) -> f64 {
    10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX))
}

/// Rounds a value up at the given number of decimals, then formats it with
/// that many decimals.
///
/// # Examples
///
/// ```
/// use craftwiki_table::format::ceil;
///
/// assert_eq!(ceil(2.01, 0), "3");
/// assert_eq!(ceil(2.01, 1), "2.1");
/// assert_eq!(ceil(2.0, 1), "2.0");
/// ```
#[must_use]
pub fn ceil(value: f64, digits: usize) -> String {
    let base = scale(digits);
    fixed((value * base).ceil() / base, digits)
}

/// Returns 1 if any value is below `10^magnitude`, otherwise 0.
///
/// Small numbers get one decimal so they do not all collapse to the same
/// integer.
///
/// # Examples
///
/// ```
/// use craftwiki_table::format::fixed_digits;
///
/// assert_eq!(fixed_digits(&[120.0, 99.5], 2), 1);
/// assert_eq!(fixed_digits(&[120.0, 340.0], 2), 0);
/// assert_eq!(fixed_digits(&[], 1), 0);
/// ```
#[must_use]
pub fn fixed_digits(values: &[f64], magnitude: i32) -> usize {
    let threshold = 10f64.powi(magnitude);
    usize::from(values.iter().any(|&v| v < threshold))
}
