//! Token counting and numeric helpers shared by the metric builders.

/// Number of whitespace-delimited tokens in `text`; zero for empty or blank text.
pub fn count_tokens<T: AsRef<str>>(text: T) -> usize {
    text.as_ref().split_whitespace().count()
}

/// Number of characters (not bytes) in `text`.
pub fn count_chars<T: AsRef<str>>(text: T) -> usize {
    text.as_ref().chars().count()
}

/// Mean of `values`, or `0.0` when there are none.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let mut total = 0u128;
    let mut n = 0usize;
    for value in values {
        total += value as u128;
        n += 1;
    }
    if n == 0 { 0.0 } else { total as f64 / n as f64 }
}

/// Percentage `100 * part / whole` rounded to one decimal; `0.0` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round1(100.0 * part as f64 / whole as f64)
}

/// Relative reduction from `before` to `after` in percent, rounded to one decimal.
///
/// Returns `0.0` when `before` is not positive.
pub fn reduction_pct(before: f64, after: f64) -> f64 {
    if before <= 0.0 {
        return 0.0;
    }
    round1(100.0 * (1.0 - after / before))
}

/// Round half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
