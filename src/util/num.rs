/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Number of fractional digits printed for numeric values.
pub const FIXED_DIGITS: usize = 6;

/// Formats a number the way C's `%f` conversion does.
///
/// Finite values always carry exactly six fractional digits. Infinities print
/// as `inf`/`-inf` and NaN as `nan`.
///
/// ## Example
/// ```
/// use tora::util::num::format_fixed;
///
/// assert_eq!(format_fixed(5.0), "5.000000");
/// assert_eq!(format_fixed(-0.125), "-0.125000");
/// assert_eq!(format_fixed(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    format!("{value:.FIXED_DIGITS$}")
}

/// Parses the longest numeric prefix of `text`, like C's `atof`.
///
/// Leading whitespace is skipped, then an optional sign, digits with at most
/// one decimal point, and an optional exponent are consumed. Text without a
/// numeric prefix yields `0.0`; trailing garbage is ignored.
///
/// ## Example
/// ```
/// use tora::util::num::atof;
///
/// assert_eq!(atof("2"), 2.0);
/// assert_eq!(atof("  -1.5e2xyz"), -150.0);
/// assert_eq!(atof("12abc"), 12.0);
/// assert_eq!(atof("abc"), 0.0);
/// assert_eq!(atof(".5"), 0.5);
/// ```
#[must_use]
pub fn atof(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - digits_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        digits += fraction_end - fraction_start;
        end = fraction_end;
    }

    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}

/// Converts an element count to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the count exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use tora::util::num::count_to_f64_checked;
///
/// assert_eq!(count_to_f64_checked(3, "too big!"), Ok(3.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn count_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    if value as u64 > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}
