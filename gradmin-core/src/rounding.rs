//! Decimal rounding of `f64` values.

/// Number of decimal places results are reported with.
pub const DEFAULT_DECIMALS: usize = 5;

/// Round `value` to `decimals` places.
///
/// The exact binary value is rounded to the nearest decimal with
/// `decimals` fractional digits (ties to even), and the closest `f64` to
/// that decimal is returned. Non-finite values pass through unchanged.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // `{:.N}` formats the exact value correctly rounded, and parsing picks
    // the nearest representable double.
    let rounded = format!("{value:.decimals$}");
    rounded.parse::<f64>().unwrap_or(value)
}
