//! Decimal rounding of conversion output

/// Number of decimal places every reported component is rounded to
pub const DECIMAL_PLACES: usize = 4;

/// Round `value` to `places` decimal places.
///
/// The exact binary value is rounded, not a scaled copy of it, so a typed
/// `0.00035` (stored just below the tie) becomes `0.0003` while `0.00005`
/// (stored just above) becomes `0.0001`. A negative zero result is returned
/// as `0.0`. Non-finite values pass through.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // The decimal formatter rounds the exact expansion of the value
    let rounded = format!("{:.*}", places, value).parse::<f64>().unwrap_or(value);

    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round each component of a triple to [`DECIMAL_PLACES`]
pub fn round_triple((a, b, c): (f64, f64, f64)) -> (f64, f64, f64) {
    (
        round_to(a, DECIMAL_PLACES),
        round_to(b, DECIMAL_PLACES),
        round_to(c, DECIMAL_PLACES),
    )
}

/// Map an azimuth of -180° onto 180° so reported angles stay in (-180, 180]
pub fn fold_azimuth(degrees: f64) -> f64 {
    if degrees == -180.0 {
        180.0
    } else {
        degrees
    }
}
