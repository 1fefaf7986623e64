//! Number formatting utilities
//!
//! Results are printed with the shortest representation that round-trips,
//! always keeping a decimal point so whole numbers read as `45.0`. Very
//! large or small magnitudes switch to scientific notation with a signed,
//! two-digit exponent (`1e+16`, `1.5e-07`).

use crate::coordinate::Point3D;

/// Format a single component, e.g. `45.0`, `1.7321`, `-0.5`, `1e+16`
pub fn format_component(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// Format a point as `(x, y, z)`
pub fn format_point(point: &Point3D) -> String {
    format!(
        "({}, {}, {})",
        format_component(point.x),
        format_component(point.y),
        format_component(point.z)
    )
}
