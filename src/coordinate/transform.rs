//! Coordinate transformation functionality
//!
//! The four conversions below take and return plain triples with angles in
//! degrees. Every component they return is rounded to four decimal places.

use log::debug;

use super::result::ConversionResult;
use super::rounding::{fold_azimuth, round_triple};
use super::system::ConversionMode;
use super::vectors::{Cartesian, Cylindrical, Spherical};
use crate::errors::CoordResult;

/// Convert `(x, y, z)` to spherical `(r, θ, φ)`.
///
/// Returns `CoordError::DegeneratePoint` for the origin.
pub fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> CoordResult<(f64, f64, f64)> {
    let s = Spherical::try_from(Cartesian::new(x, y, z))?;
    let (r, theta, phi) = round_triple((s.radius, s.azimuth, s.polar));
    Ok((r, fold_azimuth(theta), phi))
}

/// Convert spherical `(r, θ, φ)` to `(x, y, z)`
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> (f64, f64, f64) {
    let c = Cartesian::from(Spherical::new(r, theta, phi));
    round_triple((c.x, c.y, c.z))
}

/// Convert `(x, y, z)` to cylindrical `(ρ, φ, z)`
pub fn cartesian_to_cylindrical(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let cyl = Cylindrical::from(Cartesian::new(x, y, z));
    let (rho, phi, height) = round_triple((cyl.radius, cyl.azimuth, cyl.height));
    (rho, fold_azimuth(phi), height)
}

/// Convert cylindrical `(ρ, φ, z)` to `(x, y, z)`
pub fn cylindrical_to_cartesian(rho: f64, phi: f64, z: f64) -> (f64, f64, f64) {
    let c = Cartesian::from(Cylindrical::new(rho, phi, z));
    round_triple((c.x, c.y, c.z))
}

/// Run one conversion and label the result with its target system
pub fn convert(mode: ConversionMode, a: f64, b: f64, c: f64) -> CoordResult<ConversionResult> {
    debug!("Converting ({}, {}, {}) with mode {}", a, b, c, mode.name());

    let values = match mode {
        ConversionMode::ToSpherical => cartesian_to_spherical(a, b, c)?,
        ConversionMode::ToCylindrical => cartesian_to_cylindrical(a, b, c),
        ConversionMode::FromSpherical => spherical_to_cartesian(a, b, c),
        ConversionMode::FromCylindrical => cylindrical_to_cartesian(a, b, c),
    };

    Ok(ConversionResult::new(mode.target(), values))
}
