//! Coordinate handling for 3D points
//!
//! This module provides the point types, the conversions between
//! Cartesian, spherical and cylindrical systems, and the rounding
//! applied to every reported result.

mod point;
mod result;
pub mod rounding;
mod system;
mod transform;
mod vectors;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::point::Point3D;
pub use self::result::ConversionResult;
pub use self::system::{ConversionMode, CoordinateSystem};
pub use self::transform::{
    cartesian_to_cylindrical, cartesian_to_spherical, convert, cylindrical_to_cartesian,
    spherical_to_cartesian,
};
pub use self::vectors::{Cartesian, Cylindrical, Spherical};
