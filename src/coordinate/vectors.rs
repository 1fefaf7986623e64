//! Typed points for each coordinate system
//!
//! These hold unrounded values and convert between each other through
//! `From`/`TryFrom`. Angles are stored in degrees; trigonometry converts to
//! radians at the boundary.
//!
//! Conventions:
//! - Spherical `azimuth` is measured in the x-y plane from +x (atan2 range
//!   (-180, 180]) and `polar` from the +z axis, in [0, 180].
//! - Cylindrical `azimuth` uses the same atan2 convention; `height` is z.

use super::point::Point3D;
use crate::errors::CoordError;

/// Point in Cartesian coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Point in spherical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    /// Distance from the origin
    pub radius: f64,
    /// Azimuth θ in degrees
    pub azimuth: f64,
    /// Polar angle φ from +z in degrees
    pub polar: f64,
}

/// Point in cylindrical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cylindrical {
    /// Distance from the z axis
    pub radius: f64,
    /// Azimuth φ in degrees
    pub azimuth: f64,
    /// Height along z
    pub height: f64,
}

impl Cartesian {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian { x, y, z }
    }

    /// Azimuth of the projection onto the x-y plane, in degrees.
    /// `atan2(0, 0)` is 0, so points on the z axis report 0.
    fn azimuth_degrees(&self) -> f64 {
        // -0.0 + 0.0 is +0.0, keeping the negative x axis at 180 rather than -180
        (self.y + 0.0).atan2(self.x).to_degrees()
    }
}

impl Spherical {
    pub fn new(radius: f64, azimuth: f64, polar: f64) -> Self {
        Spherical { radius, azimuth, polar }
    }
}

impl Cylindrical {
    pub fn new(radius: f64, azimuth: f64, height: f64) -> Self {
        Cylindrical { radius, azimuth, height }
    }
}

impl From<Point3D> for Cartesian {
    fn from(p: Point3D) -> Self {
        Cartesian::new(p.x, p.y, p.z)
    }
}

impl From<Cartesian> for Point3D {
    fn from(c: Cartesian) -> Self {
        Point3D::new(c.x, c.y, c.z)
    }
}

impl TryFrom<Cartesian> for Spherical {
    type Error = CoordError;

    /// Fails with `DegeneratePoint` at the origin, where neither angle is defined.
    fn try_from(c: Cartesian) -> Result<Self, Self::Error> {
        let radius = (c.x * c.x + c.y * c.y + c.z * c.z).sqrt();
        if radius == 0.0 {
            return Err(CoordError::DegeneratePoint);
        }

        // z / r can overshoot 1.0 by an ulp
        let cos_polar = (c.z / radius).clamp(-1.0, 1.0);

        Ok(Spherical::new(radius, c.azimuth_degrees(), cos_polar.acos().to_degrees()))
    }
}

impl From<Spherical> for Cartesian {
    fn from(s: Spherical) -> Self {
        let (sin_az, cos_az) = s.azimuth.to_radians().sin_cos();
        let (sin_pol, cos_pol) = s.polar.to_radians().sin_cos();

        Cartesian::new(
            s.radius * sin_pol * cos_az,
            s.radius * sin_pol * sin_az,
            s.radius * cos_pol,
        )
    }
}

impl From<Cartesian> for Cylindrical {
    fn from(c: Cartesian) -> Self {
        let radius = (c.x * c.x + c.y * c.y).sqrt();
        Cylindrical::new(radius, c.azimuth_degrees(), c.z)
    }
}

impl From<Cylindrical> for Cartesian {
    fn from(cyl: Cylindrical) -> Self {
        let (sin_az, cos_az) = cyl.azimuth.to_radians().sin_cos();
        Cartesian::new(cyl.radius * cos_az, cyl.radius * sin_az, cyl.height)
    }
}

impl From<Spherical> for Cylindrical {
    fn from(s: Spherical) -> Self {
        Cylindrical::from(Cartesian::from(s))
    }
}

impl TryFrom<Cylindrical> for Spherical {
    type Error = CoordError;

    fn try_from(cyl: Cylindrical) -> Result<Self, Self::Error> {
        Spherical::try_from(Cartesian::from(cyl))
    }
}
