//! Coordinate system and conversion mode identifiers

use crate::errors::{CoordError, CoordResult};

/// The three supported 3D coordinate systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// (x, y, z)
    Cartesian,
    /// (radius, azimuth θ, polar φ)
    Spherical,
    /// (radius ρ, azimuth φ, height z)
    Cylindrical,
}

impl CoordinateSystem {
    /// All systems, in menu order
    pub const ALL: [CoordinateSystem; 3] = [
        CoordinateSystem::Cartesian,
        CoordinateSystem::Spherical,
        CoordinateSystem::Cylindrical,
    ];

    /// Short lowercase name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CoordinateSystem::Cartesian => "cartesian",
            CoordinateSystem::Spherical => "spherical",
            CoordinateSystem::Cylindrical => "cylindrical",
        }
    }

    /// Heading used when printing a result in this system
    pub fn title(&self) -> &'static str {
        match self {
            CoordinateSystem::Cartesian => "Cartesian Coordinates",
            CoordinateSystem::Spherical => "Spherical Coordinates",
            CoordinateSystem::Cylindrical => "Cylindrical Coordinates",
        }
    }

    /// Labels of the three components
    pub fn labels(&self) -> [&'static str; 3] {
        match self {
            CoordinateSystem::Cartesian => ["X", "Y", "Z"],
            CoordinateSystem::Spherical => ["Radius", "θ", "φ"],
            CoordinateSystem::Cylindrical => ["ρ", "φ", "z"],
        }
    }

    /// Parse a system from its name (case-insensitive)
    pub fn from_string(name: &str) -> CoordResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "cartesian" | "cart" | "xyz" => Ok(CoordinateSystem::Cartesian),
            "spherical" | "sph" | "sphere" => Ok(CoordinateSystem::Spherical),
            "cylindrical" | "cyl" | "cylinder" => Ok(CoordinateSystem::Cylindrical),
            _ => Err(CoordError::UnknownMode(name.to_string())),
        }
    }
}

/// Direction of a single conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// Cartesian to spherical
    ToSpherical,
    /// Cartesian to cylindrical
    ToCylindrical,
    /// Spherical to Cartesian
    FromSpherical,
    /// Cylindrical to Cartesian
    FromCylindrical,
}

impl ConversionMode {
    pub const ALL: [ConversionMode; 4] = [
        ConversionMode::ToSpherical,
        ConversionMode::ToCylindrical,
        ConversionMode::FromSpherical,
        ConversionMode::FromCylindrical,
    ];

    /// System the three inputs are expressed in
    pub fn source(&self) -> CoordinateSystem {
        match self {
            ConversionMode::ToSpherical | ConversionMode::ToCylindrical => CoordinateSystem::Cartesian,
            ConversionMode::FromSpherical => CoordinateSystem::Spherical,
            ConversionMode::FromCylindrical => CoordinateSystem::Cylindrical,
        }
    }

    /// System the result is expressed in
    pub fn target(&self) -> CoordinateSystem {
        match self {
            ConversionMode::ToSpherical => CoordinateSystem::Spherical,
            ConversionMode::ToCylindrical => CoordinateSystem::Cylindrical,
            ConversionMode::FromSpherical | ConversionMode::FromCylindrical => CoordinateSystem::Cartesian,
        }
    }

    /// Name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            ConversionMode::ToSpherical => "to-spherical",
            ConversionMode::ToCylindrical => "to-cylindrical",
            ConversionMode::FromSpherical => "from-spherical",
            ConversionMode::FromCylindrical => "from-cylindrical",
        }
    }

    /// Parse a mode from its name; underscores and hyphens are interchangeable
    pub fn from_string(name: &str) -> CoordResult<Self> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        ConversionMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| CoordError::UnknownMode(name.to_string()))
    }
}
