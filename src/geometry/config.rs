//! Geometry configuration
//!
//! Solid dimensions and mesh resolution are fixed constants by default so
//! shapes look the same whatever the input magnitude. The defaults live in
//! `geometry_defaults.toml` and can be overridden by a user TOML file.

use std::fs;

use lazy_static::lazy_static;
use log::{debug, warn};

use crate::errors::{CoordError, CoordResult};

pub const DEFAULT_CUBE_SIZE: f64 = 1.5;
pub const DEFAULT_SPHERE_RADIUS: f64 = 10.0;
pub const DEFAULT_CYLINDER_RADIUS: f64 = 5.0;
pub const DEFAULT_CYLINDER_HEIGHT: f64 = 10.0;
pub const DEFAULT_RESOLUTION: usize = 100;
/// Largest accepted resolution; surfaces hold `resolution²` samples
pub const MAX_RESOLUTION: usize = 2000;

lazy_static! {
    // Parse the bundled defaults once
    static ref DEFAULT_CONFIG: GeometryConfig = {
        let content = include_str!("../../geometry_defaults.toml");
        GeometryConfig::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse bundled geometry defaults: {}", e);
            GeometryConfig::builtin()
        })
    };
}

/// Dimensions of the generated solids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Edge length of the cube
    pub cube_size: f64,
    /// Radius of the sphere
    pub sphere_radius: f64,
    /// Radius of the cylinder
    pub cylinder_radius: f64,
    /// Height of the cylinder, measured up from z = 0
    pub cylinder_height: f64,
    /// Samples per axis for the parametric surfaces
    pub resolution: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        *DEFAULT_CONFIG
    }
}

impl GeometryConfig {
    /// Hard-coded defaults, independent of the bundled TOML file
    pub fn builtin() -> Self {
        GeometryConfig {
            cube_size: DEFAULT_CUBE_SIZE,
            sphere_radius: DEFAULT_SPHERE_RADIUS,
            cylinder_radius: DEFAULT_CYLINDER_RADIUS,
            cylinder_height: DEFAULT_CYLINDER_HEIGHT,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Parse a configuration from a TOML string.
    ///
    /// Missing tables or keys keep their built-in values.
    pub fn from_str(content: &str) -> CoordResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(CoordError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = GeometryConfig::builtin();

        if let Some(size) = Self::read_float(&toml_value, "cube", "size")? {
            config.cube_size = size;
        }
        if let Some(radius) = Self::read_float(&toml_value, "sphere", "radius")? {
            config.sphere_radius = radius;
        }
        if let Some(radius) = Self::read_float(&toml_value, "cylinder", "radius")? {
            config.cylinder_radius = radius;
        }
        if let Some(height) = Self::read_float(&toml_value, "cylinder", "height")? {
            config.cylinder_height = height;
        }

        if let Some(value) = toml_value.get("mesh").and_then(|t| t.get("resolution")) {
            let resolution = value.as_integer().ok_or_else(|| {
                CoordError::ConfigError("mesh.resolution must be an integer".to_string())
            })?;
            config.resolution = usize::try_from(resolution).map_err(|_| {
                CoordError::ConfigError(format!("mesh.resolution must not be negative: {}", resolution))
            })?;
        }

        config.validate()?;
        debug!("Parsed geometry configuration: {:?}", config);
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> CoordResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Check that every dimension is usable
    pub fn validate(&self) -> CoordResult<()> {
        let dimensions = [
            ("cube.size", self.cube_size),
            ("sphere.radius", self.sphere_radius),
            ("cylinder.radius", self.cylinder_radius),
            ("cylinder.height", self.cylinder_height),
        ];

        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoordError::ConfigError(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }

        if !(2..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(CoordError::ConfigError(format!(
                "mesh.resolution must be between 2 and {}, got {}",
                MAX_RESOLUTION, self.resolution
            )));
        }

        Ok(())
    }

    /// Read `[table] key` as a float; integers are accepted too
    fn read_float(toml_value: &toml::Value, table: &str, key: &str) -> CoordResult<Option<f64>> {
        let value = match toml_value.get(table).and_then(|t| t.get(key)) {
            Some(value) => value,
            None => return Ok(None),
        };

        match value {
            toml::Value::Float(f) => Ok(Some(*f)),
            toml::Value::Integer(i) => Ok(Some(*i as f64)),
            other => Err(CoordError::ConfigError(format!(
                "{}.{} must be a number, got {}",
                table,
                key,
                other.type_str()
            ))),
        }
    }
}
