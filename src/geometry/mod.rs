//! Geometry generation for coordinate systems
//!
//! Each coordinate system has a matching solid: a cube for Cartesian
//! points, a sphere for spherical points and a cylinder for cylindrical
//! points. The solid is centered on the given point with dimensions taken
//! from a [`GeometryConfig`], never from the point itself.

pub mod config;
mod cube;
mod cylinder;
mod mesh;
mod sphere;

#[cfg(test)]
mod tests;

use log::debug;

use crate::coordinate::{CoordinateSystem, Point3D};

pub use self::config::GeometryConfig;
pub use self::cube::{Cube, CUBE_FACES, CUBE_FACE_NAMES};
pub use self::cylinder::Cylinder;
pub use self::mesh::{linspace, Mesh, SurfaceGrid};
pub use self::sphere::Sphere;

/// A renderable solid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Cube(Cube),
    Sphere(Sphere),
    Cylinder(Cylinder),
}

impl Geometry {
    /// Coordinate system this solid represents
    pub fn system(&self) -> CoordinateSystem {
        match self {
            Geometry::Cube(_) => CoordinateSystem::Cartesian,
            Geometry::Sphere(_) => CoordinateSystem::Spherical,
            Geometry::Cylinder(_) => CoordinateSystem::Cylindrical,
        }
    }

    pub fn center(&self) -> Point3D {
        match self {
            Geometry::Cube(cube) => cube.center,
            Geometry::Sphere(sphere) => sphere.center,
            Geometry::Cylinder(cylinder) => cylinder.center,
        }
    }

    /// Generate the mesh for this solid
    pub fn mesh(&self) -> Mesh {
        match self {
            Geometry::Cube(cube) => cube.mesh(),
            Geometry::Sphere(sphere) => sphere.mesh(),
            Geometry::Cylinder(cylinder) => cylinder.mesh(),
        }
    }

    /// Axis-aligned bounding box of the generated mesh
    pub fn bounds(&self) -> Option<(Point3D, Point3D)> {
        self.mesh().bounds()
    }

    /// One-line summary for logs and console output
    pub fn describe(&self) -> String {
        let c = self.center();
        match self {
            Geometry::Cube(cube) => format!(
                "Cube centered at ({}, {}, {}) with edge {}",
                c.x, c.y, c.z, cube.size
            ),
            Geometry::Sphere(sphere) => format!(
                "Sphere centered at ({}, {}, {}) with radius {} ({}x{} samples)",
                c.x, c.y, c.z, sphere.radius, sphere.resolution, sphere.resolution
            ),
            Geometry::Cylinder(cylinder) => format!(
                "Cylinder around ({}, {}) with radius {} over z in [0, {}] ({}x{} samples)",
                c.x, c.y, cylinder.radius, cylinder.height, cylinder.resolution, cylinder.resolution
            ),
        }
    }
}

/// Build the solid for `system` centered on `center` with default dimensions
pub fn build_geometry(system: CoordinateSystem, center: Point3D) -> Geometry {
    build_geometry_with(system, center, &GeometryConfig::default())
}

/// Build the solid for `system` centered on `center` with explicit dimensions
pub fn build_geometry_with(
    system: CoordinateSystem,
    center: Point3D,
    config: &GeometryConfig,
) -> Geometry {
    let geometry = match system {
        CoordinateSystem::Cartesian => Geometry::Cube(Cube::new(center, config.cube_size)),
        CoordinateSystem::Spherical => {
            Geometry::Sphere(Sphere::new(center, config.sphere_radius, config.resolution))
        }
        CoordinateSystem::Cylindrical => Geometry::Cylinder(Cylinder::new(
            center,
            config.cylinder_radius,
            config.cylinder_height,
            config.resolution,
        )),
    };

    debug!("Built geometry: {}", geometry.describe());
    geometry
}
