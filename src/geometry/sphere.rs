//! Parametric sphere, drawn for spherical points

use super::mesh::{linspace, Mesh, SurfaceGrid};
use crate::coordinate::Point3D;
use std::f64::consts::PI;

/// Sphere of fixed radius centered on a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3D,
    pub radius: f64,
    /// Samples per parameter axis
    pub resolution: usize,
}

impl Sphere {
    pub fn new(center: Point3D, radius: f64, resolution: usize) -> Self {
        Sphere { center, radius, resolution }
    }

    /// Rows sweep the azimuth `u` over [0, 2π] and columns the polar angle
    /// `v` over [0, π]; each sample is `center + R (cos u sin v, sin u sin v, cos v)`.
    pub fn surface(&self) -> SurfaceGrid {
        let u = linspace(0.0, 2.0 * PI, self.resolution);
        let v = linspace(0.0, PI, self.resolution);

        SurfaceGrid::from_fn(u.len(), v.len(), |i, j| {
            let (sin_u, cos_u) = u[i].sin_cos();
            let (sin_v, cos_v) = v[j].sin_cos();
            Point3D::new(
                self.center.x + self.radius * cos_u * sin_v,
                self.center.y + self.radius * sin_u * sin_v,
                self.center.z + self.radius * cos_v,
            )
        })
    }

    pub fn mesh(&self) -> Mesh {
        Mesh::Surface(self.surface())
    }
}
