//! Parametric cylinder surface, drawn for cylindrical points

use super::mesh::{linspace, Mesh, SurfaceGrid};
use crate::coordinate::Point3D;
use std::f64::consts::PI;

/// Open cylinder around a vertical axis through the center's x and y.
///
/// The height range is absolute: the surface always spans z in
/// [0, height], whatever the center's z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub center: Point3D,
    pub radius: f64,
    pub height: f64,
    pub resolution: usize,
}

impl Cylinder {
    pub fn new(center: Point3D, radius: f64, height: f64, resolution: usize) -> Self {
        Cylinder { center, radius, height, resolution }
    }

    /// Rows sweep z over [0, height] and columns the azimuth over [0, 2π]
    pub fn surface(&self) -> SurfaceGrid {
        let heights = linspace(0.0, self.height, self.resolution);
        let theta = linspace(0.0, 2.0 * PI, self.resolution);

        SurfaceGrid::from_fn(heights.len(), theta.len(), |i, j| {
            let (sin_t, cos_t) = theta[j].sin_cos();
            Point3D::new(
                self.center.x + self.radius * cos_t,
                self.center.y + self.radius * sin_t,
                heights[i],
            )
        })
    }

    pub fn mesh(&self) -> Mesh {
        Mesh::Surface(self.surface())
    }
}
