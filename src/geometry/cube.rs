//! Axis-aligned cube, drawn for Cartesian points

use super::mesh::Mesh;
use crate::coordinate::Point3D;

/// Corner indices of each face: bottom, top, front, back, right, left
pub const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [1, 2, 6, 5],
    [0, 3, 7, 4],
];

/// Face names, in the same order as [`CUBE_FACES`]
pub const CUBE_FACE_NAMES: [&str; 6] = ["bottom", "top", "front", "back", "right", "left"];

/// Cube centered on a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    pub center: Point3D,
    /// Edge length
    pub size: f64,
}

impl Cube {
    pub fn new(center: Point3D, size: f64) -> Self {
        Cube { center, size }
    }

    /// The eight corners: the z-low square counter-clockwise from (-,-),
    /// then the z-high square in the same order
    pub fn vertices(&self) -> [Point3D; 8] {
        let h = self.size / 2.0;
        let Point3D { x, y, z } = self.center;

        [
            Point3D::new(x - h, y - h, z - h),
            Point3D::new(x + h, y - h, z - h),
            Point3D::new(x + h, y + h, z - h),
            Point3D::new(x - h, y + h, z - h),
            Point3D::new(x - h, y - h, z + h),
            Point3D::new(x + h, y - h, z + h),
            Point3D::new(x + h, y + h, z + h),
            Point3D::new(x - h, y + h, z + h),
        ]
    }

    /// Corner positions of each face, in face order
    pub fn faces(&self) -> [[Point3D; 4]; 6] {
        let v = self.vertices();
        CUBE_FACES.map(|face| face.map(|i| v[i]))
    }

    pub fn mesh(&self) -> Mesh {
        Mesh::Polyhedron {
            vertices: self.vertices().to_vec(),
            faces: CUBE_FACES.to_vec(),
        }
    }
}
