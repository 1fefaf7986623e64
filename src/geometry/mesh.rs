//! Renderable mesh structures
//!
//! A mesh is either a closed polyhedron with explicit quadrilateral faces
//! or a parametric surface sampled on a regular grid.

use crate::coordinate::Point3D;

/// Evenly spaced samples over `[start, end]`, both endpoints included.
///
/// `count` of 0 yields an empty vector and 1 yields `[start]`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + (end - start) * (i as f64) / last
                    }
                })
                .collect()
        }
    }
}

/// Parametric surface samples stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    /// Number of rows (first parameter)
    pub rows: usize,
    /// Number of columns (second parameter)
    pub cols: usize,
    /// `rows * cols` samples; row `i`, column `j` is at `i * cols + j`
    pub points: Vec<Point3D>,
}

impl SurfaceGrid {
    /// Sample `f(row, col)` over a `rows x cols` grid
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> Point3D,
    {
        let mut points = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                points.push(f(i, j));
            }
        }
        SurfaceGrid { rows, cols, points }
    }

    /// Sample at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> Option<Point3D> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        self.points.get(i * self.cols + j).copied()
    }

    /// Quadrilateral cells between neighbouring samples, as point indices
    pub fn quads(&self) -> Vec<[usize; 4]> {
        if self.rows < 2 || self.cols < 2 {
            return Vec::new();
        }

        let mut quads = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows - 1 {
            for j in 0..self.cols - 1 {
                let a = i * self.cols + j;
                let b = a + 1;
                let c = b + self.cols;
                let d = a + self.cols;
                quads.push([a, b, c, d]);
            }
        }
        quads
    }
}

/// Mesh handed to a rendering collaborator
#[derive(Debug, Clone, PartialEq)]
pub enum Mesh {
    /// Closed solid with quadrilateral faces indexing `vertices`
    Polyhedron {
        vertices: Vec<Point3D>,
        faces: Vec<[usize; 4]>,
    },
    /// Open parametric surface
    Surface(SurfaceGrid),
}

impl Mesh {
    /// All vertices or samples
    pub fn vertices(&self) -> &[Point3D] {
        match self {
            Mesh::Polyhedron { vertices, .. } => vertices,
            Mesh::Surface(grid) => &grid.points,
        }
    }

    /// Quadrilateral faces as vertex indices
    pub fn quads(&self) -> Vec<[usize; 4]> {
        match self {
            Mesh::Polyhedron { faces, .. } => faces.clone(),
            Mesh::Surface(grid) => grid.quads(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    pub fn face_count(&self) -> usize {
        match self {
            Mesh::Polyhedron { faces, .. } => faces.len(),
            Mesh::Surface(grid) => grid.rows.saturating_sub(1) * grid.cols.saturating_sub(1),
        }
    }

    /// Axis-aligned bounds as (min, max), or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Point3D, Point3D)> {
        let mut iter = self.vertices().iter();
        let first = *iter.next()?;

        Some(iter.fold((first, first), |(min, max), p| {
            (
                Point3D::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Point3D::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        }))
    }
}
