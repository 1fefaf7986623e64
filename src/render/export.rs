//! Mesh export
//!
//! Writes a [`Mesh`] to disk for an external 3D viewer. Supported formats:
//! - `obj`: Wavefront OBJ text, one `v` line per vertex and one `f` line
//!   per quad (1-based indices)
//! - `csv`: one `index,x,y,z` row per vertex, plus `row,col` for surfaces
//! - `json`: vertices and quad faces
//! - `stl`: binary STL, each quad split into two triangles wound to face
//!   away from the mesh centroid

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use log::{debug, info};

use crate::coordinate::Point3D;
use crate::errors::{CoordError, CoordResult};
use crate::geometry::Mesh;
use crate::utils::progress::ProgressTracker;

/// Output formats understood by [`MeshExporter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Obj,
    Csv,
    Json,
    Stl,
}

impl MeshFormat {
    /// Look up a format by name (case-insensitive)
    pub fn from_name(name: &str) -> CoordResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "obj" => Ok(MeshFormat::Obj),
            "csv" => Ok(MeshFormat::Csv),
            "json" => Ok(MeshFormat::Json),
            "stl" => Ok(MeshFormat::Stl),
            _ => Err(CoordError::UnsupportedFormat(name.to_string())),
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &str) -> CoordResult<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| CoordError::UnsupportedFormat(path.to_string()))?;
        Self::from_name(extension)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MeshFormat::Obj => "obj",
            MeshFormat::Csv => "csv",
            MeshFormat::Json => "json",
            MeshFormat::Stl => "stl",
        }
    }
}

/// Writes meshes in one of the [`MeshFormat`]s
pub struct MeshExporter {
    format: MeshFormat,
    show_progress: bool,
}

impl MeshExporter {
    pub fn new(format: MeshFormat) -> Self {
        MeshExporter { format, show_progress: false }
    }

    /// Draw a progress bar while writing
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Save a mesh to a file
    ///
    /// # Arguments
    /// * `mesh` - Mesh to write
    /// * `path` - Output file path
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn save_to_file(&self, mesh: &Mesh, path: &str) -> CoordResult<()> {
        info!("Writing {} mesh to {}", self.format.name(), path);
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write(mesh, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a mesh to any writer
    pub fn write<W: Write>(&self, mesh: &Mesh, writer: &mut W) -> CoordResult<()> {
        let progress = if self.show_progress {
            ProgressTracker::new(mesh.vertex_count() as u64, "Exporting mesh")
        } else {
            ProgressTracker::hidden(mesh.vertex_count() as u64)
        };

        match self.format {
            MeshFormat::Obj => self.write_obj(mesh, writer, &progress)?,
            MeshFormat::Csv => self.write_csv(mesh, writer, &progress)?,
            MeshFormat::Json => self.write_json(mesh, writer, &progress)?,
            MeshFormat::Stl => self.write_stl(mesh, writer, &progress)?,
        }

        progress.finish();
        debug!(
            "Wrote {} vertices and {} faces",
            mesh.vertex_count(),
            mesh.face_count()
        );
        Ok(())
    }

    fn write_obj<W: Write>(&self, mesh: &Mesh, writer: &mut W, progress: &ProgressTracker) -> CoordResult<()> {
        writeln!(writer, "# coordkit mesh")?;
        for v in mesh.vertices() {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
            progress.increment(1);
        }
        for [a, b, c, d] in mesh.quads() {
            writeln!(writer, "f {} {} {} {}", a + 1, b + 1, c + 1, d + 1)?;
        }
        Ok(())
    }

    fn write_csv<W: Write>(&self, mesh: &Mesh, writer: &mut W, progress: &ProgressTracker) -> CoordResult<()> {
        match mesh {
            Mesh::Surface(grid) => {
                writeln!(writer, "row,col,x,y,z")?;
                for (index, p) in grid.points.iter().enumerate() {
                    writeln!(writer, "{},{},{},{},{}", index / grid.cols, index % grid.cols, p.x, p.y, p.z)?;
                    progress.increment(1);
                }
            }
            Mesh::Polyhedron { vertices, .. } => {
                writeln!(writer, "index,x,y,z")?;
                for (index, p) in vertices.iter().enumerate() {
                    writeln!(writer, "{},{},{},{}", index, p.x, p.y, p.z)?;
                    progress.increment(1);
                }
            }
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, mesh: &Mesh, writer: &mut W, progress: &ProgressTracker) -> CoordResult<()> {
        let kind = match mesh {
            Mesh::Polyhedron { .. } => "polyhedron",
            Mesh::Surface(_) => "surface",
        };

        // Start JSON structure
        writeln!(writer, "{{")?;
        writeln!(writer, "  \"kind\": \"{}\",", kind)?;
        if let Mesh::Surface(grid) = mesh {
            writeln!(writer, "  \"rows\": {},", grid.rows)?;
            writeln!(writer, "  \"cols\": {},", grid.cols)?;
        }

        writeln!(writer, "  \"vertices\": [")?;
        let vertices = mesh.vertices();
        for (i, v) in vertices.iter().enumerate() {
            let separator = if i + 1 < vertices.len() { "," } else { "" };
            writeln!(writer, "    [{}, {}, {}]{}", json_number(v.x), json_number(v.y), json_number(v.z), separator)?;
            progress.increment(1);
        }
        writeln!(writer, "  ],")?;

        writeln!(writer, "  \"faces\": [")?;
        let quads = mesh.quads();
        for (i, [a, b, c, d]) in quads.iter().enumerate() {
            let separator = if i + 1 < quads.len() { "," } else { "" };
            writeln!(writer, "    [{}, {}, {}, {}]{}", a, b, c, d, separator)?;
        }
        writeln!(writer, "  ]")?;

        // Close JSON structure
        writeln!(writer, "}}")?;
        Ok(())
    }

    fn write_stl<W: Write>(&self, mesh: &Mesh, writer: &mut W, progress: &ProgressTracker) -> CoordResult<()> {
        let vertices = mesh.vertices();
        let quads = mesh.quads();
        let triangle_count = u32::try_from(quads.len() * 2)
            .map_err(|_| CoordError::GenericError("Too many triangles for STL".to_string()))?;

        // 80-byte header, then the triangle count
        let mut header = [0u8; 80];
        let label = b"coordkit binary STL";
        header[..label.len()].copy_from_slice(label);
        writer.write_all(&header)?;
        writer.write_u32::<LittleEndian>(triangle_count)?;

        let centroid = mesh_centroid(vertices);
        for [a, b, c, d] in quads {
            for triangle in [[a, b, c], [a, c, d]] {
                let [p0, mut p1, mut p2] = triangle.map(|i| vertices[i]);
                let mut normal = (p1 - p0).cross(&(p2 - p0));

                // Facets must wind counter-clockwise seen from outside the solid
                let outward = Point3D::new(
                    (p0.x + p1.x + p2.x) / 3.0 - centroid.x,
                    (p0.y + p1.y + p2.y) / 3.0 - centroid.y,
                    (p0.z + p1.z + p2.z) / 3.0 - centroid.z,
                );
                if dot(&normal, &outward) < 0.0 {
                    std::mem::swap(&mut p1, &mut p2);
                    normal = Point3D::new(-normal.x, -normal.y, -normal.z);
                }

                for p in [normal.normalized(), p0, p1, p2] {
                    write_stl_point(writer, &p)?;
                }
                // Attribute byte count
                writer.write_u16::<LittleEndian>(0)?;
            }
        }
        progress.increment(vertices.len() as u64);
        Ok(())
    }
}

/// Size in bytes of a binary STL file with `triangles` facets
pub fn stl_size(triangles: usize) -> usize {
    84 + 50 * triangles
}

fn mesh_centroid(vertices: &[Point3D]) -> Point3D {
    let count = vertices.len().max(1) as f64;
    let sum = vertices.iter().fold(Point3D::ORIGIN, |acc, p| acc + *p);
    Point3D::new(sum.x / count, sum.y / count, sum.z / count)
}

fn dot(a: &Point3D, b: &Point3D) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

fn write_stl_point<W: Write>(writer: &mut W, p: &Point3D) -> CoordResult<()> {
    writer.write_f32::<LittleEndian>(p.x as f32)?;
    writer.write_f32::<LittleEndian>(p.y as f32)?;
    writer.write_f32::<LittleEndian>(p.z as f32)?;
    Ok(())
}

/// JSON has no representation for non-finite numbers
fn json_number(value: f64) -> String {
    if value.is_finite() {
        format!("{:?}", value)
    } else {
        "null".to_string()
    }
}
