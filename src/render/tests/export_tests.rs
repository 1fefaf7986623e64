//! Tests for mesh export formats

extern crate std;

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::coordinate::{CoordinateSystem, Point3D};
use crate::errors::CoordError;
use crate::geometry::{build_geometry, build_geometry_with, GeometryConfig};
use crate::render::export::stl_size;
use crate::render::{MeshExporter, MeshFormat};

fn export_to_string(format: MeshFormat, system: CoordinateSystem, config: &GeometryConfig) -> String {
    let mesh = build_geometry_with(system, Point3D::ORIGIN, config).mesh();
    let mut buffer = Vec::new();
    MeshExporter::new(format).write(&mesh, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

fn small_config() -> GeometryConfig {
    GeometryConfig {
        resolution: 4,
        ..GeometryConfig::builtin()
    }
}

#[test]
fn test_format_lookup() {
    std::assert_eq!(MeshFormat::from_name("OBJ").unwrap(), MeshFormat::Obj);
    std::assert_eq!(MeshFormat::from_path("out/mesh.stl").unwrap(), MeshFormat::Stl);
    std::assert_eq!(MeshFormat::from_path("mesh.json").unwrap(), MeshFormat::Json);
    std::assert!(matches!(
        MeshFormat::from_name("ply"),
        Err(CoordError::UnsupportedFormat(_))
    ));
    std::assert!(MeshFormat::from_path("mesh").is_err());
}

#[test]
fn test_obj_cube_has_eight_vertices_and_six_faces() {
    let text = export_to_string(MeshFormat::Obj, CoordinateSystem::Cartesian, &GeometryConfig::builtin());
    let vertices = text.lines().filter(|l| l.starts_with("v ")).count();
    let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
    std::assert_eq!(vertices, 8);
    std::assert_eq!(faces.len(), 6);
    std::assert_eq!(faces[0], "f 1 2 3 4");
    std::assert!(text.contains("v -0.75 -0.75 -0.75"));
}

#[test]
fn test_csv_surface_has_row_and_column() {
    let text = export_to_string(MeshFormat::Csv, CoordinateSystem::Cylindrical, &small_config());
    let lines: Vec<&str> = text.lines().collect();
    std::assert_eq!(lines[0], "row,col,x,y,z");
    std::assert_eq!(lines.len(), 1 + 16);
    std::assert!(lines[1].starts_with("0,0,5,0,0"));
    std::assert!(lines[16].starts_with("3,3,"));
}

#[test]
fn test_json_lists_vertices_and_faces() {
    let text = export_to_string(MeshFormat::Json, CoordinateSystem::Spherical, &small_config());
    std::assert!(text.contains("\"kind\": \"surface\""));
    std::assert!(text.contains("\"rows\": 4"));
    std::assert!(text.contains("\"faces\": ["));
    std::assert!(text.trim_end().ends_with('}'));

    let face_lines = text
        .lines()
        .skip_while(|l| !l.contains("\"faces\""))
        .skip(1)
        .take_while(|l| l.trim() != "]")
        .count();
    std::assert_eq!(face_lines, 9);
}

#[test]
fn test_stl_layout() {
    let mesh = build_geometry(CoordinateSystem::Cartesian, Point3D::ORIGIN).mesh();
    let mut buffer = Vec::new();
    MeshExporter::new(MeshFormat::Stl).write(&mesh, &mut buffer).unwrap();

    std::assert_eq!(buffer.len(), stl_size(12));

    let mut cursor = Cursor::new(&buffer[80..]);
    std::assert_eq!(cursor.read_u32::<LittleEndian>().unwrap(), 12);

    // First facet: the bottom face points down, then its first corner
    let normal: Vec<f32> = (0..3).map(|_| cursor.read_f32::<LittleEndian>().unwrap()).collect();
    std::assert_eq!(normal, vec![0.0, 0.0, -1.0]);
    let corner: Vec<f32> = (0..3).map(|_| cursor.read_f32::<LittleEndian>().unwrap()).collect();
    std::assert_eq!(corner, vec![-0.75, -0.75, -0.75]);
}

fn read_facets(buffer: &[u8]) -> Vec<[[f64; 3]; 4]> {
    let mut cursor = Cursor::new(&buffer[80..]);
    let count = cursor.read_u32::<LittleEndian>().unwrap();
    (0..count)
        .map(|_| {
            let mut facet = [[0.0; 3]; 4];
            for vector in facet.iter_mut() {
                for component in vector.iter_mut() {
                    *component = cursor.read_f32::<LittleEndian>().unwrap() as f64;
                }
            }
            cursor.read_u16::<LittleEndian>().unwrap();
            facet
        })
        .collect()
}

#[test]
fn test_stl_cube_facets_face_outward() {
    let center = Point3D::new(2.0, -1.0, 4.0);
    let mesh = build_geometry(CoordinateSystem::Cartesian, center).mesh();
    let mut buffer = Vec::new();
    MeshExporter::new(MeshFormat::Stl).write(&mesh, &mut buffer).unwrap();

    let facets = read_facets(&buffer);
    std::assert_eq!(facets.len(), 12);

    for (index, [normal, p0, p1, p2]) in facets.iter().enumerate() {
        let sub = |a: &[f64; 3], b: &[f64; 3]| [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
        let dot = |a: &[f64; 3], b: &[f64; 3]| a[0] * b[0] + a[1] * b[1] + a[2] * b[2];

        let to_facet = sub(
            &[
                (p0[0] + p1[0] + p2[0]) / 3.0,
                (p0[1] + p1[1] + p2[1]) / 3.0,
                (p0[2] + p1[2] + p2[2]) / 3.0,
            ],
            &center.to_array(),
        );
        std::assert!(dot(normal, &to_facet) > 0.0, "facet {} points inward", index);

        // Stored vertex order agrees with the stored normal
        let (e1, e2) = (sub(p1, p0), sub(p2, p0));
        let winding = [
            e1[1] * e2[2] - e1[2] * e2[1],
            e1[2] * e2[0] - e1[0] * e2[2],
            e1[0] * e2[1] - e1[1] * e2[0],
        ];
        std::assert!(dot(&winding, normal) > 0.0, "facet {} winds against its normal", index);
    }
}

#[test]
fn test_save_to_file_writes_obj() {
    let path = std::env::temp_dir().join("coordkit_export_test.obj");
    let path = path.to_str().unwrap();
    let mesh = build_geometry(CoordinateSystem::Cartesian, Point3D::new(1.0, 2.0, 3.0)).mesh();

    MeshExporter::new(MeshFormat::Obj).save_to_file(&mesh, path).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    std::assert!(text.contains("v 0.25 1.25 2.25"));
    let _ = std::fs::remove_file(path);
}
