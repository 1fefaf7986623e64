//! Tests for argument handling and command execution

extern crate std;

use crate::api::CoordKit;
use crate::commands::{build_cli, Command, CommandFactory, CoordkitCommandFactory, ConvertCommand, PlotCommand};
use crate::coordinate::{ConversionMode, CoordinateSystem, Point3D};
use crate::errors::CoordError;
use crate::geometry::{Geometry, GeometryConfig};
use crate::render::MeshFormat;

fn matches(args: &[&str]) -> clap::ArgMatches {
    let mut full = vec!["coordkit"];
    full.extend_from_slice(args);
    build_cli().try_get_matches_from(full).unwrap()
}

fn run(args: &[&str]) -> Result<String, CoordError> {
    let kit = CoordKit::without_log_file();
    let factory = CoordkitCommandFactory::new();
    let command = factory.create_command(&matches(args), &kit)?;
    command.execute()
}

#[test]
fn test_cli_definition_is_consistent() {
    build_cli().debug_assert();
}

#[test]
fn test_convert_to_spherical() {
    let output = run(&["1", "1", "1", "--convert", "to-spherical"]).unwrap();
    std::assert_eq!(output, "Spherical Coordinates:\nRadius: 1.7321\nθ: 45.0\nφ: 54.7356");
}

#[test]
fn test_convert_accepts_negative_values() {
    let output = run(&["-1", "0", "-2.5", "--convert", "to-cylindrical"]).unwrap();
    std::assert_eq!(output, "Cylindrical Coordinates:\nρ: 1.0\nφ: 180.0\nz: -2.5");
}

#[test]
fn test_convert_rejects_bad_numbers() {
    let result = run(&["1", "two", "3", "--convert", "from-spherical"]);
    std::assert!(matches!(result, Err(CoordError::InvalidNumber(ref text)) if text == "two"));
}

#[test]
fn test_convert_origin_to_spherical_is_an_error() {
    let result = run(&["0", "0", "0", "--convert", "to-spherical"]);
    std::assert!(matches!(result, Err(CoordError::DegeneratePoint)));
}

#[test]
fn test_unknown_mode_and_missing_action() {
    std::assert!(matches!(
        run(&["1", "2", "3", "--convert", "to-polar"]),
        Err(CoordError::UnknownMode(_))
    ));
    std::assert!(matches!(run(&["1", "2", "3"]), Err(CoordError::GenericError(_))));
}

#[test]
fn test_convert_and_plot_conflict() {
    let result = build_cli().try_get_matches_from([
        "coordkit", "1", "2", "3", "--convert", "to-spherical", "--plot", "cartesian",
    ]);
    std::assert!(result.is_err());
}

#[test]
fn test_plot_reports_mesh_size() {
    let output = run(&["2", "2", "2", "--plot", "spherical"]).unwrap();
    std::assert!(output.starts_with("Sphere centered at (2, 2, 2) with radius 10"));
    std::assert!(output.contains("10000 vertices"));
}

#[test]
fn test_plot_rejects_unknown_format() {
    let result = run(&["0", "0", "0", "--plot", "cartesian", "-o", "cube.out", "--format", "ply"]);
    std::assert!(matches!(result, Err(CoordError::UnsupportedFormat(_))));
}

#[test]
fn test_plot_command_writes_outputs() {
    let dir = std::env::temp_dir();
    let mesh_path = dir.join("coordkit_plot_command.obj");
    let preview_path = dir.join("coordkit_plot_command.png");
    let mesh_path = mesh_path.to_str().unwrap();
    let preview_path = preview_path.to_str().unwrap();

    let config = GeometryConfig { resolution: 10, ..GeometryConfig::builtin() };
    let kit = CoordKit::without_log_file().with_config(config).unwrap();
    let command = PlotCommand::from_parts(CoordinateSystem::Cylindrical, Point3D::new(1.0, 1.0, 4.0), &kit)
        .with_output(mesh_path, Some(MeshFormat::Obj))
        .with_preview(preview_path, 32);

    let report = command.execute().unwrap();
    std::assert!(report.contains("Mesh written to"));
    std::assert!(report.contains("Preview written to"));

    let obj = std::fs::read_to_string(mesh_path).unwrap();
    std::assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 100);
    std::assert!(std::fs::metadata(preview_path).unwrap().len() > 0);

    let _ = std::fs::remove_file(mesh_path);
    let _ = std::fs::remove_file(preview_path);
}

#[test]
fn test_commands_from_parts() {
    let kit = CoordKit::without_log_file();

    let result = ConvertCommand::from_parts(ConversionMode::FromCylindrical, (5.0, 90.0, 3.0), &kit)
        .run()
        .unwrap();
    std::assert_eq!(result.values(), (0.0, 5.0, 3.0));

    let geometry = PlotCommand::from_parts(CoordinateSystem::Cartesian, Point3D::ORIGIN, &kit)
        .run()
        .unwrap();
    std::assert!(matches!(geometry, Geometry::Cube(_)));
}
