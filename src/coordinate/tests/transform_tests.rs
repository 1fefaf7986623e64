//! Tests for coordinate conversions

extern crate std;

use crate::coordinate::{
    cartesian_to_cylindrical, cartesian_to_spherical, convert, cylindrical_to_cartesian,
    spherical_to_cartesian, Cartesian, ConversionMode, CoordinateSystem, Cylindrical, Spherical,
};
use crate::errors::CoordError;

const ROUND_TRIP_TOL: f64 = 1e-3;

fn assert_triple_close(actual: (f64, f64, f64), expected: (f64, f64, f64), tol: f64) {
    let pairs = [(actual.0, expected.0), (actual.1, expected.1), (actual.2, expected.2)];
    for (a, e) in pairs {
        std::assert!(
            (a - e).abs() <= tol,
            "Expected: {:?}, Actual: {:?}",
            expected,
            actual
        );
    }
}

fn sample_points() -> Vec<(f64, f64, f64)> {
    vec![
        (1.0, 1.0, 1.0),
        (3.0, 4.0, 12.0),
        (-2.5, 0.5, 7.25),
        (0.0, -3.0, 0.0),
        (-1.0, -1.0, -1.0),
        (10.0, -20.0, 5.5),
        (0.0, 0.0, 4.0),
        (0.0, 0.0, -4.0),
        (0.001, 0.002, -0.003),
        (-42.0, 17.5, -63.125),
    ]
}

#[test]
fn test_cartesian_to_spherical_unit_diagonal() {
    let result = cartesian_to_spherical(1.0, 1.0, 1.0).unwrap();
    std::assert_eq!(result, (1.7321, 45.0, 54.7356));
}

#[test]
fn test_cartesian_to_spherical_pythagorean() {
    let result = cartesian_to_spherical(3.0, 4.0, 12.0).unwrap();
    std::assert_eq!(result, (13.0, 53.1301, 22.6199));
}

#[test]
fn test_cartesian_to_spherical_axes() {
    std::assert_eq!(cartesian_to_spherical(0.0, 0.0, -3.0).unwrap(), (3.0, 0.0, 180.0));
    std::assert_eq!(cartesian_to_spherical(-1.0, 0.0, 0.0).unwrap(), (1.0, 180.0, 90.0));
    std::assert_eq!(cartesian_to_spherical(0.0, -2.0, 0.0).unwrap(), (2.0, -90.0, 90.0));
}

#[test]
fn test_cartesian_to_spherical_origin_is_degenerate() {
    let result = cartesian_to_spherical(0.0, 0.0, 0.0);
    std::assert!(matches!(result, Err(CoordError::DegeneratePoint)));

    let via_convert = convert(ConversionMode::ToSpherical, 0.0, 0.0, 0.0);
    std::assert!(matches!(via_convert, Err(CoordError::DegeneratePoint)));
}

#[test]
fn test_cylindrical_to_cartesian_quarter_turn() {
    std::assert_eq!(cylindrical_to_cartesian(5.0, 90.0, 3.0), (0.0, 5.0, 3.0));
}

#[test]
fn test_cartesian_to_cylindrical_on_z_axis() {
    std::assert_eq!(cartesian_to_cylindrical(0.0, 0.0, 5.0), (0.0, 0.0, 5.0));
}

#[test]
fn test_cartesian_to_cylindrical_quadrants() {
    std::assert_eq!(cartesian_to_cylindrical(3.0, 4.0, -1.5), (5.0, 53.1301, -1.5));
    std::assert_eq!(cartesian_to_cylindrical(-1.0, 0.0, 0.0), (1.0, 180.0, 0.0));
    std::assert_eq!(cartesian_to_cylindrical(1.0, -1.0, 2.0), (1.4142, -45.0, 2.0));
}

#[test]
fn test_spherical_to_cartesian_known_values() {
    std::assert_eq!(spherical_to_cartesian(2.0, 0.0, 90.0), (2.0, 0.0, 0.0));
    std::assert_eq!(spherical_to_cartesian(4.0, 123.0, 0.0), (0.0, 0.0, 4.0));
    std::assert_eq!(spherical_to_cartesian(1.7321, 45.0, 54.7356), (1.0, 1.0, 1.0));
}

#[test]
fn test_spherical_round_trip() {
    for (x, y, z) in sample_points() {
        let (r, theta, phi) = cartesian_to_spherical(x, y, z).unwrap();
        let back = spherical_to_cartesian(r, theta, phi);
        assert_triple_close(back, (x, y, z), ROUND_TRIP_TOL);
    }
}

#[test]
fn test_cylindrical_round_trip() {
    let mut points = sample_points();
    points.push((0.0, 0.0, 0.0));
    for (x, y, z) in points {
        let (rho, phi, height) = cartesian_to_cylindrical(x, y, z);
        let back = cylindrical_to_cartesian(rho, phi, height);
        assert_triple_close(back, (x, y, z), ROUND_TRIP_TOL);
    }
}

#[test]
fn test_angle_ranges() {
    for (x, y, z) in sample_points() {
        let (r, theta, phi) = cartesian_to_spherical(x, y, z).unwrap();
        std::assert!(r > 0.0);
        std::assert!(theta > -180.0 && theta <= 180.0, "theta out of range: {}", theta);
        std::assert!((0.0..=180.0).contains(&phi), "phi out of range: {}", phi);

        let (rho, _, _) = cartesian_to_cylindrical(x, y, z);
        std::assert!(rho >= 0.0);
    }
}

#[test]
fn test_typed_conversions_are_unrounded() {
    let spherical = Spherical::try_from(Cartesian::new(1.0, 1.0, 1.0)).unwrap();
    std::assert!((spherical.radius - 3f64.sqrt()).abs() < 1e-12);

    let cylindrical = Cylindrical::from(spherical);
    std::assert!((cylindrical.radius - 2f64.sqrt()).abs() < 1e-12);
    std::assert!((cylindrical.height - 1.0).abs() < 1e-12);

    let back = Spherical::try_from(cylindrical).unwrap();
    std::assert!((back.polar - spherical.polar).abs() < 1e-9);
    std::assert!(Spherical::try_from(Cylindrical::new(0.0, 30.0, 0.0)).is_err());
}

#[test]
fn test_convert_labels_target_system() {
    for mode in ConversionMode::ALL {
        let result = convert(mode, 1.0, 2.0, 3.0).unwrap();
        std::assert_eq!(result.system, mode.target());
    }
}

#[test]
fn test_convert_display() {
    let result = convert(ConversionMode::ToSpherical, 1.0, 1.0, 1.0).unwrap();
    std::assert_eq!(
        result.to_string(),
        "Spherical Coordinates:\nRadius: 1.7321\nθ: 45.0\nφ: 54.7356"
    );

    let result = convert(ConversionMode::FromCylindrical, 5.0, 90.0, 3.0).unwrap();
    std::assert_eq!(result.to_string(), "Cartesian Coordinates:\nX: 0.0\nY: 5.0\nZ: 3.0");
}

#[test]
fn test_mode_and_system_parsing() {
    std::assert_eq!(
        ConversionMode::from_string("to_spherical").unwrap(),
        ConversionMode::ToSpherical
    );
    std::assert_eq!(
        ConversionMode::from_string(" From-Cylindrical ").unwrap(),
        ConversionMode::FromCylindrical
    );
    std::assert!(matches!(
        ConversionMode::from_string("sideways"),
        Err(CoordError::UnknownMode(_))
    ));

    std::assert_eq!(
        CoordinateSystem::from_string("Cylinder").unwrap(),
        CoordinateSystem::Cylindrical
    );
    std::assert!(CoordinateSystem::from_string("polar").is_err());
    std::assert_eq!(ConversionMode::FromSpherical.source(), CoordinateSystem::Spherical);
}

#[test]
fn test_negative_x_axis_reports_positive_180() {
    // A typed "-0" for y lands on the negative x axis too
    std::assert_eq!(cartesian_to_spherical(-1.0, -0.0, 0.0).unwrap(), (1.0, 180.0, 90.0));
    std::assert_eq!(cartesian_to_cylindrical(-1.0, -0.0, 0.0), (1.0, 180.0, 0.0));

    let typed = Cylindrical::from(Cartesian::new(-2.0, -0.0, 1.0));
    std::assert_eq!(typed.azimuth, 180.0);
}

#[test]
fn test_azimuth_rounding_to_minus_180_is_folded() {
    // atan2 gives -179.99999427..., which rounds to -180
    std::assert_eq!(cartesian_to_spherical(-1.0, -1.0e-7, 0.0).unwrap(), (1.0, 180.0, 90.0));
    std::assert_eq!(cartesian_to_cylindrical(-1.0, -1.0e-7, 3.0), (1.0, 180.0, 3.0));
}

#[test]
fn test_height_rounds_the_stored_value() {
    std::assert_eq!(cartesian_to_cylindrical(1.0, 0.0, 0.00035).2, 0.0003);
    std::assert_eq!(cartesian_to_cylindrical(1.0, 0.0, 1.00005).2, 1.0001);
}
