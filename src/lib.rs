pub mod errors;
pub mod utils;
pub mod coordinate;
pub mod geometry;
pub mod render;
pub mod commands;
pub mod api;

pub use crate::api::CoordKit;

pub use errors::{CoordError, CoordResult};
pub use coordinate::{convert, ConversionMode, ConversionResult, CoordinateSystem, Point3D};
pub use geometry::{build_geometry, Geometry, GeometryConfig, Mesh};
