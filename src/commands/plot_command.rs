//! Geometry plotting command
//!
//! This module implements the command that builds the solid for a
//! coordinate system around a point and hands it to the renderers.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::CoordKit;
use crate::commands::command_traits::Command;
use crate::commands::read_values;
use crate::coordinate::{CoordinateSystem, Point3D};
use crate::errors::{CoordError, CoordResult};
use crate::geometry::Geometry;
use crate::render::preview::DEFAULT_IMAGE_SIZE;
use crate::render::MeshFormat;

/// Command for generating and exporting a solid
pub struct PlotCommand<'a> {
    /// Coordinate system selecting the solid
    system: CoordinateSystem,
    /// Center of the solid
    center: Point3D,
    /// Mesh output path (optional)
    output_file: Option<String>,
    /// Explicit mesh format; the output extension is used otherwise
    format: Option<MeshFormat>,
    /// PNG preview path (optional)
    preview_file: Option<String>,
    /// Preview edge length in pixels
    preview_size: u32,
    /// Application context
    kit: &'a CoordKit,
}

impl<'a> PlotCommand<'a> {
    /// Create a new plot command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Application context
    ///
    /// # Returns
    /// A new PlotCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Self> {
        let system_name = args.get_one::<String>("plot")
            .ok_or_else(|| CoordError::GenericError("Missing plot type".to_string()))?;
        let system = CoordinateSystem::from_string(system_name)?;
        info!("Plot type: {}", system.name());

        let (x, y, z) = read_values(args)?;
        let center = Point3D::new(x, y, z);

        let output_file = args.get_one::<String>("output").cloned();
        info!("Mesh output: {:?}", output_file);

        let format = match args.get_one::<String>("format") {
            Some(name) => Some(MeshFormat::from_name(name)?),
            None => None,
        };

        let preview_file = args.get_one::<String>("preview").cloned();
        info!("Preview output: {:?}", preview_file);

        let preview_size = match args.get_one::<String>("preview-size") {
            Some(size_str) => size_str.trim().parse::<u32>()
                .map_err(|_| CoordError::GenericError(format!("Invalid preview size: {}", size_str)))?,
            None => DEFAULT_IMAGE_SIZE,
        };

        if format.is_some() && output_file.is_none() {
            warn!("--format has no effect without --output");
        }

        Ok(PlotCommand {
            system,
            center,
            output_file,
            format,
            preview_file,
            preview_size,
            kit,
        })
    }

    /// Create a command that only builds the solid
    pub fn from_parts(system: CoordinateSystem, center: Point3D, kit: &'a CoordKit) -> Self {
        PlotCommand {
            system,
            center,
            output_file: None,
            format: None,
            preview_file: None,
            preview_size: DEFAULT_IMAGE_SIZE,
            kit,
        }
    }

    /// Set where the mesh is written
    pub fn with_output(mut self, path: &str, format: Option<MeshFormat>) -> Self {
        self.output_file = Some(path.to_string());
        self.format = format;
        self
    }

    /// Set where the preview is written
    pub fn with_preview(mut self, path: &str, size: u32) -> Self {
        self.preview_file = Some(path.to_string());
        self.preview_size = size;
        self
    }

    /// Build the solid and write the requested outputs
    pub fn run(&self) -> CoordResult<Geometry> {
        let geometry = self.kit.build_geometry(self.system, self.center)?;

        if let Some(output) = &self.output_file {
            self.kit.export_mesh(&geometry, output, self.format)?;
        }

        if let Some(preview) = &self.preview_file {
            self.kit.render_preview(&geometry, preview, self.preview_size)?;
        }

        Ok(geometry)
    }
}

impl<'a> Command for PlotCommand<'a> {
    fn execute(&self) -> CoordResult<String> {
        let geometry = self.run()?;
        let mesh = geometry.mesh();

        let mut report = format!(
            "{}\nMesh: {} vertices, {} faces",
            geometry.describe(),
            mesh.vertex_count(),
            mesh.face_count()
        );
        if let Some(output) = &self.output_file {
            report.push_str(&format!("\nMesh written to {}", output));
        }
        if let Some(preview) = &self.preview_file {
            report.push_str(&format!("\nPreview written to {}", preview));
        }

        info!("Plot {} successful", self.system.name());
        Ok(report)
    }
}
