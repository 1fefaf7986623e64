use log::info;

use crate::coordinate::{self, ConversionMode, ConversionResult, CoordinateSystem, Point3D};
use crate::errors::CoordResult;
use crate::geometry::{self, Geometry, GeometryConfig};
use crate::render::{MeshExporter, MeshFormat, PreviewRenderer};
use crate::utils::input_utils::parse_triple;
use crate::utils::logger::Logger;

/// Main interface to the coordkit library
///
/// Owns the per-run state of the application: the log file and the
/// geometry configuration. The entry point creates one and drops it when
/// the run ends.
pub struct CoordKit {
    logger: Logger,
    config: GeometryConfig,
    show_progress: bool,
}

impl CoordKit {
    /// Create a new CoordKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "coordkit.log"
    ///
    /// # Returns
    /// A CoordKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> CoordResult<Self> {
        let log_path = log_file.unwrap_or("coordkit.log");
        let logger = Logger::new(log_path)?;
        Ok(CoordKit {
            logger,
            config: GeometryConfig::default(),
            show_progress: false,
        })
    }

    /// Create an instance that keeps no log file
    pub fn without_log_file() -> Self {
        CoordKit {
            logger: Logger::disabled(),
            config: GeometryConfig::default(),
            show_progress: false,
        }
    }

    /// Replace the geometry configuration
    pub fn with_config(mut self, config: GeometryConfig) -> CoordResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Load the geometry configuration from a TOML file
    pub fn with_config_file(self, path: &str) -> CoordResult<Self> {
        info!("Loading geometry configuration from {}", path);
        let config = GeometryConfig::from_file(path)?;
        self.with_config(config)
    }

    /// Draw progress bars while exporting and rendering
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Convert three numbers and record the result in the log file
    pub fn convert(&self, mode: ConversionMode, a: f64, b: f64, c: f64) -> CoordResult<ConversionResult> {
        let result = coordinate::convert(mode, a, b, c)?;
        self.logger.log_conversion(mode.name(), (a, b, c), &result)?;
        Ok(result)
    }

    /// Parse three text fields, then convert them
    ///
    /// Text that is not a finite number fails with `InvalidNumber` before
    /// any conversion runs.
    pub fn convert_text(&self, mode: ConversionMode, a: &str, b: &str, c: &str) -> CoordResult<ConversionResult> {
        let (a, b, c) = parse_triple(a, b, c)?;
        self.convert(mode, a, b, c)
    }

    /// Build the solid for a coordinate system using this instance's configuration
    pub fn build_geometry(&self, system: CoordinateSystem, center: Point3D) -> CoordResult<Geometry> {
        let geometry = geometry::build_geometry_with(system, center, &self.config);
        self.logger.log_geometry(&geometry)?;
        Ok(geometry)
    }

    /// Write the solid's mesh to a file
    ///
    /// # Arguments
    /// * `geometry` - Solid to export
    /// * `output_path` - Destination file
    /// * `format` - Explicit format, or `None` to use the file extension
    pub fn export_mesh(&self, geometry: &Geometry, output_path: &str, format: Option<MeshFormat>) -> CoordResult<()> {
        let format = match format {
            Some(format) => format,
            None => MeshFormat::from_path(output_path)?,
        };

        MeshExporter::new(format)
            .with_progress(self.show_progress)
            .save_to_file(&geometry.mesh(), output_path)?;
        self.logger.log(&format!("Exported {} mesh to {}", format.name(), output_path))?;
        Ok(())
    }

    /// Render a PNG wireframe preview of the solid
    pub fn render_preview(&self, geometry: &Geometry, output_path: &str, size: u32) -> CoordResult<()> {
        PreviewRenderer::new(size)
            .with_progress(self.show_progress)
            .save(geometry, output_path)?;
        self.logger.log(&format!("Saved {}x{} preview to {}", size, size, output_path))?;
        Ok(())
    }
}
