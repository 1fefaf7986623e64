//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

use crate::coordinate::ConversionResult;
use crate::geometry::Geometry;
use crate::utils::format_utils::format_point;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level this logger accepts
    level: Level,
    /// Whether records are echoed to the console
    echo: bool,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: Level::Info,
            echo: false,
        })
    }

    /// Logger that discards direct messages, for library use without a log file
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            level: Level::Info,
            echo: false,
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = &mut *guard {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs a conversion with its inputs
    ///
    /// # Arguments
    ///
    /// * `mode` - Name of the conversion mode
    /// * `inputs` - The three input values
    /// * `result` - The rounded result
    pub fn log_conversion(&self, mode: &str, inputs: (f64, f64, f64), result: &ConversionResult) -> io::Result<()> {
        self.log(&format!("Conversion {} of ({}, {}, {}):", mode, inputs.0, inputs.1, inputs.2))?;
        for (label, value) in result.labeled() {
            self.log(&format!("  {}: {}", label, value))?;
        }
        Ok(())
    }

    /// Logs a summary of a generated solid and its mesh size
    pub fn log_geometry(&self, geometry: &Geometry) -> io::Result<()> {
        let mesh = geometry.mesh();
        self.log(&format!("Geometry: {}", geometry.describe()))?;
        self.log(&format!(
            "  Mesh: {} vertices, {} faces",
            mesh.vertex_count(),
            mesh.face_count()
        ))?;
        if let Some((min, max)) = mesh.bounds() {
            self.log(&format!("  Bounds: {} to {}", format_point(&min), format_point(&max)))?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the global log file
    /// * `verbose` - Accept debug records and echo every record to the console
    pub fn init_global_logger(log_file: &str, verbose: bool) -> io::Result<()> {
        // Create a dedicated logger for the log crate
        let mut global_logger = Logger::new(log_file)?;
        let filter = if verbose {
            global_logger.level = Level::Debug;
            global_logger.echo = true;
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        // Set up the global logger - we'll ignore the SetLoggerError
        // since we only call this once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            // Logger was already set - this should not happen in normal usage
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(filter);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also print to console
            if self.echo || record.level() <= Level::Warn {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
