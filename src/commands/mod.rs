//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod plot_command;

#[cfg(test)]
mod tests;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use plot_command::PlotCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::api::CoordKit;
use crate::errors::{CoordError, CoordResult};
use crate::utils::input_utils::parse_triple;

fn value_text<'m>(args: &'m ArgMatches, id: &str) -> CoordResult<&'m str> {
    args.get_one::<String>(id)
        .map(|s| s.as_str())
        .ok_or_else(|| CoordError::GenericError(format!("Missing value {}", id.to_uppercase())))
}

/// Read the three positional values as numbers
pub(crate) fn read_values(args: &ArgMatches) -> CoordResult<(f64, f64, f64)> {
    parse_triple(value_text(args, "a")?, value_text(args, "b")?, value_text(args, "c")?)
}

/// Command-line definition shared by the binary and the tests
pub fn build_cli() -> ClapCommand {
    let value_arg = |id: &'static str, index: usize, help: &'static str| {
        Arg::new(id)
            .help(help)
            .required(true)
            .index(index)
            .allow_negative_numbers(true)
    };

    ClapCommand::new("coordkit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Convert 3D points between Cartesian, spherical and cylindrical coordinates")
        .arg(value_arg("a", 1, "First value: x, r or ρ"))
        .arg(value_arg("b", 2, "Second value: y, θ or φ (degrees)"))
        .arg(value_arg("c", 3, "Third value: z or φ (degrees)"))
        .arg(
            Arg::new("convert")
                .long("convert")
                .help("Conversion mode (to-spherical, to-cylindrical, from-spherical, from-cylindrical)")
                .value_name("MODE")
                .conflicts_with("plot")
                .required(false),
        )
        .arg(
            Arg::new("plot")
                .short('p')
                .long("plot")
                .help("Build the solid for a coordinate system (cartesian, spherical, cylindrical)")
                .value_name("SYSTEM")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the mesh to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Mesh format (obj, csv, json, stl); defaults to the output extension")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("preview")
                .long("preview")
                .help("Render a PNG wireframe preview to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("preview-size")
                .long("preview-size")
                .help("Preview edge length in pixels")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the solid dimensions")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file path")
                .value_name("FILE")
                .default_value("coordkit.log")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct CoordkitCommandFactory;

impl CoordkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordkitCommandFactory
    }
}

impl Default for CoordkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for CoordkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.contains_id("convert") {
            Ok(Box::new(ConvertCommand::new(args, kit)?))
        } else if args.contains_id("plot") {
            Ok(Box::new(PlotCommand::new(args, kit)?))
        } else {
            Err(CoordError::GenericError(
                "Nothing to do: pass --convert <MODE> or --plot <SYSTEM>".to_string(),
            ))
        }
    }
}
