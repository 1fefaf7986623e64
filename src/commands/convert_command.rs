//! Coordinate conversion command
//!
//! This module implements the command that converts three numbers
//! between coordinate systems and reports the rounded result.

use clap::ArgMatches;
use log::info;

use crate::api::CoordKit;
use crate::commands::command_traits::Command;
use crate::commands::read_values;
use crate::coordinate::{ConversionMode, ConversionResult};
use crate::errors::{CoordError, CoordResult};

/// Command for converting a point between coordinate systems
pub struct ConvertCommand<'a> {
    /// Direction of the conversion
    mode: ConversionMode,
    /// The three input values
    values: (f64, f64, f64),
    /// Application context
    kit: &'a CoordKit,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Application context
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Self> {
        let mode_name = args.get_one::<String>("convert")
            .ok_or_else(|| CoordError::GenericError("Missing conversion mode".to_string()))?;
        let mode = ConversionMode::from_string(mode_name)?;
        info!("Conversion mode: {}", mode.name());

        // Reject bad text before anything is converted
        let values = read_values(args)?;
        info!("Input values: {:?}", values);

        Ok(ConvertCommand::from_parts(mode, values, kit))
    }

    /// Create a command from already parsed inputs
    pub fn from_parts(mode: ConversionMode, values: (f64, f64, f64), kit: &'a CoordKit) -> Self {
        ConvertCommand { mode, values, kit }
    }

    /// Run the conversion without formatting it
    pub fn run(&self) -> CoordResult<ConversionResult> {
        let (a, b, c) = self.values;
        self.kit.convert(self.mode, a, b, c)
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> CoordResult<String> {
        let result = self.run()?;
        info!("Conversion {} successful", self.mode.name());
        Ok(result.to_string())
    }
}
