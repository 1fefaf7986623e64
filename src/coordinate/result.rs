//! Labeled conversion output

use std::fmt;

use super::rounding::round_triple;
use super::system::CoordinateSystem;
use crate::utils::format_utils::format_component;

/// A rounded triple tagged with the system it is expressed in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    /// System of the components
    pub system: CoordinateSystem,
    /// Components, each rounded to four decimal places
    pub components: [f64; 3],
}

impl ConversionResult {
    /// Build a result, rounding each component
    pub fn new(system: CoordinateSystem, values: (f64, f64, f64)) -> Self {
        let (a, b, c) = round_triple(values);
        ConversionResult {
            system,
            components: [a, b, c],
        }
    }

    /// Components as a tuple
    pub fn values(&self) -> (f64, f64, f64) {
        (self.components[0], self.components[1], self.components[2])
    }

    /// Component labels paired with their values
    pub fn labeled(&self) -> Vec<(&'static str, f64)> {
        self.system
            .labels()
            .iter()
            .copied()
            .zip(self.components.iter().copied())
            .collect()
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.system.title())?;
        for (label, value) in self.labeled() {
            write!(f, "\n{}: {}", label, format_component(value))?;
        }
        Ok(())
    }
}
