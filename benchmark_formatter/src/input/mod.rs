//!
//! Benchmark report input.
//!

pub mod error;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::model::report::Report;

use self::error::Error as InputError;

///
/// Benchmark report input, that is a report read from a JSON file.
///
#[derive(Debug)]
pub struct Input {
    /// The parsed report.
    pub report: Report,
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        let json: serde_json::Value =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        let report = Report::try_from(json).map_err(|error| InputError::Shape {
            error,
            path: path.to_path_buf(),
        })?;
        Ok(Self { report })
    }
}

impl From<Input> for Report {
    fn from(input: Input) -> Self {
        input.report
    }
}
