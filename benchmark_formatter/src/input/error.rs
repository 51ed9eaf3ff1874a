//!
//! Benchmark report reading error.
//!

use std::path::PathBuf;

use crate::model::error::ShapeError;

///
/// Benchmark report reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file cannot be read.
    #[error("Benchmark report {path:?} reading: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The input file path.
        path: PathBuf,
    },
    /// The input file is not valid JSON, an empty file included.
    #[error("Benchmark report {path:?} parsing: {error}")]
    Parsing {
        /// The underlying JSON error.
        error: serde_json::Error,
        /// The input file path.
        path: PathBuf,
    },
    /// The input file is valid JSON, but not a benchmark report.
    #[error("Benchmark report {path:?}: {error}")]
    Shape {
        /// The underlying shape error.
        error: ShapeError,
        /// The input file path.
        path: PathBuf,
    },
}
