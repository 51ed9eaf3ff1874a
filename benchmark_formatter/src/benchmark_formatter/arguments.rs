//!
//! The benchmark formatter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark formatter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Input JSON benchmark report.
    pub input_path: PathBuf,

    /// Output reStructuredText file.
    pub output_path: PathBuf,
}
