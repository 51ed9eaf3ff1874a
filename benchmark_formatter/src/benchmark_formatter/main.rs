//!
//! The benchmark formatter binary.
//!

pub(crate) mod arguments;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    run(arguments.input_path.as_path(), arguments.output_path.as_path())?;
    println!("{}", confirmation(arguments.output_path.as_path()));
    Ok(())
}

///
/// Converts the report at `input_path` and writes the document to `output_path`.
///
pub(crate) fn run(input_path: &Path, output_path: &Path) -> anyhow::Result<()> {
    let policy = benchmark_formatter::ColumnPolicy::default();

    let report: benchmark_formatter::Report =
        benchmark_formatter::Input::try_from(input_path)?.into();
    if report.benchmarks.is_empty() {
        eprintln!(
            "{} Input file {input_path:?} contains no benchmarks, the benchmarks table will be omitted.",
            "Warning:".bright_yellow(),
        );
    }

    let output = benchmark_formatter::Output::try_from((&report, &policy))?;
    output.write_to_file(output_path)
}

///
/// The line printed after the document has been written.
///
pub(crate) fn confirmation(output_path: &Path) -> String {
    format!("RST document generated and saved as {}.", output_path.display())
}
