//!
//! The benchmark report input tests.
//!

use super::error::Error;
use super::Input;
use crate::model::error::ShapeError;

fn read(contents: &str) -> Result<Input, Error> {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = directory.path().join("report.json");
    std::fs::write(path.as_path(), contents).expect("Failed to write the input file");
    Input::try_from(path.as_path())
}

#[test]
fn ok() {
    let input = read(r#"{ "context": { "num_cpus": 8 }, "benchmarks": [ { "family_index": 0 } ] }"#)
        .expect("Failed to read the report");
    assert_eq!(input.report.context.0.len(), 1);
    assert_eq!(input.report.benchmarks.len(), 1);
}

#[test]
fn error_empty_file() {
    let result = read("");
    assert!(matches!(result, Err(Error::Parsing { .. })));
}

#[test]
fn error_invalid_json() {
    let result = read(r#"{ "context": {"#);
    assert!(matches!(result, Err(Error::Parsing { .. })));
}

#[test]
fn error_missing_benchmarks() {
    let result = read(r#"{ "context": {} }"#);
    assert!(matches!(
        result,
        Err(Error::Shape {
            error: ShapeError::MissingSection { key: "benchmarks" },
            ..
        })
    ));
}

#[test]
fn error_reading() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let result = Input::try_from(directory.path().join("missing.json").as_path());
    assert!(matches!(result, Err(Error::Reading { .. })));
}
