//!
//! The benchmark report model tests.
//!

use super::benchmark::Record;
use super::context::cache::Cache;
use super::context::Context;
use super::error::ShapeError;
use super::report::Report;
use crate::policy::Policy;

fn report(json: &str) -> Result<Report, ShapeError> {
    let value: serde_json::Value = serde_json::from_str(json).expect("Invalid test JSON");
    Report::try_from(value)
}

fn record(json: &str) -> Record {
    serde_json::from_str(json).expect("Invalid test JSON")
}

#[test]
fn ok_report_keeps_context_order() {
    let report = report(r#"{ "context": { "z": 1, "a": 2, "m": 3 }, "benchmarks": [] }"#)
        .expect("Failed to parse the report");
    let keys: Vec<&str> = report
        .context
        .entries()
        .map(|(key, _)| key.as_str())
        .collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn error_report_not_an_object() {
    assert!(matches!(report("[]"), Err(ShapeError::NotAnObject)));
}

#[test]
fn error_report_missing_context() {
    assert!(matches!(
        report(r#"{ "benchmarks": [] }"#),
        Err(ShapeError::MissingSection { key: "context" })
    ));
}

#[test]
fn error_report_benchmarks_not_an_array() {
    assert!(matches!(
        report(r#"{ "context": {}, "benchmarks": {} }"#),
        Err(ShapeError::InvalidSection {
            key: "benchmarks",
            ..
        })
    ));
}

#[test]
fn error_report_record_not_an_object() {
    assert!(matches!(
        report(r#"{ "context": {}, "benchmarks": [ { "family_index": 0 }, 42 ] }"#),
        Err(ShapeError::RecordNotAnObject { index: 1 })
    ));
}

#[test]
fn ok_caches() {
    let context: Context = serde_json::from_str(
        r#"{ "caches": [ { "type": "Instruction", "level": 1, "size": 65536, "num_sharing": 1 } ] }"#,
    )
    .expect("Invalid test JSON");
    let caches = context.caches().expect("Failed to parse the caches");
    assert_eq!(
        caches,
        vec![Cache {
            kind: "Instruction".to_owned(),
            level: 1,
            size: 65536,
            num_sharing: 1,
        }]
    );
}

#[test]
fn ok_caches_absent() {
    let context = Context::default();
    assert!(context.caches().expect("Failed to parse the caches").is_empty());
}

#[test]
fn error_cache_missing_field() {
    let context: Context = serde_json::from_str(
        r#"{ "caches": [
            { "type": "Data", "level": 1, "size": 32768, "num_sharing": 2 },
            { "type": "Data", "level": 2, "size": 32768 }
        ] }"#,
    )
    .expect("Invalid test JSON");
    assert!(matches!(
        context.caches(),
        Err(ShapeError::InvalidCache { index: 1, .. })
    ));
}

#[test]
fn error_caches_not_an_array() {
    let context: Context =
        serde_json::from_str(r#"{ "caches": "none" }"#).expect("Invalid test JSON");
    assert!(matches!(context.caches(), Err(ShapeError::CachesNotAnArray)));
}

#[test]
fn ok_family_index() {
    let record = record(r#"{ "family_index": 4 }"#);
    assert_eq!(record.family_index(0).expect("Invalid family index"), 4);
}

#[test]
fn error_family_index_missing() {
    let record = record(r#"{ "name": "x" }"#);
    assert!(matches!(
        record.family_index(7),
        Err(ShapeError::MissingFamilyIndex { index: 7 })
    ));
}

#[test]
fn error_family_index_negative() {
    let record = record(r#"{ "family_index": -1 }"#);
    assert!(matches!(
        record.family_index(0),
        Err(ShapeError::InvalidFamilyIndex { index: 0, .. })
    ));
}

#[test]
fn ok_columns_skip_excluded() {
    let policy = Policy::default();
    let record = record(
        r#"{ "name": "x", "family_index": 0, "threads": 8, "iterations": 10, "time_unit": "ns" }"#,
    );
    let columns: Vec<&str> = record.columns(&policy).collect();
    assert_eq!(columns, vec!["name", "iterations"]);
}

#[test]
fn ok_validate_same_columns_in_other_order() {
    let policy = Policy::default();
    let records = vec![
        record(r#"{ "name": "a", "family_index": 0, "real_time": 1.0 }"#),
        record(r#"{ "real_time": 2.0, "family_index": 1, "name": "b", "threads": 2 }"#),
    ];
    let family_indices = super::benchmark::validate(records.as_slice(), &policy)
        .expect("Records must be consistent");
    assert_eq!(family_indices, vec![0, 1]);
}

#[test]
fn error_validate_divergent_columns() {
    let policy = Policy::default();
    let records = vec![
        record(r#"{ "name": "a", "family_index": 0, "real_time": 1.0 }"#),
        record(r#"{ "name": "b", "family_index": 1, "real_time": 1.0 }"#),
        record(r#"{ "name": "c", "family_index": 2, "real_time": 1.0, "extra": true }"#),
    ];
    match super::benchmark::validate(records.as_slice(), &policy) {
        Err(ShapeError::DivergentColumns {
            index,
            expected,
            found,
        }) => {
            assert_eq!(index, 2);
            assert_eq!(expected, vec!["name", "real_time"]);
            assert_eq!(found, vec!["name", "real_time", "extra"]);
        }
        result => panic!("Unexpected validation result: {result:?}"),
    }
}

#[test]
fn error_validate_missing_family_index() {
    let policy = Policy::default();
    let records = vec![
        record(r#"{ "name": "a", "family_index": 0 }"#),
        record(r#"{ "name": "b" }"#),
    ];
    assert!(matches!(
        super::benchmark::validate(records.as_slice(), &policy),
        Err(ShapeError::MissingFamilyIndex { index: 1 })
    ));
}
