//!
//! Benchmark report shape error.
//!

///
/// The report is valid JSON, but its structure does not match a benchmark report.
///
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// The top-level value is not an object.
    #[error("The benchmark report must be a JSON object")]
    NotAnObject,
    /// A mandatory top-level section is missing.
    #[error("The benchmark report has no `{key}` section")]
    MissingSection {
        /// The section key.
        key: &'static str,
    },
    /// A top-level section has an unexpected type.
    #[error("The `{key}` section of the benchmark report must be {expected}")]
    InvalidSection {
        /// The section key.
        key: &'static str,
        /// The expected JSON type description.
        expected: &'static str,
    },
    /// The context `caches` entry is not an array.
    #[error("The context `caches` entry must be an array")]
    CachesNotAnArray,
    /// A cache descriptor is missing a field or has a field of a wrong type.
    #[error("Cache descriptor #{index}: {error}")]
    InvalidCache {
        /// The cache descriptor index.
        index: usize,
        /// The underlying deserialization error.
        error: serde_json::Error,
    },
    /// A benchmark record is not an object.
    #[error("Benchmark #{index} must be a JSON object")]
    RecordNotAnObject {
        /// The benchmark record index.
        index: usize,
    },
    /// A benchmark record has no `family_index` field.
    #[error("Benchmark #{index} has no `family_index` field")]
    MissingFamilyIndex {
        /// The benchmark record index.
        index: usize,
    },
    /// A benchmark record has a `family_index` which is not a non-negative integer.
    #[error("Benchmark #{index} has an invalid `family_index` value `{value}`")]
    InvalidFamilyIndex {
        /// The benchmark record index.
        index: usize,
        /// The offending value.
        value: serde_json::Value,
    },
    /// A benchmark record's column set differs from the first record's one.
    #[error(
        "Benchmark #{index} has columns [{}], but the table header expects [{}]",
        found.join(", "),
        expected.join(", ")
    )]
    DivergentColumns {
        /// The benchmark record index.
        index: usize,
        /// The columns of the first record.
        expected: Vec<String>,
        /// The columns of the divergent record.
        found: Vec<String>,
    },
    /// A benchmark name is not a string.
    #[error("Benchmark #{index} has a non-string `{key}` value `{value}`")]
    InvalidName {
        /// The benchmark record index.
        index: usize,
        /// The column key.
        key: String,
        /// The offending value.
        value: serde_json::Value,
    },
    /// A benchmark time measurement is not a number.
    #[error("Benchmark #{index} has a non-numeric `{key}` value `{value}`")]
    InvalidTime {
        /// The benchmark record index.
        index: usize,
        /// The column key.
        key: String,
        /// The offending value.
        value: serde_json::Value,
    },
}
