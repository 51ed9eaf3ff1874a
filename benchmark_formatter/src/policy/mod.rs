//!
//! The benchmarks table column policy.
//!

pub mod substitution;


use std::collections::BTreeSet;

use self::substitution::Substitution;

///
/// The benchmarks table column policy.
///
/// Decides which record keys become columns, how their headers are labeled,
/// and how benchmark names and time measurements are rendered.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Keys never rendered as columns.
    pub excluded: BTreeSet<String>,
    /// Header label substitutions, applied in order.
    pub substitutions: Vec<Substitution>,
    /// The key holding the benchmark name.
    pub name_key: String,
    /// Prefix stripped from benchmark names.
    pub name_prefix: String,
    /// Benchmark names are cut at the first occurrence of this marker.
    pub name_terminator: String,
    /// Keys holding time measurements.
    pub time_keys: Vec<String>,
    /// Number of digits after the decimal point of time measurements.
    pub time_precision: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            excluded: [
                "family_index",
                "per_family_instance_index",
                "run_name",
                "run_type",
                "repetitions",
                "repetition_index",
                "threads",
                "time_unit",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            substitutions: vec![
                Substitution::new("name", "Benchmark"),
                Substitution::new("real_time", "Real Time (\u{b5}s)"),
                Substitution::new("cpu_time", "CPU Time (\u{b5}s)"),
                Substitution::new("iterations", "Iterations"),
            ],
            name_key: "name".to_owned(),
            name_prefix: "OASValidatorPerf/".to_owned(),
            name_terminator: "/min_time".to_owned(),
            time_keys: vec!["real_time".to_owned(), "cpu_time".to_owned()],
            time_precision: 3,
        }
    }
}

impl Policy {
    ///
    /// Whether the record key `key` is never rendered as a column.
    ///
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded.contains(key)
    }

    ///
    /// Whether the record key `key` holds a time measurement.
    ///
    pub fn is_time(&self, key: &str) -> bool {
        self.time_keys.iter().any(|time_key| time_key == key)
    }

    ///
    /// Returns the header label of the column `key`.
    ///
    pub fn label(&self, key: &str) -> String {
        self.substitutions
            .iter()
            .fold(key.to_owned(), |label, substitution| {
                substitution.apply(label.as_str())
            })
    }

    ///
    /// Returns the display form of a benchmark name.
    ///
    pub fn trim_name<'a>(&self, name: &'a str) -> &'a str {
        let name = name
            .strip_prefix(self.name_prefix.as_str())
            .unwrap_or(name);
        if self.name_terminator.is_empty() {
            return name;
        }
        match name.find(self.name_terminator.as_str()) {
            Some(position) => &name[..position],
            None => name,
        }
    }

    ///
    /// Formats a time measurement.
    ///
    pub fn format_time(&self, time: f64) -> String {
        format!("{time:.precision$}", precision = self.time_precision)
    }
}
