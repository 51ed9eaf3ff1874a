//!
//! The benchmark report.
//!

use crate::model::benchmark::Record;
use crate::model::context::Context;
use crate::model::error::ShapeError;

///
/// The benchmark report, as produced by the benchmarking harness.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    /// The harness metadata.
    pub context: Context,
    /// The benchmark runs.
    pub benchmarks: Vec<Record>,
}

impl Report {
    /// The key of the context section.
    pub const CONTEXT_KEY: &'static str = "context";
    /// The key of the benchmarks section.
    pub const BENCHMARKS_KEY: &'static str = "benchmarks";
}

impl TryFrom<serde_json::Value> for Report {
    type Error = ShapeError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let serde_json::Value::Object(mut sections) = value else {
            return Err(ShapeError::NotAnObject);
        };

        let context = match sections.remove(Self::CONTEXT_KEY) {
            Some(serde_json::Value::Object(context)) => Context::from(context),
            Some(_) => {
                return Err(ShapeError::InvalidSection {
                    key: Self::CONTEXT_KEY,
                    expected: "an object",
                })
            }
            None => {
                return Err(ShapeError::MissingSection {
                    key: Self::CONTEXT_KEY,
                })
            }
        };

        let benchmarks = match sections.remove(Self::BENCHMARKS_KEY) {
            Some(serde_json::Value::Array(benchmarks)) => benchmarks
                .into_iter()
                .enumerate()
                .map(|(index, record)| match record {
                    serde_json::Value::Object(record) => Ok(Record::from(record)),
                    _ => Err(ShapeError::RecordNotAnObject { index }),
                })
                .collect::<Result<Vec<Record>, ShapeError>>()?,
            Some(_) => {
                return Err(ShapeError::InvalidSection {
                    key: Self::BENCHMARKS_KEY,
                    expected: "an array",
                })
            }
            None => {
                return Err(ShapeError::MissingSection {
                    key: Self::BENCHMARKS_KEY,
                })
            }
        };

        Ok(Self {
            context,
            benchmarks,
        })
    }
}
