//!
//! A single benchmark run record.
//!

use std::collections::BTreeSet;

use crate::model::error::ShapeError;
use crate::policy::Policy;

///
/// A single benchmark run record.
///
/// Fields keep the order of the input document.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Record(pub serde_json::Map<String, serde_json::Value>);

impl Record {
    /// The key of the harness-assigned benchmark family identifier.
    pub const FAMILY_INDEX_KEY: &'static str = "family_index";

    ///
    /// Returns the value of the field `key`.
    ///
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    ///
    /// Returns the family index of the record at `index` in the report.
    ///
    pub fn family_index(&self, index: usize) -> Result<u64, ShapeError> {
        let value = self
            .get(Self::FAMILY_INDEX_KEY)
            .ok_or(ShapeError::MissingFamilyIndex { index })?;
        value
            .as_u64()
            .ok_or_else(|| ShapeError::InvalidFamilyIndex {
                index,
                value: value.to_owned(),
            })
    }

    ///
    /// Iterates over the keys rendered as table columns, in the input order.
    ///
    pub fn columns<'a>(&'a self, policy: &'a Policy) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| !policy.is_excluded(key))
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Record {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map)
    }
}

///
/// Checks that every record has a family index and the same column set as the first one.
/// Returns the family indices of the records.
///
/// The first record defines the table header, so a divergent record would shift its cells.
///
pub fn validate(records: &[Record], policy: &Policy) -> Result<Vec<u64>, ShapeError> {
    let Some(first) = records.first() else {
        return Ok(vec![]);
    };
    let expected: BTreeSet<&str> = first.columns(policy).collect();

    let mut family_indices = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        family_indices.push(record.family_index(index)?);

        let found: BTreeSet<&str> = record.columns(policy).collect();
        if found != expected {
            return Err(ShapeError::DivergentColumns {
                index,
                expected: first.columns(policy).map(str::to_owned).collect(),
                found: record.columns(policy).map(str::to_owned).collect(),
            });
        }
    }
    Ok(family_indices)
}
