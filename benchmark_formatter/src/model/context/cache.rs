//!
//! CPU cache descriptor.
//!

use serde::Deserialize;

use crate::model::error::ShapeError;

///
/// CPU cache descriptor, an element of the context `caches` entry.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cache {
    /// Cache type, for example `Data`, `Instruction`, or `Unified`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Cache level.
    pub level: u64,
    /// Cache size in bytes.
    pub size: u64,
    /// Number of logical CPUs sharing the cache.
    pub num_sharing: u64,
}

impl Cache {
    ///
    /// Deserializes the cache descriptors from the context `caches` entry.
    ///
    pub fn parse_all(value: &serde_json::Value) -> Result<Vec<Self>, ShapeError> {
        let entries = value.as_array().ok_or(ShapeError::CachesNotAnArray)?;
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Self::deserialize(entry).map_err(|error| ShapeError::InvalidCache { index, error })
            })
            .collect()
    }

    ///
    /// Returns the cells of the cache table row.
    ///
    pub fn cells(&self) -> [String; 4] {
        [
            self.kind.clone(),
            self.level.to_string(),
            self.size.to_string(),
            self.num_sharing.to_string(),
        ]
    }
}
