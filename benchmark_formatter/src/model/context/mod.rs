//!
//! The benchmarking context, that is the harness metadata of a report.
//!

pub mod cache;

use self::cache::Cache;
use crate::model::error::ShapeError;

///
/// The benchmarking context.
///
/// Entries keep the order of the input document.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Context(pub serde_json::Map<String, serde_json::Value>);

impl Context {
    /// The key of the entry holding the CPU cache descriptors.
    pub const CACHES_KEY: &'static str = "caches";

    ///
    /// Iterates over the context entries in the input order.
    ///
    pub fn entries(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.iter()
    }

    ///
    /// Returns the CPU cache descriptors, or an empty list if there is no `caches` entry.
    ///
    pub fn caches(&self) -> Result<Vec<Cache>, ShapeError> {
        match self.0.get(Self::CACHES_KEY) {
            Some(value) => Cache::parse_all(value),
            None => Ok(vec![]),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Context {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map)
    }
}
