//!
//! Benchmark formatter output.
//!

pub mod rst;
pub mod value;

use std::path::Path;

use crate::model::error::ShapeError;
use crate::model::report::Report;
use crate::policy::Policy;

use self::rst::Rst;

///
/// The formatted benchmark report, fully built in memory.
///
#[derive(Debug)]
pub struct Output {
    /// The document text.
    pub content: String,
}

impl Output {
    ///
    /// Writes the document to `path`, replacing the file if it exists.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.content)
            .map_err(|error| anyhow::anyhow!("Benchmark report {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl TryFrom<(&Report, &Policy)> for Output {
    type Error = ShapeError;

    fn try_from((report, policy): (&Report, &Policy)) -> Result<Self, Self::Error> {
        Ok(Rst::try_from((report, policy))?.into())
    }
}

impl From<Rst> for Output {
    fn from(value: Rst) -> Self {
        Self {
            content: value.content,
        }
    }
}
