//!
//! The reStructuredText benchmark report.
//!

pub mod benchmarks;
pub mod context;
pub mod list_table;


use crate::model::error::ShapeError;
use crate::model::report::Report;
use crate::policy::Policy;

///
/// The reStructuredText benchmark report.
///
#[derive(Debug, Default)]
pub struct Rst {
    /// The document text.
    pub content: String,
}

impl Rst {
    /// The document title.
    pub const TITLE: &'static str = "Benchmark Report";
    /// The context section title.
    pub const CONTEXT_TITLE: &'static str = "Context";
}

impl TryFrom<(&Report, &Policy)> for Rst {
    type Error = ShapeError;

    fn try_from((report, policy): (&Report, &Policy)) -> Result<Self, Self::Error> {
        let mut content = heading(Self::TITLE, '=');
        content.push_str(context::render(&report.context, Some(Self::CONTEXT_TITLE))?.as_str());
        content.push_str(benchmarks::render(report.benchmarks.as_slice(), policy)?.as_str());
        Ok(Self { content })
    }
}

///
/// Returns a section title underlined with `underline`, followed by an empty line.
///
pub fn heading(title: &str, underline: char) -> String {
    let underline = underline.to_string().repeat(title.chars().count());
    format!("{title}\n{underline}\n\n")
}
