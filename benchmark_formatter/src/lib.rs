//!
//! The benchmark formatter library.
//!

pub mod input;
pub mod model;
pub mod output;
pub mod policy;

pub use crate::input::error::Error as InputError;
pub use crate::input::Input;
pub use crate::model::benchmark::Record as BenchmarkRecord;
pub use crate::model::context::cache::Cache as CacheDescriptor;
pub use crate::model::context::Context;
pub use crate::model::error::ShapeError;
pub use crate::model::report::Report;
pub use crate::output::rst::Rst;
pub use crate::output::Output;
pub use crate::policy::substitution::Substitution;
pub use crate::policy::Policy as ColumnPolicy;
