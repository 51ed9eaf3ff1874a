//!
//! The benchmark report data model.
//!

pub mod benchmark;
pub mod context;
pub mod error;
pub mod report;

#[cfg(test)]
mod tests;
