//! Filter implementations for the target set.
//!
//! This module contains the concrete filters a resource kind composes into
//! a FilterPipeline.

pub mod age;
pub mod name;

// Re-export for convenience
pub use age::AgeFilter;
pub use name::{Matcher, NameFilter};
