//! Filtering pipeline for cleanup candidates.
//!
//! This crate provides:
//! - Filter trait and the age/name filter implementations
//! - FilterPipeline for composing filters
//! - RunContext, the per-run snapshot of "now"
//!
//! ## Architecture
//! A resource kind fetches its candidates, then narrows them in stages:
//! 1. AgeFilter drops candidates younger than the configured age
//! 2. NameFilter drops names that hit the skip pattern or miss the name pattern
//!
//! Stages only remove candidates and never reorder them. They compose by
//! logical AND.
//!
//! ## Example Usage
//! ```ignore
//! use model::FilterConfig;
//! use pipeline::{FilterPipeline, RunContext};
//!
//! let config = FilterConfig::new().with_age("30d").with_name_pattern("web-.*");
//! let pipeline = FilterPipeline::from_config(&config)?;
//! let targets = pipeline.apply(candidates, &RunContext::capture())?;
//! ```

pub mod context;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use context::RunContext;
pub use filter_pipeline::FilterPipeline;
pub use filters::{AgeFilter, Matcher, NameFilter};
pub use traits::Filter;
