//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a target set.

use crate::context::RunContext;
use model::{Candidate, Result};

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Contract
/// - A filter only removes candidates; it never adds or reorders them
/// - Filters are pure predicates over one candidate, so their relative order
///   does not change the final set
/// - `Send + Sync` allows filters to be shared with concurrent drivers
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - Per-run state, including the single `now` snapshot
    fn apply(&self, candidates: Vec<Candidate>, context: &RunContext) -> Result<Vec<Candidate>>;
}
