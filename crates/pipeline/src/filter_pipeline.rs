//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern, and the constructor that
//! compiles a resolved `FilterConfig` into one.

use crate::context::RunContext;
use crate::filters::{AgeFilter, NameFilter};
use crate::traits::Filter;
use model::{parse_interval, Candidate, FilterConfig, Result};
use tracing::{debug, info};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AgeFilter::new(parse_interval("30d")?))
///     .add_filter(NameFilter::new(Some("web-.*"), None)?);
///
/// let survivors = pipeline.apply(candidates, &RunContext::capture())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Compile a resolved filter configuration.
    ///
    /// Every option is validated here, before any candidate is looked at:
    /// a bad age expression or pattern fails the whole pipeline.
    ///
    /// The age stage is only added when an age is configured. The name stage
    /// runs after it since a timestamp comparison is cheaper than a regex.
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let mut pipeline = Self::new();

        match &config.age {
            Some(age) => {
                let interval = parse_interval(age)?;
                info!("Filtering on minimum age {}", interval);
                pipeline = pipeline.add_filter(AgeFilter::new(interval));
            }
            None => info!("No age provided"),
        }

        let names = NameFilter::new(
            config.name_pattern.as_deref(),
            config.skip_name_pattern.as_deref(),
        )?;
        Ok(pipeline.add_filter(names))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &RunContext,
    ) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context)?;
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
