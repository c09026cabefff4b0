//! Filter that keeps resources at least a minimum age.
//!
//! A resource qualifies when its creation instant is at or before
//! `now - interval`, i.e. it is *at least* that old.

use crate::context::RunContext;
use crate::traits::Filter;
use model::{Candidate, Interval, Result};
use tracing::debug;

/// Removes candidates younger than the configured interval.
///
/// ## Algorithm
/// 1. cutoff = context.now - interval
/// 2. Keep candidates with `created <= cutoff`
/// 3. If the cutoff falls before the earliest representable instant, nothing
///    can be old enough and every candidate is removed
pub struct AgeFilter {
    interval: Interval,
}

impl AgeFilter {
    pub fn new(interval: Interval) -> Self {
        Self { interval }
    }
}

impl Filter for AgeFilter {
    fn name(&self) -> &str {
        "AgeFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &RunContext) -> Result<Vec<Candidate>> {
        let Some(cutoff) = self.interval.cutoff_from(context.now) else {
            debug!("Age {} reaches past the earliest instant, nothing qualifies", self.interval);
            return Ok(Vec::new());
        };
        debug!("Working with age {} (cutoff {})", self.interval, cutoff);

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                let old_enough = candidate.created <= cutoff;
                debug!(
                    "Candidate {} created {} old enough: {}",
                    candidate.name, candidate.created, old_enough
                );
                old_enough
            })
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};
    use model::{parse_interval, IntervalUnit};

    fn context() -> RunContext {
        RunContext::at(Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap())
    }

    fn aged(id: &str, days: i64) -> Candidate {
        Candidate::new(id, id, context().now - TimeDelta::days(days))
    }

    #[test]
    fn test_age_filter_keeps_old_enough() {
        let candidates = vec![aged("a", 40), aged("b", 5), aged("c", 31)];

        let filter = AgeFilter::new(parse_interval("30d").unwrap());
        let filtered = filter.apply(candidates, &context()).unwrap();

        let ids: Vec<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_age_filter_boundary_is_inclusive() {
        let candidates = vec![
            aged("exact", 30),
            Candidate::new(
                "just-under",
                "just-under",
                context().now - TimeDelta::days(30) + TimeDelta::seconds(1),
            ),
        ];

        let filter = AgeFilter::new(Interval::new(30, IntervalUnit::Day));
        let filtered = filter.apply(candidates, &context()).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "exact");
    }

    #[test]
    fn test_age_filter_unrepresentable_cutoff_removes_all() {
        let candidates = vec![aged("a", 10_000)];

        let filter = AgeFilter::new(Interval::new(u32::MAX, IntervalUnit::Year));
        let filtered = filter.apply(candidates, &context()).unwrap();

        assert!(filtered.is_empty());
    }
}
