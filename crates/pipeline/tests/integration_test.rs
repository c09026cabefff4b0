//! Integration tests for the pipeline.
//!
//! These tests verify that the age and name stages work together on a
//! realistic fleet of servers.

use chrono::{TimeDelta, TimeZone, Utc};
use model::{Candidate, FilterConfig};
use pipeline::{FilterPipeline, RunContext};

fn context() -> RunContext {
    RunContext::at(Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap())
}

fn create_fleet() -> Vec<Candidate> {
    let now = context().now;
    vec![
        Candidate::new("1", "web-01", now - TimeDelta::days(40)),
        Candidate::new("2", "web-02", now - TimeDelta::days(5)),
        Candidate::new("3", "db-01", now - TimeDelta::days(40)),
        Candidate::new("4", "tmp-build", now - TimeDelta::days(400)),
        Candidate::new("5", "web", now - TimeDelta::days(90)),
        Candidate::new("6", "prod-build", now - TimeDelta::minutes(1)),
    ]
}

fn configs() -> Vec<FilterConfig> {
    vec![
        FilterConfig::new(),
        FilterConfig::new().with_age("30d"),
        FilterConfig::new().with_age("1y"),
        FilterConfig::new().with_name_pattern("web-.*"),
        FilterConfig::new().with_skip_name_pattern("tmp-.*"),
        FilterConfig::new()
            .with_age("2w")
            .with_name_pattern(".*-.*")
            .with_skip_name_pattern("db-.*"),
    ]
}

fn ids(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_output_is_ordered_subset_of_input() {
    let fleet = create_fleet();
    for config in configs() {
        let pipeline = FilterPipeline::from_config(&config).unwrap();
        let survivors = pipeline.apply(fleet.clone(), &context()).unwrap();

        // Every survivor appears in the input, in the same relative order
        let mut remaining = fleet.iter();
        for survivor in &survivors {
            assert!(
                remaining.any(|candidate| candidate == survivor),
                "{:?} produced a candidate not in the input or out of order",
                config
            );
        }
    }
}

#[test]
fn test_without_age_no_candidate_is_dropped_for_age() {
    let now = context().now;
    let fleet: Vec<Candidate> = [0i64, 1, 30, 10_000]
        .iter()
        .map(|days| Candidate::new(days.to_string(), "web-01", now - TimeDelta::days(*days)))
        .chain(std::iter::once(Candidate::new(
            "future",
            "web-01",
            now + TimeDelta::days(3),
        )))
        .collect();

    let pipeline = FilterPipeline::from_config(&FilterConfig::new().with_name_pattern("web-.*"))
        .unwrap();
    let survivors = pipeline.apply(fleet.clone(), &context()).unwrap();
    assert_eq!(survivors, fleet);
}

#[test]
fn test_without_name_options_no_candidate_is_dropped_for_name() {
    let fleet = create_fleet();
    let pipeline = FilterPipeline::from_config(&FilterConfig::new()).unwrap();

    let survivors = pipeline.apply(fleet.clone(), &context()).unwrap();
    assert_eq!(survivors, fleet);
}

#[test]
fn test_end_to_end_age_and_name() {
    let now = context().now;
    let fleet = vec![
        Candidate::new("1", "web-01", now - TimeDelta::days(40)),
        Candidate::new("2", "web-02", now - TimeDelta::days(5)),
        Candidate::new("3", "db-01", now - TimeDelta::days(40)),
    ];
    let config = FilterConfig::new().with_age("30d").with_name_pattern("web-.*");

    let pipeline = FilterPipeline::from_config(&config).unwrap();
    let survivors = pipeline.apply(fleet, &context()).unwrap();

    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].name, "web-01");
}

#[test]
fn test_combined_config() {
    let config = &configs()[5];
    let pipeline = FilterPipeline::from_config(config).unwrap();
    let survivors = pipeline.apply(create_fleet(), &context()).unwrap();

    // web-02 too young, db-01 skipped, web has no dash, prod-build too young
    assert_eq!(ids(&survivors), vec!["1", "4"]);
}
