//! The contract every resource kind implements.
//!
//! A driver moves each kind through `register → process → clean` without
//! knowing anything kind-specific. The two helpers at the bottom are the
//! fetch/filter and delete halves every concrete kind shares.

use model::{
    Candidate, CandidateId, CleanFailure, CleanerError, ConfigSurface, DeleteFailure,
    FilterConfig, Result,
};
use pipeline::{FilterPipeline, RunContext};
use provider::Provider;
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, info, warn};

/// Where a resource is in its lifecycle.
///
/// Transitions are linear: `Unregistered → Registered → Processed → Cleaned`.
/// `process` may repeat while `Processed`; nothing moves back from `Cleaned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LifecycleState {
    Unregistered,
    Registered,
    Processed,
    Cleaned,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LifecycleState::Unregistered => "unregistered",
            LifecycleState::Registered => "registered",
            LifecycleState::Processed => "processed",
            LifecycleState::Cleaned => "cleaned",
        };
        f.write_str(label)
    }
}

/// Ids removed by a fully successful `clean`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub deleted: Vec<CandidateId>,
}

/// Three-phase protocol shared by every resource kind.
pub trait ResourceLifecycle: Send {
    /// Name of the kind, also its subcommand on the command line
    fn kind(&self) -> &'static str;

    /// Declare the options this kind accepts.
    fn register(&mut self, config: &mut dyn ConfigSurface);

    /// Fetch candidates and narrow them, judging age against `context.now`.
    ///
    /// Replaces the target set from scratch. On error the target set is
    /// left empty.
    fn process_at(&mut self, config: &dyn ConfigSurface, context: RunContext) -> Result<()>;

    /// Fetch candidates and narrow them against the current time.
    fn process(&mut self, config: &dyn ConfigSurface) -> Result<()> {
        self.process_at(config, RunContext::capture())
    }

    /// Delete every remaining target and drain the target set.
    ///
    /// Called before `process`, the target set is empty and nothing is
    /// deleted. Every target is attempted; failures come back together as
    /// `CleanerError::Clean`.
    fn clean(&mut self) -> Result<CleanReport>;

    /// The current target set
    fn targets(&self) -> &[Candidate];

    fn state(&self) -> LifecycleState;
}

/// Fetch a kind's candidates and narrow them with `config`.
///
/// The configuration is compiled before the fetch, so a bad age or pattern
/// fails without ever touching the provider.
pub fn fetch_and_filter(
    provider: &dyn Provider,
    kind: &str,
    config: &FilterConfig,
    context: &RunContext,
) -> Result<Vec<Candidate>> {
    let pipeline = FilterPipeline::from_config(config)?;

    info!("Retrieving {} list from provider", kind);
    let candidates = provider.list_candidates(kind)?;
    debug!("Found {} {} candidates:", candidates.len(), kind);
    for candidate in &candidates {
        debug!("   *** {}", candidate.name);
    }

    let targets = pipeline.apply(candidates, context)?;
    debug!("{} {} candidates remaining:", targets.len(), kind);
    for target in &targets {
        debug!("   *** {}", target.name);
    }
    Ok(targets)
}

/// Delete `targets` by id, in parallel, attempting every one.
pub fn delete_all(
    provider: &dyn Provider,
    kind: &str,
    targets: Vec<Candidate>,
) -> Result<CleanReport> {
    let outcomes: Vec<_> = targets
        .into_par_iter()
        .map(|target| {
            let outcome = provider.delete_candidate(kind, &target.id);
            (target, outcome)
        })
        .collect();

    let mut deleted = Vec::new();
    let mut failures = Vec::new();
    for (target, outcome) in outcomes {
        match outcome {
            Ok(()) => {
                info!("Deleted {} {} ({})", kind, target.name, target.id);
                deleted.push(target.id);
            }
            Err(error) => {
                warn!("Failed to delete {} {} ({}): {}", kind, target.name, target.id, error);
                failures.push(DeleteFailure {
                    id: target.id,
                    name: target.name,
                    error,
                });
            }
        }
    }

    if failures.is_empty() {
        Ok(CleanReport { deleted })
    } else {
        Err(CleanerError::Clean(CleanFailure { deleted, failures }))
    }
}
