//! # Cleaner
//!
//! Drives one resource kind through its lifecycle:
//! 1. Register every kind's options on the configuration surface
//! 2. Process the selected kind (fetch + filter)
//! 3. Clean it, unless this is a dry run
//! 4. Report what was targeted and what was deleted

use std::time::Instant;

use model::{Candidate, CandidateId, ConfigSurface, Result};
use tracing::info;

use crate::registry::ResourceRegistry;

/// Outcome of one driver run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub kind: String,
    pub dry_run: bool,
    /// The target set as narrowed by `process`
    pub targets: Vec<Candidate>,
    /// Ids deleted by `clean`; empty on a dry run
    pub deleted: Vec<CandidateId>,
}

/// Selects a resource kind and dispatches its lifecycle calls.
pub struct Cleaner {
    registry: ResourceRegistry,
}

impl Cleaner {
    pub fn new(registry: ResourceRegistry) -> Self {
        Self { registry }
    }

    /// Let every kind declare its options.
    pub fn register_all(&mut self, config: &mut dyn ConfigSurface) {
        for resource in self.registry.iter_mut() {
            resource.register(config);
        }
    }

    /// Process `kind` and, unless `dry_run`, clean it.
    ///
    /// A failed delete surfaces as `CleanerError::Clean` after every target
    /// has been attempted.
    pub fn run(
        &mut self,
        kind: &str,
        config: &dyn ConfigSurface,
        dry_run: bool,
    ) -> Result<RunSummary> {
        let start_time = Instant::now();
        let resource = self.registry.get_mut(kind)?;

        resource.process(config)?;
        let targets = resource.targets().to_vec();
        info!("Processed {}: {} targets", kind, targets.len());

        let deleted = if dry_run {
            info!("Dry run, skipping delete of {} {} targets", targets.len(), kind);
            Vec::new()
        } else {
            resource.clean()?.deleted
        };

        info!(
            "Finished {} in {:.2?} ({} deleted)",
            kind,
            start_time.elapsed(),
            deleted.len()
        );
        Ok(RunSummary {
            kind: kind.to_string(),
            dry_run,
            targets,
            deleted,
        })
    }
}
