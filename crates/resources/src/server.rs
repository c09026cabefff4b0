//! The `server` resource kind.
//!
//! ## Algorithm
//! `process`:
//! 1. Resolve `--name`, `--skip-name` and `--age` into a FilterConfig
//! 2. Fetch every server from the provider
//! 3. Keep servers at least `--age` old (no age: keep all)
//! 4. Keep servers whose name passes the name filter
//!
//! `clean` deletes each remaining server by id.

use crate::lifecycle::{
    delete_all, fetch_and_filter, CleanReport, LifecycleState, ResourceLifecycle,
};
use model::{
    resolve_filter_config, Candidate, CleanerError, ConfigSurface, OptionSpec, Result,
    AGE_OPTION, NAME_OPTION, SKIP_NAME_OPTION,
};
use pipeline::RunContext;
use provider::Provider;
use std::sync::Arc;
use tracing::{info, instrument};

pub const SERVER_KIND: &str = "server";

const SERVER_OPTIONS: [OptionSpec; 3] = [
    OptionSpec::new(NAME_OPTION, 'n', "Regex to match the name of the servers"),
    OptionSpec::new(SKIP_NAME_OPTION, 's', "Regex to match for servers to ignore"),
    OptionSpec::new(AGE_OPTION, 'a', "Minimum age (1d, 2w, 6m, 1y)"),
];

/// Virtual servers.
pub struct ServerResource {
    /// Shared with every other resource kind
    provider: Arc<dyn Provider>,
    targets: Vec<Candidate>,
    state: LifecycleState,
}

impl ServerResource {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            targets: Vec::new(),
            state: LifecycleState::Unregistered,
        }
    }
}

impl ResourceLifecycle for ServerResource {
    fn kind(&self) -> &'static str {
        SERVER_KIND
    }

    fn register(&mut self, config: &mut dyn ConfigSurface) {
        for option in SERVER_OPTIONS {
            config.register_option(SERVER_KIND, option);
        }
        if self.state == LifecycleState::Unregistered {
            self.state = LifecycleState::Registered;
        }
    }

    #[instrument(skip(self, config, context), fields(kind = SERVER_KIND))]
    fn process_at(&mut self, config: &dyn ConfigSurface, context: RunContext) -> Result<()> {
        if self.state == LifecycleState::Cleaned {
            return Err(CleanerError::InvalidTransition {
                from: self.state.to_string(),
                to: "process".to_string(),
            });
        }

        // Previous narrowing is discarded, never compounded
        self.targets.clear();
        let filters = resolve_filter_config(config);
        self.targets = fetch_and_filter(self.provider.as_ref(), SERVER_KIND, &filters, &context)?;
        self.state = LifecycleState::Processed;

        info!("{} servers selected for deletion", self.targets.len());
        Ok(())
    }

    #[instrument(skip(self), fields(kind = SERVER_KIND, targets = self.targets.len()))]
    fn clean(&mut self) -> Result<CleanReport> {
        let targets = std::mem::take(&mut self.targets);
        self.state = LifecycleState::Cleaned;

        info!("Deleting {} servers", targets.len());
        delete_all(self.provider.as_ref(), SERVER_KIND, targets)
    }

    fn targets(&self) -> &[Candidate] {
        &self.targets
    }

    fn state(&self) -> LifecycleState {
        self.state
    }
}
