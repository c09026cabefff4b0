use anyhow::{Context, Result};
use model::{ArgMap, CleanerError};
use provider::InventoryProvider;
use resources::{Cleaner, ResourceRegistry};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

mod config;
mod deferred;
mod output;

use config::{build_command, global_settings, resolve_kind};
use deferred::DeferredProvider;

/// cloud-cleaner - delete stale cloud resources
fn main() -> Result<ExitCode> {
    // Resource kinds shape the command line, so they exist before parsing
    let provider = Arc::new(DeferredProvider::default());
    let mut cleaner = Cleaner::new(ResourceRegistry::with_defaults(provider.clone()));
    let mut args = ArgMap::new();
    cleaner.register_all(&mut args);

    let matches = build_command(&args).get_matches();
    let settings = global_settings(&matches);

    // Initialize tracing
    let default_level = if settings.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Using inventory {}", settings.inventory.display());
    provider.install(InventoryProvider::new(settings.inventory.clone()));

    let kind = resolve_kind(&mut args, &matches)?;
    match cleaner.run(&kind, &args, settings.dry_run) {
        Ok(summary) => {
            output::print_summary(&summary);
            Ok(ExitCode::SUCCESS)
        }
        Err(CleanerError::Clean(failure)) => {
            output::print_failures(&kind, &failure);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).with_context(|| format!("Failed to clean {} resources", kind)),
    }
}
