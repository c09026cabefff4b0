//! JSON inventory file provider.
//!
//! Format: one top-level object keyed by resource kind, each holding an array
//! of resources:
//!
//! ```json
//! {
//!   "server": [
//!     { "id": "4f1c", "name": "web-01", "created": "2024-01-05T10:00:00Z", "flavor": "m1.small" }
//!   ]
//! }
//! ```
//!
//! Only the requested kind is interpreted as resources. Deletes remove the
//! matching entry and write every other entry back as it was read.

use crate::Provider;
use model::{Candidate, ProviderError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, info};

type Inventory = BTreeMap<String, Value>;

/// Provider backed by a JSON file.
#[derive(Debug)]
pub struct InventoryProvider {
    path: PathBuf,
    /// Serializes read-modify-write cycles of concurrent deletes
    write_lock: Mutex<()>,
}

impl InventoryProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn malformed(&self, detail: impl std::fmt::Display) -> ProviderError {
        ProviderError::Malformed(format!("{}: {}", self.path.display(), detail))
    }

    fn load(&self) -> Result<Inventory, ProviderError> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| self.malformed(e))
    }

    fn store(&self, inventory: &Inventory) -> Result<(), ProviderError> {
        let content = serde_json::to_string_pretty(inventory).map_err(|e| self.malformed(e))?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, content)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl Provider for InventoryProvider {
    fn list_candidates(&self, kind: &str) -> Result<Vec<Candidate>, ProviderError> {
        info!("Reading {} inventory from {}", kind, self.path.display());
        let mut inventory = self.load()?;
        let candidates: Vec<Candidate> = match inventory.remove(kind) {
            Some(entries) => serde_json::from_value(entries)
                .map_err(|e| self.malformed(format!("{}: {}", kind, e)))?,
            None => Vec::new(),
        };
        debug!("Inventory lists {} {} resources", candidates.len(), kind);
        Ok(candidates)
    }

    fn delete_candidate(&self, kind: &str, id: &str) -> Result<(), ProviderError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let not_found = || ProviderError::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        };

        let mut inventory = self.load()?;
        let entries = match inventory.get_mut(kind) {
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(self.malformed(format!("{} is not an array", kind))),
            None => return Err(not_found()),
        };
        let before = entries.len();
        entries.retain(|entry| entry.get("id").and_then(Value::as_str) != Some(id));
        if entries.len() == before {
            return Err(not_found());
        }

        self.store(&inventory)?;
        debug!("Removed {} {} from {}", kind, id, self.path.display());
        Ok(())
    }
}
