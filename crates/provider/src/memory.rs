//! In-memory provider.

use crate::Provider;
use model::{Candidate, CandidateId, ProviderError};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Holds candidates per resource kind and records deletes.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    resources: Mutex<HashMap<String, Vec<Candidate>>>,
    deleted: Mutex<Vec<(String, CandidateId)>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a resource kind (builder pattern). Replaces any existing set.
    pub fn with_candidates(self, kind: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        lock(&self.resources).insert(kind.into(), candidates);
        self
    }

    pub fn insert(&self, kind: impl Into<String>, candidate: Candidate) {
        lock(&self.resources)
            .entry(kind.into())
            .or_default()
            .push(candidate);
    }

    /// Candidates of a kind that have not been deleted
    pub fn remaining(&self, kind: &str) -> Vec<Candidate> {
        lock(&self.resources).get(kind).cloned().unwrap_or_default()
    }

    /// Every successful delete as `(kind, id)`, in completion order
    pub fn deleted(&self) -> Vec<(String, CandidateId)> {
        lock(&self.deleted).clone()
    }
}

impl Provider for InMemoryProvider {
    fn list_candidates(&self, kind: &str) -> Result<Vec<Candidate>, ProviderError> {
        let candidates = self.remaining(kind);
        debug!("Listed {} {} candidates from memory", candidates.len(), kind);
        Ok(candidates)
    }

    fn delete_candidate(&self, kind: &str, id: &str) -> Result<(), ProviderError> {
        let mut resources = lock(&self.resources);
        let not_found = || ProviderError::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        };
        let candidates = resources.get_mut(kind).ok_or_else(not_found)?;
        let position = candidates
            .iter()
            .position(|candidate| candidate.id == id)
            .ok_or_else(not_found)?;
        candidates.remove(position);
        drop(resources);

        lock(&self.deleted).push((kind.to_string(), id.to_string()));
        debug!("Deleted {} {} from memory", kind, id);
        Ok(())
    }
}

/// A panic while holding the lock leaves plain data behind, so keep using it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn server(id: &str, name: &str) -> Candidate {
        Candidate::new(id, name, Utc::now())
    }

    #[test]
    fn test_list_unknown_kind_is_empty() {
        let provider = InMemoryProvider::new();
        assert!(provider.list_candidates("server").unwrap().is_empty());
    }

    #[test]
    fn test_delete_removes_and_records() {
        let provider = InMemoryProvider::new()
            .with_candidates("server", vec![server("1", "web-01"), server("2", "web-02")]);

        provider.delete_candidate("server", "1").unwrap();

        let remaining = provider.list_candidates("server").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "2");
        assert_eq!(provider.deleted(), vec![("server".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let provider = InMemoryProvider::new();
        provider.insert("server", server("1", "web-01"));

        let err = provider.delete_candidate("server", "9").unwrap_err();
        assert!(matches!(err, ProviderError::NotFound { ref id, .. } if id == "9"));

        let err = provider.delete_candidate("volume", "1").unwrap_err();
        assert!(matches!(err, ProviderError::NotFound { ref kind, .. } if kind == "volume"));
        assert!(provider.deleted().is_empty());
    }
}
