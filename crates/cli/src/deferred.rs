//! A provider chosen after the command line is parsed.
//!
//! Resource kinds are built before parsing because their registrations shape
//! the command line, but the backing provider depends on parsed flags.

use model::{Candidate, ProviderError};
use provider::Provider;
use std::sync::OnceLock;

#[derive(Default)]
pub struct DeferredProvider {
    inner: OnceLock<Box<dyn Provider>>,
}

impl DeferredProvider {
    /// Install the real provider. Only the first call has any effect.
    pub fn install(&self, provider: impl Provider + 'static) -> bool {
        self.inner.set(Box::new(provider)).is_ok()
    }

    fn get(&self) -> Result<&dyn Provider, ProviderError> {
        self.inner
            .get()
            .map(|provider| provider.as_ref())
            .ok_or_else(|| ProviderError::Backend("no provider configured".to_string()))
    }
}

impl Provider for DeferredProvider {
    fn list_candidates(&self, kind: &str) -> Result<Vec<Candidate>, ProviderError> {
        self.get()?.list_candidates(kind)
    }

    fn delete_candidate(&self, kind: &str, id: &str) -> Result<(), ProviderError> {
        self.get()?.delete_candidate(kind, id)
    }
}
