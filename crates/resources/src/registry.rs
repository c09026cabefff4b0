//! Kind-name → resource lookup used by the driver.

use crate::lifecycle::ResourceLifecycle;
use crate::server::ServerResource;
use model::{CleanerError, Result};
use provider::Provider;
use std::sync::Arc;

/// Every resource kind the cleaner knows about, in registration order.
#[derive(Default)]
pub struct ResourceRegistry {
    resources: Vec<Box<dyn ResourceLifecycle>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in kind sharing one provider.
    pub fn with_defaults(provider: Arc<dyn Provider>) -> Self {
        Self::new().add(ServerResource::new(provider))
    }

    /// Add a resource kind (builder pattern). A later kind with the same name
    /// replaces the earlier one.
    pub fn add(mut self, resource: impl ResourceLifecycle + 'static) -> Self {
        self.resources.retain(|existing| existing.kind() != resource.kind());
        self.resources.push(Box::new(resource));
        self
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn ResourceLifecycle>> {
        self.resources.iter_mut()
    }

    pub fn get_mut(&mut self, kind: &str) -> Result<&mut dyn ResourceLifecycle> {
        for resource in self.resources.iter_mut() {
            if resource.kind() == kind {
                return Ok(resource.as_mut());
            }
        }
        Err(CleanerError::UnknownResourceKind(kind.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provider::InMemoryProvider;

    #[test]
    fn test_defaults_contain_server() {
        let mut registry = ResourceRegistry::with_defaults(Arc::new(InMemoryProvider::new()));
        assert_eq!(registry.iter_mut().count(), 1);
        assert_eq!(registry.get_mut("server").unwrap().kind(), "server");
    }

    #[test]
    fn test_unknown_kind() {
        let mut registry = ResourceRegistry::with_defaults(Arc::new(InMemoryProvider::new()));
        let err = registry.get_mut("volume").err().unwrap();
        assert!(matches!(err, CleanerError::UnknownResourceKind(ref kind) if kind == "volume"));
    }

    #[test]
    fn test_add_replaces_same_kind() {
        let provider: Arc<dyn Provider> = Arc::new(InMemoryProvider::new());
        let mut registry = ResourceRegistry::with_defaults(provider.clone())
            .add(ServerResource::new(provider));
        let kinds: Vec<&str> = registry.iter_mut().map(|resource| resource.kind()).collect();
        assert_eq!(kinds, vec!["server"]);
    }
}
