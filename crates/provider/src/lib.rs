//! # Provider Crate
//!
//! The boundary between the cleaner and the place resources actually live.
//!
//! ## Components
//!
//! ### `Provider` trait
//! Lists every candidate of a resource kind and deletes one by id. Retries,
//! authentication and transport belong to implementations, never to callers.
//!
//! ### `InMemoryProvider`
//! Candidates held in memory. Records every successful delete, which makes it
//! the provider of choice for tests and rehearsals.
//!
//! ### `InventoryProvider`
//! A JSON inventory file on disk, re-read on every listing and rewritten on
//! every delete.
//!
//! ## Example Usage
//!
//! ```ignore
//! use provider::{InventoryProvider, Provider};
//!
//! let provider = InventoryProvider::new("inventory.json");
//! for server in provider.list_candidates("server")? {
//!     println!("{} {}", server.id, server.name);
//! }
//! ```

pub mod inventory;
pub mod memory;

pub use inventory::InventoryProvider;
pub use memory::InMemoryProvider;

use model::{Candidate, ProviderError};

/// Source and sink of cloud resources.
///
/// `Send + Sync` so one provider can be shared by every resource kind and
/// driven from parallel deletes.
pub trait Provider: Send + Sync {
    /// Full current set of resources of one kind.
    fn list_candidates(&self, kind: &str) -> Result<Vec<Candidate>, ProviderError>;

    /// Delete one resource by identifier.
    fn delete_candidate(&self, kind: &str, id: &str) -> Result<(), ProviderError>;
}
