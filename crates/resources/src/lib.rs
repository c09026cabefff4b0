//! Resource kinds and the driver that runs them.
//!
//! Each resource kind implements `ResourceLifecycle`; the `Cleaner` looks
//! kinds up by name in a `ResourceRegistry` and dispatches
//! `register → process → clean` without kind-specific logic.

pub mod cleaner;
pub mod lifecycle;
pub mod registry;
pub mod server;

pub use cleaner::{Cleaner, RunSummary};
pub use lifecycle::{CleanReport, LifecycleState, ResourceLifecycle};
pub use registry::ResourceRegistry;
pub use server::{ServerResource, SERVER_KIND};
