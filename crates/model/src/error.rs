//! Error types shared by every crate in the cleaner.
//!
//! Three failure families exist:
//! - configuration errors (bad age expression, bad regex), raised before any
//!   candidate is touched
//! - provider errors, raised by the collaborator that lists and deletes
//!   resources and propagated unchanged
//! - clean failures, which collect every per-candidate delete error of one
//!   `clean` pass instead of stopping at the first one

use crate::types::CandidateId;
use std::fmt;
use thiserror::Error;

/// Errors raised by a resource provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Reading or writing the provider's backing store failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The provider returned data the cleaner cannot interpret
    #[error("Malformed provider data: {0}")]
    Malformed(String),

    /// The resource to delete does not exist
    #[error("No {kind} with id {id}")]
    NotFound { kind: String, id: CandidateId },

    /// Any other backend failure (API, auth, network)
    #[error("Provider backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by the resource lifecycle.
#[derive(Error, Debug)]
pub enum CleanerError {
    /// The age expression does not match `<positive integer><d|w|m|y>`
    #[error("Invalid interval format '{input}': {reason}")]
    InvalidIntervalFormat { input: String, reason: String },

    /// A name pattern is not a valid regular expression
    #[error("Invalid pattern for --{option} '{pattern}': {source}")]
    InvalidPattern {
        option: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// One or more deletes failed during `clean`
    #[error("{0}")]
    Clean(CleanFailure),

    /// A lifecycle call arrived in a state it cannot move from
    #[error("Cannot {to} a resource that is already {from}")]
    InvalidTransition { from: String, to: String },

    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),
}

/// A single failed delete.
#[derive(Debug)]
pub struct DeleteFailure {
    pub id: CandidateId,
    pub name: String,
    pub error: ProviderError,
}

/// Outcome of a `clean` pass in which at least one delete failed.
///
/// `deleted` lists the ids that were removed before, after or alongside the
/// failures; nothing is rolled back.
#[derive(Debug)]
pub struct CleanFailure {
    pub deleted: Vec<CandidateId>,
    pub failures: Vec<DeleteFailure>,
}

impl CleanFailure {
    pub fn failed_ids(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.id.as_str()).collect()
    }
}

impl fmt::Display for CleanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} deletes failed",
            self.failures.len(),
            self.failures.len() + self.deleted.len()
        )?;
        for failure in &self.failures {
            write!(f, "; {} ({}): {}", failure.name, failure.id, failure.error)?;
        }
        Ok(())
    }
}

/// Convenience type alias for Results in the cleaner crates
pub type Result<T> = std::result::Result<T, CleanerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_failure_names_every_failed_candidate() {
        let failure = CleanFailure {
            deleted: vec!["a".to_string()],
            failures: vec![
                DeleteFailure {
                    id: "b".to_string(),
                    name: "web-02".to_string(),
                    error: ProviderError::Backend("quota".to_string()),
                },
                DeleteFailure {
                    id: "c".to_string(),
                    name: "web-03".to_string(),
                    error: ProviderError::NotFound {
                        kind: "server".to_string(),
                        id: "c".to_string(),
                    },
                },
            ],
        };

        let message = CleanerError::Clean(failure).to_string();
        assert!(message.starts_with("2 of 3 deletes failed"));
        assert!(message.contains("web-02 (b): Provider backend error: quota"));
        assert!(message.contains("web-03 (c): No server with id c"));
    }

    #[test]
    fn test_provider_error_converts() {
        let err: CleanerError = ProviderError::Backend("down".to_string()).into();
        assert!(matches!(err, CleanerError::Provider(ProviderError::Backend(_))));
        assert_eq!(err.to_string(), "Provider backend error: down");
    }
}
