//! Per-run filtering context.

use chrono::{DateTime, Utc};

/// State shared by every filter during one `process` call.
///
/// `now` is captured once so every candidate is judged against the same
/// cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    pub now: DateTime<Utc>,
}

impl RunContext {
    /// Snapshot the current UTC time.
    pub fn capture() -> Self {
        Self { now: Utc::now() }
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}
