//! # Model Crate
//!
//! Types shared by every part of the cleaner.
//!
//! ## Main Components
//!
//! - **types**: `Candidate` and the resolved `FilterConfig`
//! - **interval**: the age expression parser (`1d`, `2w`, `6m`, `1y`)
//! - **config**: the `ConfigSurface` resource kinds register options on
//! - **error**: `CleanerError` and `ProviderError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use model::{parse_interval, Candidate};
//!
//! let interval = parse_interval("30d")?;
//! let cutoff = interval.cutoff_from(chrono::Utc::now());
//! ```

pub mod config;
pub mod error;
pub mod interval;
pub mod types;

pub use config::{
    resolve_filter_config, ArgMap, ConfigSurface, OptionSpec, AGE_OPTION, NAME_OPTION,
    SKIP_NAME_OPTION,
};
pub use error::{CleanFailure, CleanerError, DeleteFailure, ProviderError, Result};
pub use interval::{parse_interval, Interval, IntervalUnit};
pub use types::{parse_timestamp, Candidate, CandidateId, FilterConfig};
