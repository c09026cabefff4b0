//! Core domain types for the cleaner.
//!
//! A `Candidate` is one resource instance returned by a provider. Only
//! `id`, `name` and `created` are interpreted; every other field the provider
//! reports is carried in `extra` and written back untouched.

use crate::error::ProviderError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Opaque provider identifier, used only for deletion
pub type CandidateId = String;

/// Naive layouts accepted for `created`, interpreted as UTC
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// One fetched resource instance eligible for filtering and deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created: DateTime<Utc>,
    /// Provider fields the cleaner does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Candidate {
    pub fn new(
        id: impl Into<CandidateId>,
        name: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created,
            extra: Map::new(),
        }
    }
}

/// Resolved filter options for one resource kind.
///
/// `None` means "no constraint of that kind", never "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub name_pattern: Option<String>,
    pub skip_name_pattern: Option<String>,
    pub age: Option<String>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = Some(pattern.into());
        self
    }

    pub fn with_skip_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.skip_name_pattern = Some(pattern.into());
        self
    }

    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }
}

/// Parse a provider timestamp and normalize it to UTC.
///
/// RFC 3339 values keep their offset and are converted; naive values carry no
/// zone and are taken to already be UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ProviderError> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ProviderError::Malformed(format!("unrecognized timestamp '{}'", raw)))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
