//! Filter on resource names with an inclusion and an exclusion pattern.
//!
//! Both patterns must match the *whole* name: `web-.*` accepts `web-01` but
//! not `old-web-01`.

use crate::context::RunContext;
use crate::traits::Filter;
use model::{Candidate, CleanerError, Result, NAME_OPTION, SKIP_NAME_OPTION};
use regex::Regex;
use regex_syntax::hir::{Hir, Look};
use tracing::debug;

/// A full-string matcher, or a constant answer when no pattern was given.
#[derive(Debug, Clone)]
pub enum Matcher {
    Always(bool),
    Pattern(Regex),
}

impl Matcher {
    /// Compile `pattern` for full-string matching.
    ///
    /// Anchors are added to the parsed pattern rather than its text, so inline
    /// flags and `(?x)` comments cannot leak into the anchoring.
    pub fn compile(option: &str, pattern: &str) -> Result<Self> {
        let invalid = |source| CleanerError::InvalidPattern {
            option: option.to_string(),
            pattern: pattern.to_string(),
            source,
        };
        Regex::new(pattern).map_err(invalid)?;
        let hir = regex_syntax::Parser::new()
            .parse(pattern)
            .map_err(|e| invalid(regex::Error::Syntax(e.to_string())))?;
        let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
        let regex = Regex::new(&anchored.to_string()).map_err(invalid)?;
        Ok(Matcher::Pattern(regex))
    }

    pub fn full_match(&self, name: &str) -> bool {
        match self {
            Matcher::Always(answer) => *answer,
            Matcher::Pattern(regex) => regex.is_match(name),
        }
    }
}

/// Decides per-candidate name admission.
///
/// `accepts(name) = !skip.full_match(name) && name.full_match(name)`
///
/// Without a skip pattern nothing is skipped; without a name pattern every
/// name is wanted.
#[derive(Debug, Clone)]
pub struct NameFilter {
    skip: Matcher,
    name: Matcher,
}

impl NameFilter {
    /// Build the filter, failing fast on a malformed pattern.
    pub fn new(name_pattern: Option<&str>, skip_pattern: Option<&str>) -> Result<Self> {
        let name = match name_pattern {
            Some(pattern) => Matcher::compile(NAME_OPTION, pattern)?,
            None => Matcher::Always(true),
        };
        let skip = match skip_pattern {
            Some(pattern) => Matcher::compile(SKIP_NAME_OPTION, pattern)?,
            None => Matcher::Always(false),
        };
        Ok(Self { skip, name })
    }

    pub fn accepts(&self, name: &str) -> bool {
        !self.skip.full_match(name) && self.name.full_match(name)
    }
}

impl Filter for NameFilter {
    fn name(&self) -> &str {
        "NameFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _context: &RunContext) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                let accepted = self.accepts(&candidate.name);
                debug!("Candidate {} name accepted: {}", candidate.name, accepted);
                accepted
            })
            .collect();

        Ok(filtered)
    }
}
