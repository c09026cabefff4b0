//! The configuration surface resource kinds register their options on.
//!
//! Resource kinds declare options through `ConfigSurface::register_option`
//! and later read resolved values back with `get_arg`. The binary backs the
//! surface with clap; `ArgMap` is the plain in-memory store both sides share.

use crate::types::FilterConfig;
use std::collections::HashMap;

/// Regex matching the names of resources to delete
pub const NAME_OPTION: &str = "name";
/// Regex matching the names of resources to keep
pub const SKIP_NAME_OPTION: &str = "skip-name";
/// Minimum age of resources to delete
pub const AGE_OPTION: &str = "age";

/// A single option declared by a resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub short: Option<char>,
    pub help: &'static str,
}

impl OptionSpec {
    pub const fn new(name: &'static str, short: char, help: &'static str) -> Self {
        Self {
            name,
            short: Some(short),
            help,
        }
    }
}

/// Shared option registry and value lookup.
pub trait ConfigSurface {
    /// Declare an option under a resource kind.
    ///
    /// Registering the same option name twice for a kind replaces the first
    /// declaration.
    fn register_option(&mut self, kind: &'static str, option: OptionSpec);

    /// The resolved value of an option, or `None` if it was not given.
    fn get_arg(&self, name: &str) -> Option<String>;
}

/// Read the three filter options off a configuration surface.
pub fn resolve_filter_config(surface: &dyn ConfigSurface) -> FilterConfig {
    FilterConfig {
        name_pattern: surface.get_arg(NAME_OPTION),
        skip_name_pattern: surface.get_arg(SKIP_NAME_OPTION),
        age: surface.get_arg(AGE_OPTION),
    }
}

/// In-memory `ConfigSurface`.
///
/// Keeps registrations in declaration order so callers can build a command
/// line (or help text) that lists kinds the way they were registered.
#[derive(Debug, Clone, Default)]
pub struct ArgMap {
    registrations: Vec<(&'static str, OptionSpec)>,
    values: HashMap<String, String>,
}

impl ArgMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a resolved value (builder pattern).
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_arg(name, value);
        self
    }

    pub fn set_arg(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn clear_args(&mut self) {
        self.values.clear();
    }

    /// Registered kinds, in first-registration order
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<&'static str> = Vec::new();
        for (kind, _) in &self.registrations {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        kinds
    }

    /// Options declared by one kind, in declaration order
    pub fn options_for(&self, kind: &str) -> Vec<OptionSpec> {
        self.registrations
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, option)| *option)
            .collect()
    }
}

impl ConfigSurface for ArgMap {
    fn register_option(&mut self, kind: &'static str, option: OptionSpec) {
        match self
            .registrations
            .iter()
            .position(|(k, existing)| *k == kind && existing.name == option.name)
        {
            Some(index) => self.registrations[index].1 = option,
            None => self.registrations.push((kind, option)),
        }
    }

    fn get_arg(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: OptionSpec = OptionSpec::new(NAME_OPTION, 'n', "name regex");

    #[test]
    fn test_register_is_idempotent() {
        let mut args = ArgMap::new();
        args.register_option("server", NAME);
        args.register_option("server", NAME);
        args.register_option("volume", NAME);

        assert_eq!(args.kinds(), vec!["server", "volume"]);
        assert_eq!(args.options_for("server"), vec![NAME]);
    }

    #[test]
    fn test_unset_args_are_none() {
        let args = ArgMap::new().with_arg(AGE_OPTION, "30d");
        let config = resolve_filter_config(&args);

        assert_eq!(config.age.as_deref(), Some("30d"));
        assert!(config.name_pattern.is_none());
        assert!(config.skip_name_pattern.is_none());
    }
}
