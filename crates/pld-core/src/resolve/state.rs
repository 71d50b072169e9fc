//! Per-run identity → version map.

use crate::artifact::Identity;
use std::collections::HashMap;

/// Outcome of checking an artifact against what was already fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit<'a> {
    /// Identity not seen yet; it must be fetched.
    Fresh,
    /// Same identity and version already fetched.
    Satisfied,
    /// Same identity fetched with a different version.
    Conflict { resolved: &'a str },
}

/// Versions already obtained in one resolution run. Never shared across runs.
#[derive(Debug, Clone, Default)]
pub struct ResolutionState {
    resolved: HashMap<Identity, String>,
}

impl ResolutionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit(&self, identity: &Identity, version: &str) -> Visit<'_> {
        match self.resolved.get(identity) {
            None => Visit::Fresh,
            Some(v) if v == version => Visit::Satisfied,
            Some(v) => Visit::Conflict { resolved: v },
        }
    }

    /// Records a fetched version. An identity is recorded at most once.
    pub(crate) fn record(&mut self, identity: Identity, version: String) {
        self.resolved.entry(identity).or_insert(version);
    }

    pub fn version_of(&self, identity: &Identity) -> Option<&str> {
        self.resolved.get(identity).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Identity, &str)> {
        self.resolved.iter().map(|(k, v)| (k, v.as_str()))
    }
}
