//! The expected-failures list and run totals.
//!
//! A fixture has a single outcome, so entries are keyed by fixture name
//! alone. `known` entries are limitations nobody is working on; `pending`
//! ones should disappear once the fixture passes:
//!
//! ```toml
//! [[known]]
//! fixture = "negated-contraction.conllu"
//! reason = "negative contractions are re-inflected without their clitic"
//! added = "2026-10-19"
//! ```
//!
//! An entry whose fixture now passes, or no longer exists, is reported so
//! the list does not rot.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::SpecError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture name as produced by the loader ("quotes/unclosed.conllu")
    pub fixture: String,
    #[serde(default)]
    pub reason: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    pub added: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
}

/// How a failing fixture is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    Known,
    Pending,
    /// Not listed: the failure breaks the run.
    Regression,
}

impl ExpectedFailures {
    /// Read the list; a missing file is an empty list.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        let load_error = |message: String| SpecError::Load {
            path: path.display().to_string(),
            message,
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|err| load_error(err.to_string()))?;
        Self::from_toml_str(&content).map_err(|err| load_error(err.to_string()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn entries(&self) -> impl Iterator<Item = &FailureEntry> {
        self.known.iter().chain(self.pending.iter())
    }

    /// State a failure of `fixture` is counted under.
    pub fn state_of(&self, fixture: &str) -> FailureState {
        if self.known.iter().any(|entry| entry.fixture == fixture) {
            FailureState::Known
        } else if self.pending.iter().any(|entry| entry.fixture == fixture) {
            FailureState::Pending
        } else {
            FailureState::Regression
        }
    }

    pub fn is_listed(&self, fixture: &str) -> bool {
        self.state_of(fixture) != FailureState::Regression
    }

    pub fn entry(&self, fixture: &str) -> Option<&FailureEntry> {
        self.entries().find(|entry| entry.fixture == fixture)
    }

    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    /// Listed fixtures missing from `names`, sorted and deduplicated.
    pub fn stale<'a, S: AsRef<str>>(&'a self, names: &[S]) -> Vec<&'a str> {
        let mut stale: Vec<&str> = self
            .entries()
            .map(|entry| entry.fixture.as_str())
            .filter(|fixture| !names.iter().any(|name| name.as_ref() == *fixture))
            .collect();
        stale.sort_unstable();
        stale.dedup();
        stale
    }
}

/// Totals of a harness run.
#[derive(Debug, Clone, Default)]
pub struct HarnessResult {
    pub total: usize,
    pub passed: usize,
    /// Failures listed as known or pending
    pub expected_failures: usize,
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process exit code: 1 when any fixture regressed.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.success())
    }

    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn failed(&self) -> usize {
        self.expected_failures + self.regressions
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => self.expected_failures += 1,
            FailureState::Regression => self.regressions += 1,
        }
    }
}
