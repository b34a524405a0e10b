//! Runs fixtures through the rewriter and classifies the results.

use std::path::Path;

use layered_person::conllu::parse_conllu;
use layered_person::{PersonShifter, RewriteOptions};

use crate::failures::{ExpectedFailures, FailureState, HarnessResult};
use crate::fixture::{Expectation, PersonFixture};
use crate::formatter::{format_failure, format_summary};
use crate::loader::load_all_fixtures;
use crate::{SpecError, SpecResult};

/// Outcome of a single fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureOutcome {
    Passed,
    /// Rewritten text differs from `# expect`.
    Mismatch { expected: String, actual: String },
    /// The rewrite failed but text was expected, or failed the wrong way.
    UnexpectedError(String),
    /// An error was expected but the rewrite produced text.
    MissingError { actual: String },
}

impl FixtureOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, FixtureOutcome::Passed)
    }
}

/// Run one fixture.
///
/// Malformed CoNLL-U is a harness error, not an outcome.
pub fn run_fixture(fixture: &PersonFixture) -> SpecResult<FixtureOutcome> {
    let tokens = parse_conllu(&fixture.conllu).map_err(|err| SpecError::Run {
        message: err.to_string(),
    })?;
    let options = RewriteOptions {
        exclude_quotes: fixture.exclude_quotes,
    };
    let result = PersonShifter::for_direction(fixture.direction).rewrite(&tokens, options);

    let outcome = match (&fixture.expectation, result) {
        (Expectation::Text(expected), Ok(rewrite)) => {
            let actual = rewrite.text();
            if &actual == expected {
                FixtureOutcome::Passed
            } else {
                FixtureOutcome::Mismatch {
                    expected: expected.clone(),
                    actual,
                }
            }
        }
        (Expectation::AmbiguousRole, Ok(rewrite)) => FixtureOutcome::MissingError {
            actual: rewrite.text(),
        },
        (Expectation::AmbiguousRole, Err(err)) if err.is_ambiguous_role() => {
            FixtureOutcome::Passed
        }
        (_, Err(err)) => FixtureOutcome::UnexpectedError(err.to_string()),
    };
    Ok(outcome)
}

/// Totals and printable output of a harness run.
#[derive(Debug, Clone, Default)]
pub struct HarnessReport {
    pub result: HarnessResult,
    /// Failure reports, notes and the summary line
    pub output: String,
    /// Fixtures that failed without being listed as expected failures
    pub regressions: Vec<String>,
    /// Listed fixtures that passed; their entries can go
    pub fixed: Vec<String>,
    /// Listed fixtures that were not found
    pub stale: Vec<String>,
}

/// Run every fixture under `dir`, classifying failures with `failures`.
pub fn run_all(dir: &Path, failures: &ExpectedFailures) -> SpecResult<HarnessReport> {
    let mut report = HarnessReport::default();
    let fixtures = load_all_fixtures(dir)?;

    for (name, fixture) in &fixtures {
        let outcome = run_fixture(fixture)?;
        if outcome.is_passed() {
            report.result.record_pass();
            if failures.is_listed(name) {
                report.fixed.push(name.clone());
            }
            continue;
        }

        let state = failures.state_of(name);
        report.result.record_failure(state);
        if state == FailureState::Regression {
            report.regressions.push(name.clone());
        }
        report
            .output
            .push_str(&format_failure(name, fixture, &outcome, state));
    }

    let names: Vec<&str> = fixtures.iter().map(|(name, _)| name.as_str()).collect();
    report.stale = failures
        .stale(&names)
        .into_iter()
        .map(str::to_string)
        .collect();

    for name in &report.fixed {
        report
            .output
            .push_str(&format!("\nnote: {} passes; remove it from expected failures\n", name));
    }
    for name in &report.stale {
        report
            .output
            .push_str(&format!("\nnote: {} is listed as an expected failure but was not found\n", name));
    }

    report
        .output
        .push_str(&format_summary(&dir.display().to_string(), &report.result));
    Ok(report)
}
