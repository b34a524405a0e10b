//! Failure and summary formatting.

use crate::failures::{FailureState, HarnessResult};
use crate::fixture::{Expectation, PersonFixture};
use crate::runner::FixtureOutcome;

/// Format a failed fixture with its direction and a first-difference marker.
pub fn format_failure(
    fixture_name: &str,
    fixture: &PersonFixture,
    outcome: &FixtureOutcome,
    state: FailureState,
) -> String {
    let mut output = String::new();

    let label = match state {
        FailureState::Known => "KNOWN",
        FailureState::Pending => "PENDING",
        FailureState::Regression => "FAIL",
    };
    output.push_str(&format!("\n{}: {}\n", label, fixture_name));
    if let Some(title) = &fixture.title {
        output.push_str(&format!("  {}\n", title));
    }
    output.push_str(&format!("  direction: {}\n\n", fixture.direction));

    match outcome {
        FixtureOutcome::Mismatch { expected, actual } => {
            output.push_str(&format!("  expected: {}\n", expected));
            output.push_str(&format!("  actual:   {}\n", actual));
            if let Some(column) = first_difference(expected, actual) {
                output.push_str(&format!("            {}^\n", " ".repeat(column)));
            }
        }
        FixtureOutcome::UnexpectedError(message) => {
            let wanted = match &fixture.expectation {
                Expectation::Text(text) => format!("text {:?}", text),
                Expectation::AmbiguousRole => "an ambiguous-role error".to_string(),
            };
            output.push_str(&format!("  expected {}, got error: {}\n", wanted, message));
        }
        FixtureOutcome::MissingError { actual } => {
            output.push_str(&format!(
                "  expected an ambiguous-role error, got text: {}\n",
                actual
            ));
        }
        FixtureOutcome::Passed => {
            output.push_str("  (passed)\n");
        }
    }

    if !fixture.exclude_quotes {
        output.push_str("\n  hint: this fixture rewrites inside quotes (exclude_quotes = false)\n");
    }

    output
}

/// Format a summary of a harness run.
pub fn format_summary(name: &str, result: &HarnessResult) -> String {
    let status = if result.success() { "PASS" } else { "FAIL" };

    format!(
        "\n{}: {}\n  {} passed, {} failed ({} expected, {} regressions)\n",
        status,
        name,
        result.passed,
        result.failed(),
        result.expected_failures,
        result.regressions
    )
}

/// Character column of the first difference, if the strings differ.
fn first_difference(expected: &str, actual: &str) -> Option<usize> {
    let mut expected_chars = expected.chars();
    let mut actual_chars = actual.chars();
    let mut column = 0;
    loop {
        match (expected_chars.next(), actual_chars.next()) {
            (None, None) => return None,
            (Some(a), Some(b)) if a == b => column += 1,
            _ => return Some(column),
        }
    }
}
