#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven testing infrastructure for layered-person.
//!
//! Test cases are CoNLL-U files whose comment headers say which direction
//! to apply and what should come out:
//!
//! ```text
//! # title = First person to second person
//! # direction = first-to-second
//! # expect = You are happy.
//! 1	I	I	PRON	PRP	Case=Nom|Person=1	2	nsubj	_	_
//! 2	am	be	AUX	VBP	_	0	ROOT	_	_
//! ...
//! ```
//!
//! A fixture may instead declare `# expect_error = ambiguous-role`, and
//! `# exclude_quotes = false` rewrites inside quoted spans too.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture header parsing
//! - [`loader`] - Fixture discovery and naming
//! - [`runner`] - Runs fixtures through the rewriter
//! - [`errors`] - Error types for the harness
//! - [`formatter`] - Failure and summary formatting
//! - [`failures`] - The expected-failures list and run totals

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, Expectation, PersonFixture};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{run_all, run_fixture, FixtureOutcome, HarnessReport};

#[cfg(test)]
mod tests;
