//! Fixture header parsing.
//!
//! The body of a fixture is plain CoNLL-U and is handed to the rewriter
//! as is; only `# key = value` headers are interpreted here. Headers the
//! harness does not know (`sent_id`, `text`, ...) are ignored.

use layered_person::Direction;

use crate::{SpecError, SpecResult};

/// What a fixture expects the rewriter to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Rewritten text, exactly
    Text(String),
    /// The rewrite fails with an ambiguous role
    AmbiguousRole,
}

/// A parsed fixture file.
#[derive(Debug, Clone)]
pub struct PersonFixture {
    pub title: Option<String>,
    pub direction: Direction,
    pub expectation: Expectation,
    pub exclude_quotes: bool,
    /// The full CoNLL-U document, headers included
    pub conllu: String,
}

/// Parse fixture content.
pub fn parse_fixture(content: &str) -> SpecResult<PersonFixture> {
    let mut title = None;
    let mut direction = None;
    let mut expectation = None;
    let mut exclude_quotes = true;

    for (offset, line) in content.lines().enumerate() {
        let line_no = offset + 1;
        let Some(header) = line.trim_start().strip_prefix('#') else {
            continue;
        };
        let Some((key, value)) = header.split_once('=') else {
            continue;
        };
        let value = value.trim();
        let error = |message: String| SpecError::Parse {
            line: line_no,
            message,
        };

        match key.trim() {
            "title" => title = Some(value.to_string()),
            "direction" => {
                let parsed = value
                    .parse::<Direction>()
                    .map_err(|err| error(err.to_string()))?;
                direction = Some(parsed);
            }
            "expect" => expectation = Some(Expectation::Text(value.to_string())),
            "expect_error" => match value {
                "ambiguous-role" => expectation = Some(Expectation::AmbiguousRole),
                other => return Err(error(format!("unknown expected error {:?}", other))),
            },
            "exclude_quotes" => {
                exclude_quotes = value
                    .parse::<bool>()
                    .map_err(|_| error(format!("exclude_quotes must be true or false, got {:?}", value)))?;
            }
            _ => {}
        }
    }

    let direction = direction.ok_or_else(|| SpecError::Parse {
        line: 0,
        message: "missing `# direction` header".to_string(),
    })?;
    let expectation = expectation.ok_or_else(|| SpecError::Parse {
        line: 0,
        message: "missing `# expect` or `# expect_error` header".to_string(),
    })?;

    Ok(PersonFixture {
        title,
        direction,
        expectation,
        exclude_quotes,
        conllu: content.to_string(),
    })
}
