//! A [`Parser`] over pre-annotated CoNLL-U text.
//!
//! Lets the rewriter run on the output of any dependency parser that can
//! export CoNLL-U, and keeps test inputs readable:
//!
//! ```text
//! # text = I am happy.
//! 1   I       I       PRON   PRP   Case=Nom|Person=1   2   nsubj   _   _
//! 2   am      be      AUX    VBP   _                   0   ROOT    _   _
//! 3   happy   happy   ADJ    JJ    _                   2   acomp   _   SpaceAfter=No
//! 4   .       .       PUNCT  .     _                   2   punct   _   _
//! ```
//!
//! Columns are tab separated; a line without tabs is split on whitespace.
//! Multiword token ranges (`1-2`) only contribute their `SpaceAfter`, and
//! empty nodes (`1.1`) are skipped.

use thiserror::Error;

use crate::token::{DocBuilder, HeadOutOfRange, Morphology, RawToken};
use crate::{Parser, Token};

const COLUMNS: usize = 10;

/// Errors reading CoNLL-U input. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected 10 columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: invalid token id {id:?}")]
    InvalidId { line: usize, id: String },

    #[error("line {line}: invalid head {head:?}")]
    InvalidHead { line: usize, head: String },

    #[error("line {line}: head {head} is outside its sentence of {len} words")]
    HeadOutOfRange { line: usize, head: usize, len: usize },

    #[error(transparent)]
    Link(#[from] HeadOutOfRange),
}

/// Reads CoNLL-U; one blank-line separated block per sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConlluParser;

impl ConlluParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for ConlluParser {
    type Error = ParseError;

    fn parse(&self, text: &str) -> Result<Vec<Token>, ParseError> {
        parse_conllu(text)
    }
}

/// One word line, before heads are made document-relative.
struct WordLine {
    line: usize,
    raw: RawToken,
    /// Sentence-relative head, 0 for root
    head: usize,
    spaced: bool,
}

/// Parse CoNLL-U into linked tokens.
pub fn parse_conllu(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut builder = DocBuilder::new();
    let mut sentence: Vec<WordLine> = Vec::new();
    // Remaining words of an open multiword range and its SpaceAfter
    let mut range: Option<(usize, bool)> = None;

    for (offset, line) in text.lines().enumerate() {
        let line_no = offset + 1;
        let trimmed = line.trim_end_matches('\r');

        if trimmed.trim().is_empty() {
            flush_sentence(&mut builder, &mut sentence)?;
            range = None;
            continue;
        }
        if trimmed.trim_start().starts_with('#') {
            continue;
        }

        let columns: Vec<&str> = if trimmed.contains('\t') {
            trimmed.split('\t').collect()
        } else {
            trimmed.split_whitespace().collect()
        };
        if columns.len() != COLUMNS {
            return Err(ParseError::ColumnCount {
                line: line_no,
                found: columns.len(),
            });
        }

        let id = columns[0];
        if id.contains('.') {
            continue;
        }
        if let Some((start, end)) = id.split_once('-') {
            let (start, end) = match (start.parse::<usize>(), end.parse::<usize>()) {
                (Ok(start), Ok(end)) if start <= end => (start, end),
                _ => {
                    return Err(ParseError::InvalidId {
                        line: line_no,
                        id: id.to_string(),
                    })
                }
            };
            range = Some((end - start + 1, space_after(columns[9])));
            continue;
        }
        let expected = sentence.len() + 1;
        if id.parse::<usize>().ok() != Some(expected) {
            return Err(ParseError::InvalidId {
                line: line_no,
                id: id.to_string(),
            });
        }

        let head = columns[6].parse::<usize>().map_err(|_| ParseError::InvalidHead {
            line: line_no,
            head: columns[6].to_string(),
        })?;

        let spaced = match range {
            Some((remaining, range_spaced)) => {
                let remaining = remaining - 1;
                range = if remaining == 0 {
                    None
                } else {
                    Some((remaining, range_spaced))
                };
                remaining == 0 && range_spaced
            }
            None => space_after(columns[9]),
        };

        let raw = RawToken::new(columns[1])
            .lemma(columns[2])
            .pos(columns[3])
            .tag(columns[4])
            .morph(Morphology::parse(columns[5]))
            .dep(columns[7], None);

        sentence.push(WordLine {
            line: line_no,
            raw,
            head,
            spaced,
        });
    }
    flush_sentence(&mut builder, &mut sentence)?;

    let mut tokens = builder.build()?;
    if let Some(last) = tokens.last_mut() {
        last.whitespace.clear();
    }
    Ok(tokens)
}

fn space_after(misc: &str) -> bool {
    !misc.split('|').any(|item| item == "SpaceAfter=No")
}

/// Move a finished sentence into the builder with document-level heads.
fn flush_sentence(
    builder: &mut DocBuilder,
    sentence: &mut Vec<WordLine>,
) -> Result<(), ParseError> {
    if sentence.is_empty() {
        return Ok(());
    }
    let offset = builder.len();
    let len = sentence.len();

    builder.start_sentence();
    for word in sentence.drain(..) {
        if word.head > len {
            return Err(ParseError::HeadOutOfRange {
                line: word.line,
                head: word.head,
                len,
            });
        }
        let head = word.head.checked_sub(1).map(|h| h + offset);
        let dep = word.raw.dep.clone();
        let whitespace = if word.spaced { " " } else { "" };
        builder.add(word.raw.dep(dep, head).whitespace(whitespace));
    }
    Ok(())
}
