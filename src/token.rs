//! Parsed tokens as seen by the rewriter.
//!
//! Tokens are produced once per input by a [`Parser`](crate::Parser) and are
//! read-only afterwards. Syntactic relations (`lefts`, `children`,
//! `ancestors`) are stored as indices into the token slice the token belongs
//! to, so a sentence is always handled as `&[Token]`.

use std::collections::BTreeMap;

/// Characters (and character pairs) treated as quote delimiters.
const QUOTE_DELIMITERS: &[&str] = &[
    "\"", "'", "`", "''", "``", "\u{2018}", "\u{2019}", "\u{201a}", "\u{201b}", "\u{201c}",
    "\u{201d}", "\u{201e}", "\u{201f}", "\u{2039}", "\u{203a}", "\u{00ab}", "\u{00bb}",
    "\u{275b}", "\u{275c}", "\u{275d}", "\u{275e}",
];

/// Morphological features attached to a token (`Person=1`, `Case=Acc`, ...).
///
/// Keys are frequently absent; callers must treat a missing key as "unknown".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Morphology(BTreeMap<String, String>);

impl Morphology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a CoNLL-U style feature string: `Case=Nom|Person=1`, or `_` for none.
    pub fn parse(feats: &str) -> Self {
        let mut map = BTreeMap::new();
        if feats != "_" {
            for pair in feats.split('|') {
                if let Some((key, value)) = pair.split_once('=') {
                    map.insert(key.to_string(), value.to_string());
                }
            }
        }
        Self(map)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Case pattern of a token's surface text.
///
/// The three flags follow the usual string predicates: `lower` and `upper`
/// need at least one cased character, and `title` means every run of cased
/// characters starts uppercase and continues lowercase. "I" is both upper
/// and title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseShape {
    pub lower: bool,
    pub upper: bool,
    pub title: bool,
}

impl CaseShape {
    pub fn of(text: &str) -> Self {
        let mut has_cased = false;
        let mut has_upper = false;
        let mut has_lower = false;
        let mut title = true;
        let mut previous_cased = false;

        for ch in text.chars() {
            if ch.is_uppercase() {
                has_cased = true;
                has_upper = true;
                if previous_cased {
                    title = false;
                }
                previous_cased = true;
            } else if ch.is_lowercase() {
                has_cased = true;
                has_lower = true;
                if !previous_cased {
                    title = false;
                }
                previous_cased = true;
            } else {
                previous_cased = false;
            }
        }

        Self {
            lower: has_cased && !has_upper,
            upper: has_cased && !has_lower,
            title: has_cased && title,
        }
    }
}

/// A single parsed token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface text, exactly as it appeared in the input
    pub text: String,
    /// Whitespace following the token in the input
    pub whitespace: String,
    pub lemma: String,
    /// Coarse part of speech (`PRON`, `VERB`, `PROPN`, ...)
    pub pos: String,
    /// Fine-grained tag (`VBZ`, `VBN`, `PRP$`, ...)
    pub tag: String,
    /// Dependency label relative to the syntactic head
    pub dep: String,
    pub morph: Morphology,
    /// Position in the token slice
    pub index: usize,
    pub is_sent_start: bool,
    pub is_quote: bool,
    pub case: CaseShape,
    /// Children that precede this token, in order
    pub lefts: Vec<usize>,
    /// Syntactic ancestors, nearest first
    pub ancestors: Vec<usize>,
    pub children: Vec<usize>,
}

impl Token {
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    /// True when the text is made only of alphabetic characters.
    pub fn is_alpha(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }
}

/// Whether `text` is a quote delimiter.
pub fn is_quote_delimiter(text: &str) -> bool {
    QUOTE_DELIMITERS.contains(&text)
}

/// A token that has not been linked into a document yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    pub text: String,
    pub whitespace: String,
    pub lemma: String,
    pub pos: String,
    pub tag: String,
    pub dep: String,
    /// Document-level index of the head, `None` for a root
    pub head: Option<usize>,
    pub morph: Morphology,
}

impl RawToken {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lemma: text.to_lowercase(),
            text,
            whitespace: " ".to_string(),
            pos: String::new(),
            tag: String::new(),
            dep: String::new(),
            head: None,
            morph: Morphology::new(),
        }
    }

    pub fn lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    pub fn pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = pos.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the dependency label and head in one go.
    pub fn dep(mut self, dep: impl Into<String>, head: Option<usize>) -> Self {
        self.dep = dep.into();
        self.head = head;
        self
    }

    pub fn feat(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.morph = self.morph.with(key, value);
        self
    }

    pub fn morph(mut self, morph: Morphology) -> Self {
        self.morph = morph;
        self
    }

    pub fn whitespace(mut self, whitespace: impl Into<String>) -> Self {
        self.whitespace = whitespace.into();
        self
    }

    /// Shorthand for a token directly followed by the next one.
    pub fn no_space(self) -> Self {
        self.whitespace("")
    }
}

/// Error raised when raw tokens cannot be linked into a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("token {index} has head {head}, but the document only has {len} tokens")]
pub struct HeadOutOfRange {
    pub index: usize,
    pub head: usize,
    pub len: usize,
}

/// Links raw tokens into a document of [`Token`]s.
///
/// ```
/// use layered_person::{DocBuilder, RawToken};
///
/// let tokens = DocBuilder::new()
///     .push(RawToken::new("I").tag("PRP").dep("nsubj", Some(1)))
///     .push(RawToken::new("am").lemma("be").tag("VBP").dep("ROOT", None).no_space())
///     .push(RawToken::new(".").tag(".").dep("punct", Some(1)).no_space())
///     .build()
///     .unwrap();
///
/// assert_eq!(tokens[1].lefts, vec![0]);
/// assert_eq!(tokens[0].ancestors, vec![1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocBuilder {
    tokens: Vec<RawToken>,
    sentence_starts: Vec<usize>,
}

impl DocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the next pushed token as the start of a new sentence.
    pub fn begin_sentence(mut self) -> Self {
        self.start_sentence();
        self
    }

    pub fn push(mut self, token: RawToken) -> Self {
        self.add(token);
        self
    }

    /// In-place variant of [`DocBuilder::begin_sentence`].
    pub fn start_sentence(&mut self) {
        let next = self.tokens.len();
        if self.sentence_starts.last() != Some(&next) {
            self.sentence_starts.push(next);
        }
    }

    /// In-place variant of [`DocBuilder::push`].
    pub fn add(&mut self, token: RawToken) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn build(self) -> Result<Vec<Token>, HeadOutOfRange> {
        let len = self.tokens.len();
        for (index, raw) in self.tokens.iter().enumerate() {
            if let Some(head) = raw.head {
                if head >= len {
                    return Err(HeadOutOfRange { index, head, len });
                }
            }
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); len];
        for (index, raw) in self.tokens.iter().enumerate() {
            if let Some(head) = raw.head {
                if head != index {
                    children[head].push(index);
                }
            }
        }

        let heads: Vec<Option<usize>> = self.tokens.iter().map(|raw| raw.head).collect();

        let tokens = self
            .tokens
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let lefts = children[index]
                    .iter()
                    .copied()
                    .filter(|&child| child < index)
                    .collect();
                Token {
                    case: CaseShape::of(&raw.text),
                    is_quote: is_quote_delimiter(&raw.text),
                    is_sent_start: index == 0 || self.sentence_starts.contains(&index),
                    ancestors: ancestors_of(&heads, index),
                    children: children[index].clone(),
                    lefts,
                    index,
                    text: raw.text,
                    whitespace: raw.whitespace,
                    lemma: raw.lemma,
                    pos: raw.pos,
                    tag: raw.tag,
                    dep: raw.dep,
                    morph: raw.morph,
                }
            })
            .collect();

        Ok(tokens)
    }
}

/// Walk the head chain, nearest first. Stops on cycles.
fn ancestors_of(heads: &[Option<usize>], index: usize) -> Vec<usize> {
    let mut ancestors = Vec::new();
    let mut current = index;
    while let Some(head) = heads[current] {
        if head == index || ancestors.contains(&head) {
            break;
        }
        ancestors.push(head);
        current = head;
    }
    ancestors
}
