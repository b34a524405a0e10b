//! The sentence rewriter.
//!
//! Tokens are visited in order with a small state value threaded through the
//! loop: the quote-exclusion flag and the number of the pronoun rewritten on
//! the previous token, if any. Nothing is stored on the rewriter itself, so
//! one [`PersonShifter`] can serve any number of concurrent calls.
//!
//! For each token outside a quoted span:
//!
//! 1. a source pronoun is replaced by its target;
//! 2. otherwise, if a source pronoun governs it (see
//!    [`find_left_antecedent`]) or the previous token was a rewritten
//!    pronoun, contractions and verbs are made to agree;
//! 3. anything else is copied verbatim.
//!
//! Every token keeps its trailing whitespace.

use std::fmt;

use crate::agreement::{reinflect, AgreementRules, StandardRules};
use crate::capitalization::preserve_case;
use crate::classifier::classify;
use crate::contraction::replace_contraction;
use crate::inflect::{Inflector, LexiconInflector};
use crate::left_context::find_left_antecedent;
use crate::person::{Number, Slot};
use crate::profile::{Direction, TransformationProfile};
use crate::quote::QuoteSpan;
use crate::{Parser, Token, TransformError, TransformResult};

/// Options for a single rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Leave text between quote delimiters untouched
    pub exclude_quotes: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            exclude_quotes: true,
        }
    }
}

impl RewriteOptions {
    pub fn include_quotes() -> Self {
        Self {
            exclude_quotes: false,
        }
    }
}

/// What happened to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Unchanged,
    /// Inside a quoted span, copied verbatim
    Quoted,
    /// Source pronoun replaced by the target of `Slot`
    Pronoun(Slot),
    Contraction,
    /// Verb re-inflected to agree with a rewritten pronoun
    Agreement,
}

/// Output for one input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEdit {
    pub text: String,
    pub whitespace: String,
    pub change: Change,
}

impl TokenEdit {
    fn keep(token: &Token, change: Change) -> Self {
        Self {
            text: token.text.clone(),
            whitespace: token.whitespace.clone(),
            change,
        }
    }

    pub fn is_changed(&self) -> bool {
        !matches!(self.change, Change::Unchanged | Change::Quoted)
    }
}

/// The rewritten sentence, token by token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rewrite {
    edits: Vec<TokenEdit>,
}

impl Rewrite {
    pub fn edits(&self) -> &[TokenEdit] {
        &self.edits
    }

    /// Reassembled text: each token followed by its original whitespace.
    pub fn text(&self) -> String {
        self.to_string()
    }

    pub fn changed_count(&self) -> usize {
        self.edits.iter().filter(|edit| edit.is_changed()).count()
    }
}

impl fmt::Display for Rewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edit in &self.edits {
            f.write_str(&edit.text)?;
            f.write_str(&edit.whitespace)?;
        }
        Ok(())
    }
}

/// Per-call state, threaded from token to token.
#[derive(Debug, Clone, Copy, Default)]
struct RewriteState {
    quotes: QuoteSpan,
    /// Number row of the pronoun rewritten on the previous token
    antecedent: Option<Number>,
}

/// Rewrites sentences from the source to the target person of a profile.
///
/// ```
/// use layered_person::{Direction, PersonShifter, RewriteOptions};
/// use layered_person::conllu::ConlluParser;
///
/// let conllu = "\
/// 1\tI\tI\tPRON\tPRP\tCase=Nom|Number=Sing|Person=1\t2\tnsubj\t_\t_
/// 2\tam\tbe\tAUX\tVBP\tMood=Ind|Tense=Pres\t0\tROOT\t_\t_
/// 3\thappy\thappy\tADJ\tJJ\t_\t2\tacomp\t_\tSpaceAfter=No
/// 4\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_
/// ";
///
/// let shifter = PersonShifter::for_direction(Direction::FirstToSecond);
/// let text = shifter
///     .transform(&ConlluParser::new(), conllu, RewriteOptions::default())
///     .unwrap();
/// assert_eq!(text, "You are happy.");
/// ```
#[derive(Debug, Clone)]
pub struct PersonShifter<'p, I = LexiconInflector, R = StandardRules> {
    profile: &'p TransformationProfile,
    inflector: I,
    rules: R,
}

impl<'p> PersonShifter<'p> {
    pub fn new(profile: &'p TransformationProfile) -> Self {
        Self {
            profile,
            inflector: LexiconInflector,
            rules: StandardRules,
        }
    }
}

impl PersonShifter<'static> {
    pub fn for_direction(direction: Direction) -> Self {
        Self::new(direction.profile())
    }
}

impl<'p, I: Inflector, R: AgreementRules> PersonShifter<'p, I, R> {
    pub fn with_inflector<J: Inflector>(self, inflector: J) -> PersonShifter<'p, J, R> {
        PersonShifter {
            profile: self.profile,
            inflector,
            rules: self.rules,
        }
    }

    pub fn with_rules<S: AgreementRules>(self, rules: S) -> PersonShifter<'p, I, S> {
        PersonShifter {
            profile: self.profile,
            inflector: self.inflector,
            rules,
        }
    }

    pub fn profile(&self) -> &'p TransformationProfile {
        self.profile
    }

    /// Parse `text` and return the rewritten sentence.
    pub fn transform<P: Parser>(
        &self,
        parser: &P,
        text: &str,
        options: RewriteOptions,
    ) -> TransformResult<String> {
        let tokens = parser
            .parse(text)
            .map_err(|err| TransformError::Parse(Box::new(err)))?;
        Ok(self.rewrite(&tokens, options)?.text())
    }

    /// Rewrite already parsed tokens.
    pub fn rewrite(&self, tokens: &[Token], options: RewriteOptions) -> TransformResult<Rewrite> {
        let mut state = RewriteState::default();
        let mut edits = Vec::with_capacity(tokens.len());

        for token in tokens {
            let (edit, next) = self.step(tokens, token, state, options)?;
            edits.push(edit);
            state = next;
        }

        if state.quotes.is_excluded() {
            log::warn!(
                "input ended inside a quoted span; an odd number of quote delimiters left the tail untransformed"
            );
        }

        Ok(Rewrite { edits })
    }

    fn step(
        &self,
        tokens: &[Token],
        token: &Token,
        state: RewriteState,
        options: RewriteOptions,
    ) -> TransformResult<(TokenEdit, RewriteState)> {
        let quotes = if options.exclude_quotes {
            state.quotes.step(token)
        } else {
            state.quotes
        };
        if quotes.is_excluded() {
            log::trace!("{}: {:?} is quoted", token.index, token.text);
            let next = RewriteState { quotes, ..state };
            return Ok((TokenEdit::keep(token, Change::Quoted), next));
        }

        if let Some(found) = classify(self.profile, token)? {
            let text = preserve_case(&found.target, token);
            log::debug!("{}: pronoun {:?} -> {:?}", token.index, token.text, text);
            let change = if text == token.text {
                Change::Unchanged
            } else {
                Change::Pronoun(found.slot)
            };
            let edit = TokenEdit {
                text,
                whitespace: token.whitespace.clone(),
                change,
            };
            let next = RewriteState {
                quotes,
                antecedent: Some(found.slot.number),
            };
            return Ok((edit, next));
        }

        let next = RewriteState {
            quotes,
            antecedent: None,
        };
        let antecedent = state.antecedent.or_else(|| {
            find_left_antecedent(tokens, token, |word| self.profile.is_source_word(word))
                .and_then(|left| self.profile.number_of(&left.lower()))
        });
        let Some(number) = antecedent else {
            return Ok((TokenEdit::keep(token, Change::Unchanged), next));
        };

        Ok((self.agree(tokens, token, number), next))
    }

    /// Contraction or verb agreement for a token governed by a source pronoun.
    fn agree(&self, tokens: &[Token], token: &Token, number: Number) -> TokenEdit {
        let agreement = self.profile.agreement(number);

        let (replacement, change) =
            if let Some(form) = replace_contraction(agreement, tokens, token, &self.rules) {
                (form, Change::Contraction)
            } else if let Some(form) = reinflect(
                self.profile,
                agreement,
                tokens,
                token,
                &self.inflector,
                &self.rules,
            ) {
                (form, Change::Agreement)
            } else {
                (token.lower(), Change::Unchanged)
            };

        let text = preserve_case(&replacement, token);
        if text == token.text {
            return TokenEdit::keep(token, Change::Unchanged);
        }
        log::debug!("{}: {:?} -> {:?}", token.index, token.text, text);
        TokenEdit {
            text,
            whitespace: token.whitespace.clone(),
            change,
        }
    }
}
