//! Verb agreement with a rewritten pronoun.
//!
//! Copulas and auxiliaries (`be`, `have`) are always re-inflected for the
//! target person; other verbs only when the source and target present-tense
//! tags differ ("he runs" -> "I run"). A verb that already has its own
//! third-person subject is left alone:
//!
//! ```text
//! I   said  it   was   late
//!                ╰─╯ nsubj child "it" (Person=3): "was" stays
//! ```

use crate::contraction::Reading;
use crate::inflect::Inflector;
use crate::profile::{Agreement, TransformationProfile};
use crate::Token;

/// Lemmas that are re-inflected whatever their tag.
const AUXILIARIES: &[&str] = &["be", "have"];

/// Present-tense finite verb tags.
const PRESENT_TAGS: &[&str] = &["VBP", "VBZ"];

/// Per-direction decisions that do not fit in table data.
pub trait AgreementRules {
    /// Reading of the ambiguous contraction at `index`.
    fn contraction_reading(&self, tokens: &[Token], index: usize) -> Reading;

    /// Form selector used to re-inflect `token`.
    fn form_selector(&self, token: &Token, agreement: &Agreement) -> usize;
}

/// Rules used by every built-in direction.
///
/// The contraction reading comes from the next token's tag; coordinate
/// clause verbs (`conj`) use the conjunct selector, all others the main one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl AgreementRules for StandardRules {
    fn contraction_reading(&self, tokens: &[Token], index: usize) -> Reading {
        Reading::from_next(tokens.get(index + 1))
    }

    fn form_selector(&self, token: &Token, agreement: &Agreement) -> usize {
        if token.dep == "conj" {
            agreement.conjunct_form
        } else {
            agreement.main_form
        }
    }
}

/// Whether `token` has a nominal-subject child that is third person and is
/// not itself a source pronoun.
pub fn has_independent_third_person_subject(
    profile: &TransformationProfile,
    tokens: &[Token],
    token: &Token,
) -> bool {
    token
        .children
        .iter()
        .filter_map(|&index| tokens.get(index))
        .any(|child| {
            child.dep.starts_with("nsubj")
                && child.morph.get("Person") == Some("3")
                && !profile.is_source_word(&child.lower())
        })
}

/// Tag to inflect `token` with: present-tense verbs take the target tag.
fn inflection_tag<'a>(token: &'a Token, agreement: &'a Agreement) -> &'a str {
    if PRESENT_TAGS.contains(&token.tag.as_str()) {
        &agreement.target_tag
    } else {
        &token.tag
    }
}

fn needs_agreement(token: &Token, agreement: &Agreement) -> bool {
    if !token.is_alpha() {
        return false;
    }
    let lemma = token.lemma.to_lowercase();
    if AUXILIARIES.contains(&lemma.as_str()) {
        return true;
    }
    matches!(token.pos.as_str(), "VERB" | "AUX")
        && token.tag == agreement.source_tag
        && agreement.source_tag != agreement.target_tag
}

/// Lowercase re-inflected form of `token`, or `None` when the verb does not
/// take part in agreement. An inflector miss yields the original text.
pub fn reinflect(
    profile: &TransformationProfile,
    agreement: &Agreement,
    tokens: &[Token],
    token: &Token,
    inflector: &dyn Inflector,
    rules: &dyn AgreementRules,
) -> Option<String> {
    if !needs_agreement(token, agreement) {
        return None;
    }
    if has_independent_third_person_subject(profile, tokens, token) {
        log::trace!("{:?} agrees with its own third-person subject", token.text);
        return None;
    }

    let tag = inflection_tag(token, agreement);
    let form = rules.form_selector(token, agreement);
    match inflector.inflect(token, tag, form) {
        Some(inflected) => Some(inflected.to_lowercase()),
        None => {
            log::debug!("no {} form {} for {:?}; keeping it", tag, form, token.text);
            Some(token.lower())
        }
    }
}
