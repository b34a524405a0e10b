//! Pronoun classification and subject/object role resolution.
//!
//! A source word maps straight to its target unless the profile gives it
//! different targets for different slot kinds ("you" -> "I" | "me",
//! "her" -> "me" | "my"). Those words are resolved from the dependency
//! label; a label that says nothing useful is an error, never a guess.

use crate::person::{Slot, SlotKind};
use crate::profile::TransformationProfile;
use crate::{Token, TransformError};

/// Dependency label fragments marking an object-like position.
const OBJECT_MARKERS: &[&str] = &["obj", "dative", "obl", "attr"];

/// A source pronoun and the slot it was resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounMatch {
    pub slot: Slot,
    /// Lowercase target word
    pub target: String,
}

/// Whether `token` is a transformable source pronoun.
///
/// "us" tagged as a proper noun (as in "U.S.") is never a pronoun.
pub fn is_source_pronoun(profile: &TransformationProfile, token: &Token) -> bool {
    let lower = token.lower();
    profile.is_source_word(&lower) && !(lower == "us" && token.pos == "PROPN")
}

/// Classify `token`; `Ok(None)` when it is not a source pronoun.
pub fn classify(
    profile: &TransformationProfile,
    token: &Token,
) -> Result<Option<PronounMatch>, TransformError> {
    if !is_source_pronoun(profile, token) {
        return Ok(None);
    }

    let slots: Vec<Slot> = profile
        .positions_of(&token.lower())
        .iter()
        .filter_map(|&position| Slot::from_position(position))
        .collect();
    let Some(&first) = slots.first() else {
        return Ok(None);
    };

    let first_target = profile.target_for(first);
    let same_target = slots.iter().all(|&s| profile.target_for(s) == first_target);
    let same_kind = slots.iter().all(|s| s.kind == first.kind);

    let slot = if same_target || same_kind {
        first
    } else {
        resolve_slot(token, &slots)?
    };

    Ok(Some(PronounMatch {
        slot,
        target: profile.target_for(slot).to_lowercase(),
    }))
}

/// Role implied by the dependency label and the `Case` feature.
pub fn role_of(token: &Token) -> Option<SlotKind> {
    let dep = token.dep.to_lowercase();
    if dep.contains("subj") || dep.contains("conj") {
        if token.morph.get("Case") == Some("Acc") {
            Some(SlotKind::Object)
        } else {
            Some(SlotKind::Subject)
        }
    } else if dep.contains("poss") {
        Some(SlotKind::PossessiveDeterminer)
    } else if OBJECT_MARKERS.iter().any(|marker| dep.contains(marker)) {
        Some(SlotKind::Object)
    } else {
        None
    }
}

fn resolve_slot(token: &Token, slots: &[Slot]) -> Result<Slot, TransformError> {
    let ambiguous = || TransformError::AmbiguousRole {
        text: token.text.clone(),
        index: token.index,
        dep: token.dep.clone(),
    };

    let role = role_of(token).ok_or_else(ambiguous)?;
    let of_kind = |kind: SlotKind| slots.iter().copied().find(|s| s.kind == kind);

    let fallback = match role {
        // "his" standing alone as subject or object is the possessive pronoun
        SlotKind::Subject | SlotKind::Object => of_kind(SlotKind::PossessivePronoun),
        _ => None,
    };

    of_kind(role).or(fallback).ok_or_else(ambiguous)
}
