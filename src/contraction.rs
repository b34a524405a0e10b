//! Orthographic contractions ("'m", "'re", "'s", "'ve").
//!
//! Most contractions map one-to-one. "'s" is either "is" or "has"; the tag of
//! the following token decides: a past participle means "has".
//!
//! ```text
//! he  's  going   -> be   -> I'm going
//! he  's  gone    -> have -> I've gone
//! ```

use crate::agreement::AgreementRules;
use crate::profile::{Agreement, ContractionTarget};
use crate::Token;

/// Past participle tag.
const PAST_PARTICIPLE: &str = "VBN";

/// Possessive ending tag ("brother 's").
const POSSESSIVE: &str = "POS";

/// Which auxiliary an ambiguous contraction stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Be,
    Have,
}

impl Reading {
    /// Reading implied by the token after the contraction.
    pub fn from_next(next: Option<&Token>) -> Self {
        match next {
            Some(token) if token.tag == PAST_PARTICIPLE => Reading::Have,
            _ => Reading::Be,
        }
    }
}

/// Lowercase replacement for a contraction, or `None` if `token` is not one
/// of the row's source contractions. A possessive "'s" is never one.
pub fn replace_contraction(
    agreement: &Agreement,
    tokens: &[Token],
    token: &Token,
    rules: &dyn AgreementRules,
) -> Option<String> {
    if token.tag == POSSESSIVE || token.pos == "PART" {
        return None;
    }
    let target = agreement.contractions.get(&token.lower())?;
    let replacement = match target {
        ContractionTarget::Fixed(form) => form,
        ContractionTarget::ByReading { be, have } => {
            match rules.contraction_reading(tokens, token.index) {
                Reading::Be => be,
                Reading::Have => have,
            }
        }
    };
    Some(replacement.to_lowercase())
}
