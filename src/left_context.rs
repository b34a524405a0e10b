//! Shallow search for a source pronoun governing the current token.
//!
//! Looks at the token's own left dependents, then at the left dependents of
//! its nearest ancestor, and stops there:
//!
//! ```text
//! I   am   happy        "am" has left dependent "I"
//! He  is   running      "is" has none, its head "running" has "He"
//! ```
//!
//! Matching is on original text, so a pronoun that was already rewritten
//! still matches; the rewriter additionally carries a flag for the token
//! right after a rewritten pronoun.

use crate::Token;

/// First left dependent of `token` (or of its nearest ancestor) whose
/// lowercased text satisfies `in_vocabulary`.
pub fn find_left_antecedent<'t>(
    tokens: &'t [Token],
    token: &Token,
    in_vocabulary: impl Fn(&str) -> bool,
) -> Option<&'t Token> {
    let matching_left = |owner: &Token| {
        owner
            .lefts
            .iter()
            .filter_map(|&index| tokens.get(index))
            .find(|left| in_vocabulary(&left.lower()))
    };

    matching_left(token).or_else(|| {
        token
            .ancestors
            .first()
            .and_then(|&index| tokens.get(index))
            .and_then(matching_left)
    })
}
