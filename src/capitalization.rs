//! Reapplying a token's original case pattern to replacement text.

use unicode_segmentation::UnicodeSegmentation;

use crate::Token;

/// Restore the look of `token` on its lowercase `replacement`.
///
/// Unchanged words (case-insensitively) come back verbatim. Otherwise the
/// token's case shape is applied, with two exceptions for the word "I": an
/// original "I" is lowercased mid-sentence and titled at a sentence start,
/// and a replacement that ends up as "i" is always "I".
pub fn preserve_case(replacement: &str, token: &Token) -> String {
    if replacement.to_lowercase() == token.lower() {
        return token.text.clone();
    }

    let mut text = if token.case.lower {
        replacement.to_lowercase()
    } else if token.case.upper {
        replacement.to_uppercase()
    } else if token.case.title {
        title_case(replacement)
    } else {
        replacement.to_string()
    };

    // "I" is upper and title regardless of position, so its flags say nothing.
    if token.lower() == "i" {
        text = if token.index == 0 || token.is_sent_start {
            title_case(&text)
        } else {
            text.to_lowercase()
        };
    }

    if text == "i" {
        text = "I".to_string();
    }
    text
}

/// Uppercase the first character of every word segment, lowercase the rest.
pub fn title_case(text: &str) -> String {
    text.split_word_bounds()
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
