//! Verb inflection: the [`Inflector`] seam and a small English lexicon.

use crate::Token;

/// Produces inflected surface forms for a token's lemma.
///
/// `form` selects among alternative realizations of the same tag, e.g. for
/// `be`/`VBP` form 0 is "am" and form 1 is "are". Returns `None` when the
/// lemma has no form for the tag.
pub trait Inflector {
    fn inflect(&self, token: &Token, tag: &str, form: usize) -> Option<String>;
}

impl<I: Inflector + ?Sized> Inflector for &I {
    fn inflect(&self, token: &Token, tag: &str, form: usize) -> Option<String> {
        (**self).inflect(token, tag, form)
    }
}

/// Irregular (lemma, tag) alternatives.
fn irregular(lemma: &str, tag: &str) -> Option<&'static [&'static str]> {
    let forms: &'static [&'static str] = match (lemma, tag) {
        ("be", "VB") => &["be"],
        ("be", "VBP") => &["am", "are"],
        ("be", "VBZ") => &["is"],
        ("be", "VBD") => &["was", "were"],
        ("be", "VBN") => &["been"],
        ("be", "VBG") => &["being"],
        ("have", "VBZ") => &["has"],
        ("have", "VBD") | ("have", "VBN") => &["had"],
        ("do", "VBZ") => &["does"],
        ("do", "VBD") => &["did"],
        ("do", "VBN") => &["done"],
        ("go", "VBZ") => &["goes"],
        ("go", "VBD") => &["went"],
        ("go", "VBN") => &["gone"],
        _ => return None,
    };
    Some(forms)
}

/// Table-driven English inflector.
///
/// Knows the full paradigm of `be` and the irregular present/past forms of
/// `have`, `do` and `go`; other verbs get regular present-tense forms
/// (`VB`/`VBP` = lemma, `VBZ` = lemma + s/es/ies). Past forms of regular
/// verbs and modals are not produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconInflector;

impl LexiconInflector {
    pub fn new() -> Self {
        Self
    }

    fn lemma_of(token: &Token) -> String {
        let lemma = token.lemma.trim();
        if lemma.is_empty() || lemma == "_" {
            token.lower()
        } else {
            lemma.to_lowercase()
        }
    }
}

impl Inflector for LexiconInflector {
    fn inflect(&self, token: &Token, tag: &str, form: usize) -> Option<String> {
        if tag == "MD" {
            return None;
        }
        let lemma = Self::lemma_of(token);

        if let Some(forms) = irregular(&lemma, tag) {
            return forms.get(form).or_else(|| forms.first()).map(|s| s.to_string());
        }
        if lemma == "be" || !lemma.chars().all(char::is_alphabetic) {
            return None;
        }

        match tag {
            "VB" | "VBP" => Some(lemma),
            "VBZ" => Some(third_singular(&lemma)),
            _ => None,
        }
    }
}

/// Regular third-person singular present: run -> runs, watch -> watches, try -> tries.
fn third_singular(lemma: &str) -> String {
    let sibilant = ["s", "x", "z", "ch", "sh", "o"];
    if sibilant.iter().any(|end| lemma.ends_with(end)) {
        return format!("{}es", lemma);
    }
    let mut chars = lemma.chars().rev();
    if let (Some('y'), Some(before)) = (chars.next(), chars.next()) {
        if !"aeiou".contains(before) {
            return format!("{}ies", &lemma[..lemma.len() - 1]);
        }
    }
    format!("{}s", lemma)
}
