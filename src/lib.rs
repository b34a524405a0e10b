#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Grammatical person rewriting for dependency-parsed English.
//!
//! Given a parsed sentence and a [`TransformationProfile`] (for example
//! first person to second person), [`PersonShifter`] replaces every pronoun
//! of the source person with the pronoun of the target person in the same
//! slot, and re-inflects the verbs and contractions that agree with it:
//!
//! ```text
//! I    am   happy  .      first person
//! You  are  happy  .      second person
//! ```
//!
//! ## Pipeline
//!
//! - A [`Parser`] produces [`Token`]s carrying dependency labels, morphology
//!   and head relations. [`conllu::ConlluParser`] reads pre-annotated
//!   CoNLL-U; [`DocBuilder`] builds tokens by hand.
//! - The classifier maps each source pronoun to one of the ten slots of the
//!   profile, using the dependency label when a word is ambiguous ("you" as
//!   subject or object, "her" as object or possessive).
//! - Verbs governed by a rewritten pronoun are re-inflected through an
//!   [`Inflector`]; contractions ("'m", "'s", "'ve") are swapped from the
//!   profile's table.
//! - Text between quote delimiters is left alone unless
//!   [`RewriteOptions::include_quotes`] is used.
//!
//! Original capitalization and whitespace are preserved token by token.
//!
//! ## Usage
//!
//! ```
//! use layered_person::{Direction, DocBuilder, PersonShifter, RawToken, RewriteOptions};
//!
//! let tokens = DocBuilder::new()
//!     .push(RawToken::new("I").pos("PRON").tag("PRP").feat("Person", "1").dep("nsubj", Some(1)))
//!     .push(RawToken::new("am").lemma("be").pos("AUX").tag("VBP").dep("ROOT", None))
//!     .push(RawToken::new("happy").pos("ADJ").tag("JJ").dep("acomp", Some(1)).no_space())
//!     .push(RawToken::new(".").pos("PUNCT").tag(".").dep("punct", Some(1)).no_space())
//!     .build()
//!     .unwrap();
//!
//! let rewrite = PersonShifter::for_direction(Direction::FirstToThirdFeminine)
//!     .rewrite(&tokens, RewriteOptions::default())
//!     .unwrap();
//! assert_eq!(rewrite.text(), "She is happy.");
//! ```

mod agreement;
mod capitalization;
mod classifier;
mod config;
pub mod conllu;
mod contraction;
mod display;
mod errors;
mod inflect;
mod left_context;
mod parser;
pub mod person;
mod profile;
mod quote;
mod rewriter;
mod token;


pub use agreement::{AgreementRules, StandardRules};
pub use capitalization::preserve_case;
pub use classifier::{classify, PronounMatch};
pub use config::{ProfileConfig, ProfileSet};
pub use contraction::Reading;
pub use display::RewriteDisplay;
pub use errors::{ProfileError, TransformError, TransformResult};
pub use inflect::{Inflector, LexiconInflector};
pub use left_context::find_left_antecedent;
pub use parser::Parser;
pub use person::{Number, Slot, SlotKind};
pub use profile::{Agreement, ContractionTarget, Direction, TransformationProfile};
pub use quote::QuoteSpan;
pub use rewriter::{Change, PersonShifter, Rewrite, RewriteOptions, TokenEdit};
pub use token::{CaseShape, DocBuilder, HeadOutOfRange, Morphology, RawToken, Token};
