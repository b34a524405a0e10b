//! Grammatical person paradigms and the ten pronoun slots of a profile.
//!
//! A profile vocabulary is laid out as two rows of five slots:
//!
//! ```text
//! subject  object  poss-det  poss-pron  reflexive   <- singular (0..5)
//! subject  object  poss-det  poss-pron  reflexive   <- plural   (5..10)
//! ```

use std::fmt;

/// Number of slots in a profile vocabulary.
pub const SLOT_COUNT: usize = 10;

pub const FIRST_SINGULAR: [&str; 5] = ["i", "me", "my", "mine", "myself"];
pub const FIRST_PLURAL: [&str; 5] = ["we", "us", "our", "ours", "ourselves"];
pub const SECOND_SINGULAR: [&str; 5] = ["you", "you", "your", "yours", "yourself"];
pub const SECOND_PLURAL: [&str; 5] = ["you", "you", "your", "yours", "yourselves"];
pub const THIRD_MASCULINE: [&str; 5] = ["he", "him", "his", "his", "himself"];
pub const THIRD_FEMININE: [&str; 5] = ["she", "her", "her", "hers", "herself"];
pub const THIRD_PLURAL: [&str; 5] = ["they", "them", "their", "theirs", "themselves"];

/// Grammatical number of a slot row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    /// Row index into per-number tables.
    pub fn row(self) -> usize {
        match self {
            Number::Singular => 0,
            Number::Plural => 1,
        }
    }
}

/// The grammatical function of a pronoun slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// I, you, he, we
    Subject,
    /// me, you, him, us
    Object,
    /// my, your, his, our
    PossessiveDeterminer,
    /// mine, yours, his, ours
    PossessivePronoun,
    /// myself, yourself, ourselves
    Reflexive,
}

impl SlotKind {
    const ORDER: [SlotKind; 5] = [
        SlotKind::Subject,
        SlotKind::Object,
        SlotKind::PossessiveDeterminer,
        SlotKind::PossessivePronoun,
        SlotKind::Reflexive,
    ];
}

/// A position in a ten-slot vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub kind: SlotKind,
    pub number: Number,
}

impl Slot {
    pub fn new(kind: SlotKind, number: Number) -> Self {
        Self { kind, number }
    }

    /// The slot at a vocabulary position, or `None` past the last slot.
    pub fn from_position(position: usize) -> Option<Self> {
        if position >= SLOT_COUNT {
            return None;
        }
        let number = if position < 5 {
            Number::Singular
        } else {
            Number::Plural
        };
        Some(Self::new(SlotKind::ORDER[position % 5], number))
    }

    pub fn position(self) -> usize {
        let column = SlotKind::ORDER
            .iter()
            .position(|&kind| kind == self.kind)
            .unwrap_or(0);
        self.number.row() * 5 + column
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            SlotKind::Subject => "subject",
            SlotKind::Object => "object",
            SlotKind::PossessiveDeterminer => "poss-det",
            SlotKind::PossessivePronoun => "poss-pron",
            SlotKind::Reflexive => "reflexive",
        };
        let number = match self.number {
            Number::Singular => "sg",
            Number::Plural => "pl",
        };
        write!(f, "{}-{}", kind, number)
    }
}

/// Concatenate a singular and a plural paradigm into a ten-slot vocabulary.
pub fn vocabulary(singular: [&str; 5], plural: [&str; 5]) -> Vec<String> {
    singular
        .iter()
        .chain(plural.iter())
        .map(|word| word.to_string())
        .collect()
}
