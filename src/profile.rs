//! Transformation profiles: one immutable table per person/number/gender direction.
//!
//! A profile aligns a ten-slot source vocabulary with a ten-slot target
//! vocabulary (see [`crate::person`]) and carries, per number row, the verb
//! agreement data needed to re-inflect copulas, auxiliaries and contractions.
//!
//! ```text
//! first-to-second
//!   i    me   my    mine  myself      we   us   our   ours  ourselves
//!   you  you  your  yours yourself    you  you  your  yours yourselves
//!   'm -> 're, 'm/'re verbs inflected with VBP form 1 (are, were)
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::person::{
    self, Number, Slot, FIRST_PLURAL, FIRST_SINGULAR, SECOND_PLURAL, SECOND_SINGULAR,
    SLOT_COUNT, THIRD_FEMININE, THIRD_MASCULINE, THIRD_PLURAL,
};
use crate::ProfileError;

/// Replacement for a source contraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContractionTarget {
    /// Always replaced by the same form ("'m" -> "'re")
    Fixed(String),
    /// Replacement depends on whether the contraction reads as "be" or "have"
    /// ("'s" -> "'m" in "he's going", "'ve" in "he's gone")
    ByReading { be: String, have: String },
}

/// Verb agreement data for one number row of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agreement {
    /// Present-tense tag agreeing with the source pronouns
    pub source_tag: String,
    /// Present-tense tag agreeing with the target pronouns
    pub target_tag: String,
    /// Form selector for main-clause verbs
    #[serde(default)]
    pub main_form: usize,
    /// Form selector for verbs of a coordinate clause
    #[serde(default)]
    pub conjunct_form: usize,
    #[serde(default)]
    pub contractions: BTreeMap<String, ContractionTarget>,
}

/// How verbs agree with one row of pronouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerbPerson {
    /// I am / I was / I'm / I've
    FirstSingular,
    /// he is / he was / he's
    ThirdSingular,
    /// you, we, they: are / were / 're / 've
    Other,
}

impl VerbPerson {
    fn present_tag(self) -> &'static str {
        match self {
            VerbPerson::ThirdSingular => "VBZ",
            VerbPerson::FirstSingular | VerbPerson::Other => "VBP",
        }
    }

    /// Selector into the copula alternatives (am|are, was|were).
    fn be_form(self) -> usize {
        match self {
            VerbPerson::FirstSingular | VerbPerson::ThirdSingular => 0,
            VerbPerson::Other => 1,
        }
    }

    fn be_contraction(self) -> &'static str {
        match self {
            VerbPerson::FirstSingular => "'m",
            VerbPerson::ThirdSingular => "'s",
            VerbPerson::Other => "'re",
        }
    }

    fn have_contraction(self) -> &'static str {
        match self {
            VerbPerson::ThirdSingular => "'s",
            VerbPerson::FirstSingular | VerbPerson::Other => "'ve",
        }
    }
}

impl Agreement {
    fn between(source: VerbPerson, target: VerbPerson) -> Self {
        let mut contractions = BTreeMap::new();
        let be = target.be_contraction();
        let have = target.have_contraction();

        if source == VerbPerson::ThirdSingular {
            let entry = if be == have {
                ContractionTarget::Fixed(be.to_string())
            } else {
                ContractionTarget::ByReading {
                    be: be.to_string(),
                    have: have.to_string(),
                }
            };
            contractions.insert(source.be_contraction().to_string(), entry);
        } else {
            contractions.insert(
                source.be_contraction().to_string(),
                ContractionTarget::Fixed(be.to_string()),
            );
            contractions.insert(
                source.have_contraction().to_string(),
                ContractionTarget::Fixed(have.to_string()),
            );
        }
        contractions.retain(|from, to| *to != ContractionTarget::Fixed(from.clone()));

        Self {
            source_tag: source.present_tag().to_string(),
            target_tag: target.present_tag().to_string(),
            main_form: target.be_form(),
            conjunct_form: target.be_form(),
            contractions,
        }
    }
}

/// One side of a direction: a singular and a plural paradigm row.
#[derive(Debug, Clone, Copy)]
struct Voice {
    singular: ([&'static str; 5], VerbPerson),
    plural: ([&'static str; 5], VerbPerson),
}

const FIRST: Voice = Voice {
    singular: (FIRST_SINGULAR, VerbPerson::FirstSingular),
    plural: (FIRST_PLURAL, VerbPerson::Other),
};
const FIRST_SINGULAR_ONLY: Voice = Voice {
    singular: (FIRST_SINGULAR, VerbPerson::FirstSingular),
    plural: (FIRST_SINGULAR, VerbPerson::FirstSingular),
};
const FIRST_PLURAL_ONLY: Voice = Voice {
    singular: (FIRST_PLURAL, VerbPerson::Other),
    plural: (FIRST_PLURAL, VerbPerson::Other),
};
const SECOND: Voice = Voice {
    singular: (SECOND_SINGULAR, VerbPerson::Other),
    plural: (SECOND_PLURAL, VerbPerson::Other),
};
const SECOND_SINGULAR_ONLY: Voice = Voice {
    singular: (SECOND_SINGULAR, VerbPerson::Other),
    plural: (SECOND_SINGULAR, VerbPerson::Other),
};
const THIRD_MASCULINE_GROUP: Voice = Voice {
    singular: (THIRD_MASCULINE, VerbPerson::ThirdSingular),
    plural: (THIRD_PLURAL, VerbPerson::Other),
};
const THIRD_FEMININE_GROUP: Voice = Voice {
    singular: (THIRD_FEMININE, VerbPerson::ThirdSingular),
    plural: (THIRD_PLURAL, VerbPerson::Other),
};
const THIRD_MASCULINE_ONLY: Voice = Voice {
    singular: (THIRD_MASCULINE, VerbPerson::ThirdSingular),
    plural: (THIRD_MASCULINE, VerbPerson::ThirdSingular),
};
const THIRD_FEMININE_ONLY: Voice = Voice {
    singular: (THIRD_FEMININE, VerbPerson::ThirdSingular),
    plural: (THIRD_FEMININE, VerbPerson::ThirdSingular),
};

/// An immutable, shareable transformation table.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformationProfile {
    name: String,
    source: Vec<String>,
    target: Vec<String>,
    agreement: [Agreement; 2],
    /// Source word -> every slot position it occupies
    positions: HashMap<String, Vec<usize>>,
}

impl TransformationProfile {
    /// Build a profile, checking that both vocabularies have ten aligned slots.
    pub fn new(
        name: impl Into<String>,
        source: Vec<String>,
        target: Vec<String>,
        singular: Agreement,
        plural: Agreement,
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        for (which, vocab) in [("source", &source), ("target", &target)] {
            if vocab.len() != SLOT_COUNT {
                return Err(ProfileError::SlotCount {
                    profile: name,
                    which,
                    found: vocab.len(),
                    expected: SLOT_COUNT,
                });
            }
            if let Some(position) = vocab.iter().position(|word| word.trim().is_empty()) {
                return Err(ProfileError::EmptySlot {
                    profile: name,
                    position,
                });
            }
        }

        Ok(Self::assemble(name, source, target, [singular, plural]))
    }

    fn assemble(
        name: String,
        source: Vec<String>,
        target: Vec<String>,
        agreement: [Agreement; 2],
    ) -> Self {
        let source: Vec<String> = source.iter().map(|w| w.to_lowercase()).collect();
        let mut positions: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, word) in source.iter().enumerate() {
            positions.entry(word.clone()).or_default().push(position);
        }

        Self {
            name,
            source,
            target,
            agreement,
            positions,
        }
    }

    fn from_voices(direction: Direction, source: Voice, target: Voice) -> Self {
        let mut agreement = [
            Agreement::between(source.singular.1, target.singular.1),
            Agreement::between(source.plural.1, target.plural.1),
        ];
        if direction.keeps_conjunct_form() {
            for row in &mut agreement {
                row.conjunct_form = VerbPerson::Other.be_form();
            }
        }

        Self::assemble(
            direction.name().to_string(),
            person::vocabulary(source.singular.0, source.plural.0),
            person::vocabulary(target.singular.0, target.plural.0),
            agreement,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &[String] {
        &self.source
    }

    pub fn target(&self) -> &[String] {
        &self.target
    }

    pub fn agreement(&self, number: Number) -> &Agreement {
        &self.agreement[number.row()]
    }

    /// Whether a lowercased word belongs to the source vocabulary.
    pub fn is_source_word(&self, lower: &str) -> bool {
        self.positions.contains_key(lower)
    }

    /// Every slot position a lowercased source word occupies, in order.
    pub fn positions_of(&self, lower: &str) -> &[usize] {
        self.positions.get(lower).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Target word aligned with a slot.
    pub fn target_for(&self, slot: Slot) -> &str {
        &self.target[slot.position()]
    }

    /// Number row of the first slot holding a source word.
    pub fn number_of(&self, lower: &str) -> Option<Number> {
        self.positions_of(lower)
            .first()
            .and_then(|&position| Slot::from_position(position))
            .map(|slot| slot.number)
    }
}

/// The built-in transformation directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    FirstToSecond,
    FirstToThirdMasculine,
    FirstToThirdFeminine,
    SecondToFirstSingular,
    SecondToFirstPlural,
    SecondToThirdMasculine,
    SecondToThirdFeminine,
    ThirdMasculineToFirst,
    ThirdFeminineToFirst,
    ThirdMasculineToSecond,
    ThirdFeminineToSecond,
    ThirdMasculineToThirdFeminine,
    ThirdFeminineToThirdMasculine,
}

static BUILT_IN: Lazy<Vec<TransformationProfile>> = Lazy::new(|| {
    Direction::ALL
        .iter()
        .map(|&direction| {
            let (source, target) = direction.voices();
            TransformationProfile::from_voices(direction, source, target)
        })
        .collect()
});

impl Direction {
    pub const ALL: [Direction; 13] = [
        Direction::FirstToSecond,
        Direction::FirstToThirdMasculine,
        Direction::FirstToThirdFeminine,
        Direction::SecondToFirstSingular,
        Direction::SecondToFirstPlural,
        Direction::SecondToThirdMasculine,
        Direction::SecondToThirdFeminine,
        Direction::ThirdMasculineToFirst,
        Direction::ThirdFeminineToFirst,
        Direction::ThirdMasculineToSecond,
        Direction::ThirdFeminineToSecond,
        Direction::ThirdMasculineToThirdFeminine,
        Direction::ThirdFeminineToThirdMasculine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::FirstToSecond => "first-to-second",
            Direction::FirstToThirdMasculine => "first-to-third-masculine",
            Direction::FirstToThirdFeminine => "first-to-third-feminine",
            Direction::SecondToFirstSingular => "second-to-first-singular",
            Direction::SecondToFirstPlural => "second-to-first-plural",
            Direction::SecondToThirdMasculine => "second-to-third-masculine",
            Direction::SecondToThirdFeminine => "second-to-third-feminine",
            Direction::ThirdMasculineToFirst => "third-masculine-to-first",
            Direction::ThirdFeminineToFirst => "third-feminine-to-first",
            Direction::ThirdMasculineToSecond => "third-masculine-to-second",
            Direction::ThirdFeminineToSecond => "third-feminine-to-second",
            Direction::ThirdMasculineToThirdFeminine => "third-masculine-to-third-feminine",
            Direction::ThirdFeminineToThirdMasculine => "third-feminine-to-third-masculine",
        }
    }

    fn voices(self) -> (Voice, Voice) {
        match self {
            Direction::FirstToSecond => (FIRST, SECOND),
            Direction::FirstToThirdMasculine => (FIRST, THIRD_MASCULINE_GROUP),
            Direction::FirstToThirdFeminine => (FIRST, THIRD_FEMININE_GROUP),
            Direction::SecondToFirstSingular => (SECOND, FIRST_SINGULAR_ONLY),
            Direction::SecondToFirstPlural => (SECOND, FIRST_PLURAL_ONLY),
            Direction::SecondToThirdMasculine => (SECOND, THIRD_MASCULINE_GROUP),
            Direction::SecondToThirdFeminine => (SECOND, THIRD_FEMININE_GROUP),
            Direction::ThirdMasculineToFirst => (THIRD_MASCULINE_ONLY, FIRST_SINGULAR_ONLY),
            Direction::ThirdFeminineToFirst => (THIRD_FEMININE_ONLY, FIRST_SINGULAR_ONLY),
            Direction::ThirdMasculineToSecond => (THIRD_MASCULINE_ONLY, SECOND_SINGULAR_ONLY),
            Direction::ThirdFeminineToSecond => (THIRD_FEMININE_ONLY, SECOND_SINGULAR_ONLY),
            Direction::ThirdMasculineToThirdFeminine => {
                (THIRD_MASCULINE_ONLY, THIRD_FEMININE_ONLY)
            }
            Direction::ThirdFeminineToThirdMasculine => {
                (THIRD_FEMININE_ONLY, THIRD_MASCULINE_ONLY)
            }
        }
    }

    /// Coordinate verbs keep the second-person form ("I laugh and are happy").
    fn keeps_conjunct_form(self) -> bool {
        matches!(
            self,
            Direction::SecondToFirstSingular | Direction::SecondToFirstPlural
        )
    }

    /// The shared, immutable profile for this direction.
    pub fn profile(self) -> &'static TransformationProfile {
        let index = Direction::ALL
            .iter()
            .position(|&direction| direction == self)
            .unwrap_or(0);
        &BUILT_IN[index]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Direction::ALL
            .iter()
            .copied()
            .find(|direction| direction.name() == wanted)
            .ok_or_else(|| ProfileError::UnknownDirection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::SlotKind;

    fn fixed(s: &str) -> ContractionTarget {
        ContractionTarget::Fixed(s.to_string())
    }

    #[test]
    fn every_built_in_profile_is_aligned() {
        for direction in Direction::ALL {
            let profile = direction.profile();
            assert_eq!(profile.name(), direction.name());
            assert_eq!(profile.source().len(), SLOT_COUNT);
            assert_eq!(profile.target().len(), SLOT_COUNT);
        }
    }

    #[test]
    fn first_to_second_tables() {
        let profile = Direction::FirstToSecond.profile();
        assert!(profile.is_source_word("i"));
        assert!(profile.is_source_word("ourselves"));
        assert!(!profile.is_source_word("you"));
        assert_eq!(
            profile.target_for(Slot::new(SlotKind::Reflexive, Number::Plural)),
            "yourselves"
        );

        let singular = profile.agreement(Number::Singular);
        assert_eq!(singular.target_tag, "VBP");
        assert_eq!(singular.main_form, 1);
        assert_eq!(singular.contractions.get("'m"), Some(&fixed("'re")));
        // 've stays 've, so it is not listed
        assert_eq!(singular.contractions.get("'ve"), None);
        assert!(profile.agreement(Number::Plural).contractions.is_empty());
    }

    #[test]
    fn duplicate_source_words_keep_every_position() {
        let profile = Direction::SecondToFirstSingular.profile();
        assert_eq!(profile.positions_of("you"), &[0, 1, 5, 6]);
        assert_eq!(profile.positions_of("yourselves"), &[9]);
        assert_eq!(profile.number_of("you"), Some(Number::Singular));
        assert_eq!(profile.number_of("yourselves"), Some(Number::Plural));
        assert_eq!(profile.number_of("they"), None);
    }

    #[test]
    fn third_person_sources_disambiguate_apostrophe_s() {
        let profile = Direction::ThirdMasculineToFirst.profile();
        let agreement = profile.agreement(Number::Singular);
        assert_eq!(agreement.source_tag, "VBZ");
        assert_eq!(agreement.target_tag, "VBP");
        assert_eq!(
            agreement.contractions.get("'s"),
            Some(&ContractionTarget::ByReading {
                be: "'m".to_string(),
                have: "'ve".to_string(),
            })
        );

        let swap = Direction::ThirdMasculineToThirdFeminine.profile();
        assert!(swap.agreement(Number::Singular).contractions.is_empty());
    }

    #[test]
    fn first_to_third_agrees_per_number() {
        let profile = Direction::FirstToThirdFeminine.profile();
        let singular = profile.agreement(Number::Singular);
        assert_eq!(singular.target_tag, "VBZ");
        assert_eq!(singular.contractions.get("'m"), Some(&fixed("'s")));
        assert_eq!(singular.contractions.get("'ve"), Some(&fixed("'s")));

        let plural = profile.agreement(Number::Plural);
        assert_eq!(plural.target_tag, "VBP");
        assert_eq!(plural.main_form, 1);
        assert!(plural.contractions.is_empty());
    }

    #[test]
    fn second_to_first_keeps_the_conjunct_form() {
        let singular = Direction::SecondToFirstSingular
            .profile()
            .agreement(Number::Singular);
        assert_eq!(singular.main_form, 0);
        assert_eq!(singular.conjunct_form, 1);

        let other = Direction::FirstToSecond.profile().agreement(Number::Singular);
        assert_eq!(other.main_form, other.conjunct_form);
    }

    #[test]
    fn direction_names_parse() {
        for direction in Direction::ALL {
            assert_eq!(direction.name().parse::<Direction>().unwrap(), direction);
        }
        assert_eq!(
            "Second_To_Third_Feminine".parse::<Direction>().unwrap(),
            Direction::SecondToThirdFeminine
        );
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(ProfileError::UnknownDirection(_))
        ));
    }

    #[test]
    fn new_rejects_misaligned_vocabularies() {
        let agreement = Agreement::between(VerbPerson::Other, VerbPerson::Other);
        let err = TransformationProfile::new(
            "short",
            vec!["you".to_string()],
            person::vocabulary(FIRST_SINGULAR, FIRST_PLURAL),
            agreement.clone(),
            agreement,
        )
        .unwrap_err();
        assert!(matches!(err, ProfileError::SlotCount { found: 1, .. }));
    }
}
