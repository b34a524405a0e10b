use crate::conllu::parse_conllu;
use crate::{Direction, PersonShifter, RewriteDisplay, RewriteOptions, TransformError};

fn shift(direction: Direction, conllu: &str) -> Result<String, TransformError> {
    let tokens = parse_conllu(conllu).unwrap();
    let rewrite = PersonShifter::for_direction(direction)
        .rewrite(&tokens, RewriteOptions::default())?;

    Ok(format!("{}\n=> {}", RewriteDisplay::new(&tokens, &rewrite), rewrite))
}

#[test]
fn you_as_object() {
    insta::assert_snapshot!(shift(Direction::SecondToFirstSingular, "
        1  They  they  PRON   PRP  Case=Nom|Person=3  2  nsubj  _  _
        2  saw   see   VERB   VBD  _                  0  ROOT   _  _
        3  you   you   PRON   PRP  Person=2           2  dobj   _  SpaceAfter=No
        4  .     .     PUNCT  .    _                  2  punct  _  _
    ").unwrap(), @r###"
    They     saw     you  .
                     ╰─╯Pronoun(object-sg) "me"
    => They saw me.
    "###);
}

#[test]
fn accusative_conjunct_is_an_object() {
    let text = shift(Direction::SecondToFirstPlural, "
        1  She     she    PRON   PRP  Case=Nom|Person=3  2  nsubj  _  _
        2  called  call   VERB   VBD  _                  0  ROOT   _  _
        3  Tom     Tom    PROPN  NNP  _                  2  dobj   _  _
        4  and     and    CCONJ  CC   _                  3  cc     _  _
        5  you     you    PRON   PRP  Case=Acc|Person=2  3  conj   _  SpaceAfter=No
        6  .       .      PUNCT  .    _                  2  punct  _  _
    ")
    .unwrap();
    assert!(text.ends_with("=> She called Tom and us."), "{}", text);
}

#[test]
fn possessive_determiner_and_object_her() {
    insta::assert_snapshot!(shift(Direction::ThirdFeminineToFirst, "
        1  She   she   PRON   PRP   Case=Nom|Gender=Fem|Person=3  2  nsubj  _  _
        2  gave  give  VERB   VBD   _                             0  ROOT   _  _
        3  her   she   PRON   PRP$  Poss=Yes|Person=3             4  poss   _  _
        4  book  book  NOUN   NN    _                             2  dobj   _  _
        5  to    to    ADP    IN    _                             2  prep   _  _
        6  her   she   PRON   PRP   Case=Acc|Person=3             5  pobj   _  SpaceAfter=No
        7  .     .     PUNCT  .     _                             2  punct  _  _
    ").unwrap(), @r###"
    She     gave     her     book     to     her  .
    ╰─╯Pronoun(subject-sg) "I"
                     ╰─╯Pronoun(poss-det-sg) "my"
                                             ╰─╯Pronoun(object-sg) "me"
    => I gave my book to me.
    "###);
}

#[test]
fn standalone_his_is_a_possessive_pronoun() {
    let text = shift(Direction::ThirdMasculineToSecond, "
        1  The   the   DET    DT   _  2  det    _  _
        2  car   car   NOUN   NN   _  3  nsubj  _  _
        3  is    be    AUX    VBZ  _  0  ROOT   _  _
        4  his   he    PRON   PRP  Poss=Yes|Person=3  3  attr  _  SpaceAfter=No
        5  .     .     PUNCT  .    _  3  punct  _  _
    ")
    .unwrap();
    assert!(text.ends_with("=> The car is yours."), "{}", text);
}

#[test]
fn unknown_role_is_an_error() {
    let err = shift(Direction::SecondToFirstSingular, "
        1  Thank  thank  VERB   VBP  _         0  ROOT   _  _
        2  you    you    PRON   PRP  Person=2  1  dep    _  SpaceAfter=No
        3  .      .      PUNCT  .    _         1  punct  _  _
    ")
    .unwrap_err();

    assert!(err.is_ambiguous_role());
    insta::assert_snapshot!(err.to_string(), @r###"cannot resolve the role of "you" (token 1): dependency label "dep" is neither subject nor object"###);
}

#[test]
fn unambiguous_words_ignore_the_label() {
    // "me" has a single target, so an unhelpful label does not matter
    let text = shift(Direction::FirstToThirdMasculine, "
        1  Thank  thank  VERB   VBP  _         0  ROOT   _  _
        2  me     I      PRON   PRP  Person=1  1  dep    _  SpaceAfter=No
        3  .      .      PUNCT  .    _         1  punct  _  _
    ")
    .unwrap();
    assert!(text.ends_with("=> Thank him."), "{}", text);
}
