use crate::conllu::parse_conllu;
use crate::{Direction, PersonShifter, RewriteDisplay, RewriteOptions};

fn shift(direction: Direction, conllu: &str) -> String {
    let tokens = parse_conllu(conllu).unwrap();
    let rewrite = PersonShifter::for_direction(direction)
        .rewrite(&tokens, RewriteOptions::default())
        .unwrap();

    format!("{}\n=> {}", RewriteDisplay::new(&tokens, &rewrite), rewrite)
}

#[test]
fn apostrophe_s_before_a_participle_reads_as_have() {
    insta::assert_snapshot!(shift(Direction::ThirdMasculineToFirst, "
        1  He     he    PRON   PRP  Case=Nom|Person=3  3  nsubj  _  SpaceAfter=No
        2  's     have  AUX    VBZ  _                  3  aux    _  _
        3  gone   go    VERB   VBN  _                  0  ROOT   _  SpaceAfter=No
        4  .      .     PUNCT  .    _                  3  punct  _  _
    "), @r###"
    He  's     gone  .
    ╰╯Pronoun(subject-sg) "I"
        ╰╯Contraction "'ve"
    => I've gone.
    "###);
}

#[test]
fn apostrophe_s_before_a_gerund_reads_as_be() {
    insta::assert_snapshot!(shift(Direction::ThirdMasculineToFirst, "
        1  He     he    PRON   PRP  Case=Nom|Person=3  3  nsubj  _  SpaceAfter=No
        2  's     be    AUX    VBZ  _                  3  aux    _  _
        3  going  go    VERB   VBG  _                  0  ROOT   _  SpaceAfter=No
        4  .      .     PUNCT  .    _                  3  punct  _  _
    "), @r###"
    He  's     going  .
    ╰╯Pronoun(subject-sg) "I"
        ╰╯Contraction "'m"
    => I'm going.
    "###);
}

#[test]
fn first_person_contractions() {
    let im = "
        1  I     I     PRON   PRP  Case=Nom|Person=1  2  nsubj  _  SpaceAfter=No
        2  'm    be    AUX    VBP  _                  0  ROOT   _  _
        3  sure  sure  ADJ    JJ   _                  2  acomp  _  SpaceAfter=No
        4  .     .     PUNCT  .    _                  2  punct  _  _
    ";
    assert!(shift(Direction::FirstToSecond, im).ends_with("=> You're sure."));
    assert!(shift(Direction::FirstToThirdFeminine, im).ends_with("=> She's sure."));

    let weve = "
        1  We    we    PRON   PRP  Case=Nom|Person=1  3  nsubj  _  SpaceAfter=No
        2  've   have  AUX    VBP  _                  3  aux    _  _
        3  won   win   VERB   VBN  _                  0  ROOT   _  SpaceAfter=No
        4  .     .     PUNCT  .    _                  3  punct  _  _
    ";
    assert!(shift(Direction::FirstToThirdMasculine, weve).ends_with("=> They've won."));
}

#[test]
fn third_person_has_and_is_collapse_for_third_person_targets() {
    let text = shift(Direction::ThirdFeminineToThirdMasculine, "
        1  She    she   PRON   PRP  Case=Nom|Person=3  3  nsubj  _  SpaceAfter=No
        2  's     have  AUX    VBZ  _                  3  aux    _  _
        3  left   leave VERB   VBN  _                  0  ROOT   _  SpaceAfter=No
        4  .      .     PUNCT  .    _                  3  punct  _  _
    ");
    assert!(text.ends_with("=> He's left."), "{}", text);
}

#[test]
fn possessive_ending_near_a_pronoun_is_kept() {
    // "'s" is reached from "his" through its head "brother"
    let text = shift(Direction::ThirdMasculineToFirst, "
        1  He       he       PRON   PRP  Case=Nom|Person=3  2  nsubj  _  _
        2  took     take     VERB   VBD  _                  0  ROOT   _  _
        3  his      his      PRON   PRP$ Poss=Yes|Person=3  4  poss   _  _
        4  brother  brother  NOUN   NN   _                  6  poss   _  SpaceAfter=No
        5  's       's       PART   POS  _                  4  case   _  _
        6  car      car      NOUN   NN   _                  2  dobj   _  SpaceAfter=No
        7  .        .        PUNCT  .    _                  2  punct  _  _
    ");
    assert!(text.ends_with("=> I took my brother's car."), "{}", text);
}
