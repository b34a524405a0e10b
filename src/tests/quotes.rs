use crate::conllu::parse_conllu;
use crate::{Change, Direction, PersonShifter, RewriteDisplay, RewriteOptions};

const SAID_FINE: &str = r#"
    1   I     I     PRON   PRP  Case=Nom|Person=1  2  nsubj  _  _
    2   said  say   VERB   VBD  _                  0  ROOT   _  _
    3   "     "     PUNCT  ``   _                  2  punct  _  SpaceAfter=No
    4   I     I     PRON   PRP  Case=Nom|Person=1  5  nsubj  _  _
    5   am    be    AUX    VBP  _                  2  ccomp  _  _
    6   fine  fine  ADJ    JJ   _                  5  acomp  _  SpaceAfter=No
    7   "     "     PUNCT  ''   _                  2  punct  _  _
    8   to    to    ADP    IN   _                  2  prep   _  _
    9   her   she   PRON   PRP  Case=Acc|Person=3  8  pobj   _  SpaceAfter=No
    10  .     .     PUNCT  .    _                  2  punct  _  _
"#;

#[test]
fn quoted_speech_is_left_alone() {
    let tokens = parse_conllu(SAID_FINE).unwrap();
    let rewrite = PersonShifter::for_direction(Direction::FirstToSecond)
        .rewrite(&tokens, RewriteOptions::default())
        .unwrap();

    insta::assert_snapshot!(RewriteDisplay::new(&tokens, &rewrite).show_quoted(), @r###"
    I     said     "  I     am     fine  "     to     her  .
    ╰Pronoun(subject-sg) "You"
                   ╰Quoted
                      ╰Quoted
                            ╰╯Quoted
                                   ╰──╯Quoted
    "###);
    assert_eq!(rewrite.text(), r#"You said "I am fine" to her."#);
}

#[test]
fn quotes_can_be_included() {
    let tokens = parse_conllu(SAID_FINE).unwrap();
    let rewrite = PersonShifter::for_direction(Direction::FirstToSecond)
        .rewrite(&tokens, RewriteOptions::include_quotes())
        .unwrap();

    assert_eq!(rewrite.text(), r#"You said "you are fine" to her."#);
    assert!(rewrite
        .edits()
        .iter()
        .all(|edit| edit.change != Change::Quoted));
}

#[test]
fn unbalanced_quote_leaves_the_tail_untouched() {
    let tokens = parse_conllu(
        r#"
        1  He    he    PRON   PRP  Case=Nom|Person=3  2  nsubj  _  _
        2  said  say   VERB   VBD  _                  0  ROOT   _  _
        3  "     "     PUNCT  ``   _                  2  punct  _  SpaceAfter=No
        4  I     I     PRON   PRP  Case=Nom|Person=1  5  nsubj  _  _
        5  am    be    AUX    VBP  _                  2  ccomp  _  SpaceAfter=No
        6  .     .     PUNCT  .    _                  2  punct  _  _
        "#,
    )
    .unwrap();

    let rewrite = PersonShifter::for_direction(Direction::FirstToSecond)
        .rewrite(&tokens, RewriteOptions::default())
        .unwrap();
    assert_eq!(rewrite.text(), r#"He said "I am."#);
    assert_eq!(rewrite.changed_count(), 0);
}

#[test]
fn unclosed_quote_runs_across_sentences() {
    let tokens = parse_conllu(
        r#"
        1  "     "     PUNCT  ``   _                  3  punct  _  SpaceAfter=No
        2  I     I     PRON   PRP  Case=Nom|Person=1  3  nsubj  _  _
        3  am    be    AUX    VBP  _                  0  ROOT   _  SpaceAfter=No
        4  .     .     PUNCT  .    _                  3  punct  _  _

        1  I     I     PRON   PRP  Case=Nom|Person=1  2  nsubj  _  _
        2  am    be    AUX    VBP  _                  0  ROOT   _  SpaceAfter=No
        3  .     .     PUNCT  .    _                  2  punct  _  _
        "#,
    )
    .unwrap();

    let rewrite = PersonShifter::for_direction(Direction::FirstToSecond)
        .rewrite(&tokens, RewriteOptions::default())
        .unwrap();
    assert_eq!(rewrite.text(), r#""I am. I am."#);
    assert_eq!(rewrite.changed_count(), 0);
}
