use crate::{
    load_fixture, run_all, run_fixture, Expectation, ExpectedFailures, FailureState,
    FixtureOutcome, PersonFixture,
};
use layered_person::Direction;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn fixture(name: &str) -> PersonFixture {
    load_fixture(&fixtures_dir().join(name))
        .unwrap_or_else(|err| panic!("Failed to load fixture {}: {}", name, err))
}

#[test]
fn test_copula_fixture() {
    let fixture = fixture("first-to-second-copula.conllu");

    assert_eq!(
        fixture.title.as_deref(),
        Some("First person to second person with a copula")
    );
    assert_eq!(fixture.direction, Direction::FirstToSecond);
    assert_eq!(run_fixture(&fixture).unwrap(), FixtureOutcome::Passed);
}

#[test]
fn test_quoted_speech_fixtures() {
    let excluded = fixture("quoted-speech.conllu");
    assert!(excluded.exclude_quotes);
    assert_eq!(run_fixture(&excluded).unwrap(), FixtureOutcome::Passed);

    let included = fixture("quoted-speech-included.conllu");
    assert!(!included.exclude_quotes);
    assert_eq!(run_fixture(&included).unwrap(), FixtureOutcome::Passed);
}

#[test]
fn test_ambiguous_role_fixture() {
    let fixture = fixture("ambiguous-role.conllu");
    assert_eq!(fixture.expectation, Expectation::AmbiguousRole);
    assert_eq!(run_fixture(&fixture).unwrap(), FixtureOutcome::Passed);
}

#[test]
fn test_wrong_expectations_are_reported() {
    let mut thank = fixture("ambiguous-role.conllu");
    thank.expectation = Expectation::Text("Thank me.".to_string());
    assert!(matches!(
        run_fixture(&thank).unwrap(),
        FixtureOutcome::UnexpectedError(message) if message.contains("\"dep\"")
    ));

    let mut copula = fixture("first-to-second-copula.conllu");
    copula.expectation = Expectation::AmbiguousRole;
    assert_eq!(
        run_fixture(&copula).unwrap(),
        FixtureOutcome::MissingError {
            actual: "You are happy.".to_string()
        }
    );
}

#[test]
fn test_negated_contraction_is_a_known_failure() {
    let fixture = fixture("negated-contraction.conllu");
    assert_eq!(
        run_fixture(&fixture).unwrap(),
        FixtureOutcome::Mismatch {
            expected: "I'm not here.".to_string(),
            actual: "I amn't here.".to_string(),
        }
    );

    let failures =
        ExpectedFailures::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("expected-failures.toml"))
            .unwrap();
    assert_eq!(
        failures.state_of("negated-contraction.conllu"),
        FailureState::Known
    );
}

// ============================================================================
// Whole-directory run
// ============================================================================

#[test]
fn test_all_fixtures_without_regressions() {
    let failures =
        ExpectedFailures::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("expected-failures.toml"))
            .unwrap();
    let report = run_all(&fixtures_dir(), &failures).unwrap();

    assert!(report.regressions.is_empty(), "{}", report.output);
    assert!(report.fixed.is_empty() && report.stale.is_empty(), "{}", report.output);
    assert!(report.result.success());
    assert_eq!(report.result.expected_failures, failures.count());
    assert_eq!(
        report.result.passed + report.result.expected_failures,
        report.result.total
    );
}

#[test]
fn test_unlisted_failures_are_regressions() {
    let report = run_all(&fixtures_dir(), &ExpectedFailures::default()).unwrap();

    assert_eq!(report.regressions, vec!["negated-contraction.conllu".to_string()]);
    assert_eq!(report.result.exit_code(), 1);
    assert!(report.output.contains("FAIL: negated-contraction.conllu"));
}

#[test]
fn test_listed_fixtures_that_pass_or_vanish_are_noted() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(
        fixtures_dir().join("first-to-second-copula.conllu"),
        dir.path().join("copula.conllu"),
    )
    .unwrap();
    let failures = ExpectedFailures::from_toml_str(
        r#"
[[pending]]
fixture = "copula.conllu"

[[known]]
fixture = "renamed.conllu"
"#,
    )
    .unwrap();

    let report = run_all(dir.path(), &failures).unwrap();
    assert!(report.result.success());
    assert_eq!(report.result.passed, 1);
    assert_eq!(report.fixed, vec!["copula.conllu".to_string()]);
    assert_eq!(report.stale, vec!["renamed.conllu".to_string()]);
    assert!(report
        .output
        .contains("note: copula.conllu passes; remove it from expected failures"));
}
