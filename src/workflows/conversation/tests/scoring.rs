use super::common::question;
use crate::workflows::conversation::evaluation::score_answer;

const EPSILON: f64 = 1e-9;

#[test]
fn answer_without_expected_phrases_scores_zero() {
    let question = question("q", &["docker", "kubernetes", "api"], 0.5);

    let scored = score_answer(&question, "I mostly write firmware in C");

    assert_eq!(scored.matched_keywords, 0);
    assert_eq!(scored.total_keywords, 3);
    assert_eq!(scored.points, 0.0);
    assert_eq!(scored.match_ratio(), 0.0);
}

#[test]
fn answer_with_every_phrase_scores_full_weight() {
    let question = question("q", &["docker", "kubernetes", "api"], 0.5);

    let scored = score_answer(&question, "docker and kubernetes behind an api");

    assert_eq!(scored.matched_keywords, 3);
    assert!((scored.match_ratio() - 1.0).abs() < EPSILON);
    assert!((scored.points - 50.0).abs() < EPSILON);
}

#[test]
fn matching_is_case_insensitive() {
    let question = question("q", &["Docker", "API"], 1.0);

    let scored = score_answer(&question, "DOCKER containers serving an api");

    assert_eq!(scored.matched_keywords, 2);
}

#[test]
fn repeated_phrases_count_once() {
    let question = question("q", &["docker"], 1.0);

    let scored = score_answer(&question, "docker docker docker everywhere");

    assert_eq!(scored.matched_keywords, 1);
    assert!((scored.points - 100.0).abs() < EPSILON);
}

#[test]
fn multi_word_phrases_match_as_substrings() {
    let question = question("q", &["cloud run", "lambda"], 1.0);

    let scored = score_answer(&question, "we deployed to cloud run last year");

    assert_eq!(scored.matched_keywords, 1);
}

#[test]
fn question_without_keywords_scores_zero_by_convention() {
    let question = question("q", &[], 0.8);

    let scored = score_answer(&question, "anything at all");

    assert_eq!(scored.total_keywords, 0);
    assert_eq!(scored.points, 0.0);
    assert_eq!(scored.match_ratio(), 0.0);
}

#[test]
fn five_of_six_phrases_at_quarter_weight() {
    let question = question(
        "microservices",
        &["microservices", "docker", "kubernetes", "api", "scalable", "distributed"],
        0.25,
    );

    let scored = score_answer(
        &question,
        "I built microservices on docker and kubernetes, exposing a scalable api",
    );

    assert_eq!(scored.matched_keywords, 5);
    assert!((scored.match_ratio() - 5.0 / 6.0).abs() < EPSILON);
    assert!((scored.points - 20.833333333333336).abs() < 1e-6);
}

#[test]
fn scoring_is_deterministic_for_identical_input() {
    let question = question("q", &["rust", "tokio"], 0.7);

    let first = score_answer(&question, "rust services on tokio");
    let second = score_answer(&question, "rust services on tokio");

    assert_eq!(first, second);
}
