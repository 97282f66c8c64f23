use std::collections::BTreeSet;

use super::common::new_session;
use crate::workflows::conversation::extraction::extract_facts;

#[test]
fn extracts_years_from_numeric_pattern() {
    assert_eq!(
        extract_facts("I have 7 years of experience").years_of_experience,
        Some(7)
    );
    assert_eq!(
        extract_facts("around 12 yrs in total").years_of_experience,
        Some(12)
    );
}

#[test]
fn conflicting_year_figures_leave_the_field_unset() {
    let facts = extract_facts("3 years at one shop and 5 years at another");
    assert_eq!(facts.years_of_experience, None);
}

#[test]
fn repeated_identical_year_figures_are_not_ambiguous() {
    let facts = extract_facts("5 years of python, 5 years of cloud work");
    assert_eq!(facts.years_of_experience, Some(5));
}

#[test]
fn extracts_skills_from_vocabulary() {
    let facts = extract_facts("Strong with Python, Docker and machine learning");
    assert!(facts.skills.contains(&"python".to_string()));
    assert!(facts.skills.contains(&"docker".to_string()));
    assert!(facts.skills.contains(&"machine learning".to_string()));
}

#[test]
fn extracts_current_role_from_phrase_marker() {
    let facts = extract_facts("I work as a data engineer. Mostly pipelines.");
    assert_eq!(facts.current_role, Some("data engineer".to_string()));
}

#[test]
fn messages_without_signal_extract_nothing() {
    let facts = extract_facts("Tell me more please");
    assert_eq!(facts.years_of_experience, None);
    assert_eq!(facts.current_role, None);
    assert!(facts.skills.is_empty());
    assert!(facts.is_empty());
}

#[test]
fn vocabulary_lookup_is_substring_based() {
    // Short tokens like "go" match anywhere in the text; the vocabulary
    // lookup makes no attempt at word boundaries.
    let facts = extract_facts("happy to go over my background");
    assert!(facts.skills.contains(&"go".to_string()));
}

#[test]
fn merge_overwrites_present_fields_and_unions_skills() {
    let mut session = new_session("session-merge");
    session.candidate.years_of_experience = Some(4);
    session.candidate.skills = BTreeSet::from(["python".to_string()]);

    extract_facts("Now 6 years in, mostly rust and docker").merge_into(&mut session.candidate);

    assert_eq!(session.candidate.years_of_experience, Some(6));
    let skills: Vec<&str> = session
        .candidate
        .skills
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(skills, vec!["docker", "python", "rust"]);
}

#[test]
fn merge_never_clears_existing_values() {
    let mut session = new_session("session-keep");
    session.candidate.years_of_experience = Some(9);
    session.candidate.current_role = Some("platform lead".to_string());

    extract_facts("Happy to elaborate on anything").merge_into(&mut session.candidate);

    assert_eq!(session.candidate.years_of_experience, Some(9));
    assert_eq!(
        session.candidate.current_role,
        Some("platform lead".to_string())
    );
}
