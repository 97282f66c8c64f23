use super::ScoredAnswer;
use crate::workflows::conversation::domain::ScreeningQuestion;

/// Score one free-text answer against a question's expected keyword phrases.
///
/// Case-insensitive substring search; each phrase counts at most once no
/// matter how often it repeats. A question with no expected keywords scores
/// zero by convention. Pure and total, so scoring is reproducible for
/// identical input.
pub fn score_answer(question: &ScreeningQuestion, answer: &str) -> ScoredAnswer {
    let lowered = answer.to_lowercase();

    let total_keywords = question.expected_keywords.len();
    let matched_keywords = question
        .expected_keywords
        .iter()
        .filter(|phrase| lowered.contains(&phrase.to_lowercase()))
        .count();

    let match_ratio = if total_keywords == 0 {
        0.0
    } else {
        matched_keywords as f64 / total_keywords as f64
    };

    ScoredAnswer {
        question_id: question.question_id.clone(),
        answer: answer.to_string(),
        matched_keywords,
        total_keywords,
        points: match_ratio * question.weight * 100.0,
    }
}
