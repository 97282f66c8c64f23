mod policy;
mod scorer;

pub use policy::SuitabilityTier;
pub use scorer::score_answer;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{QuestionId, ScreeningQuestion};

/// Outcome of scoring one answer against one screening question. Created at
/// most once per question per session and never revised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question_id: QuestionId,
    pub answer: String,
    pub matched_keywords: usize,
    pub total_keywords: usize,
    pub points: f64,
}

impl ScoredAnswer {
    pub fn match_ratio(&self) -> f64 {
        if self.total_keywords == 0 {
            0.0
        } else {
            self.matched_keywords as f64 / self.total_keywords as f64
        }
    }
}

/// Aggregate suitability verdict. Computed at most once per session and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub overall_percentage: f64,
    pub tier: SuitabilityTier,
    pub answered_count: usize,
    pub question_count: usize,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendation: String,
}

/// Aggregate all scored answers into the overall verdict.
///
/// Only answered questions contribute: their points sum into the numerator
/// and their weights form the denominator, so unanswered questions neither
/// add nor dilute the percentage. An empty answer set evaluates to zero.
pub fn evaluate(
    questions: &[ScreeningQuestion],
    answers: &BTreeMap<QuestionId, ScoredAnswer>,
) -> EvaluationResult {
    let mut total_points = 0.0;
    let mut max_points = 0.0;
    let mut answered_count = 0;

    for question in questions {
        if let Some(answer) = answers.get(&question.question_id) {
            total_points += answer.points;
            max_points += question.weight * 100.0;
            answered_count += 1;
        }
    }

    let overall_percentage = if max_points > 0.0 {
        round2(total_points / max_points * 100.0)
    } else {
        0.0
    };

    let tier = policy::tier_for(overall_percentage);
    let (strengths, concerns) = policy::annotate(questions, answers);

    EvaluationResult {
        overall_percentage,
        tier,
        answered_count,
        question_count: questions.len(),
        strengths,
        concerns,
        recommendation: policy::recommendation_for(tier).to_string(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
