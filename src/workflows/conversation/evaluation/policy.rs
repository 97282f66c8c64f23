use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ScoredAnswer;
use crate::workflows::conversation::domain::{QuestionId, ScreeningQuestion};

/// Discrete suitability bucket derived from the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityTier {
    Low,
    Medium,
    High,
}

impl SuitabilityTier {
    pub const fn label(self) -> &'static str {
        match self {
            SuitabilityTier::Low => "low",
            SuitabilityTier::Medium => "medium",
            SuitabilityTier::High => "high",
        }
    }
}

const HIGH_THRESHOLD: f64 = 70.0;
const MEDIUM_THRESHOLD: f64 = 40.0;

const STRENGTH_MIN_RATIO: f64 = 0.6;
const CONCERN_MAX_RATIO: f64 = 0.4;

pub(crate) fn tier_for(overall_percentage: f64) -> SuitabilityTier {
    if overall_percentage >= HIGH_THRESHOLD {
        SuitabilityTier::High
    } else if overall_percentage >= MEDIUM_THRESHOLD {
        SuitabilityTier::Medium
    } else {
        SuitabilityTier::Low
    }
}

pub(crate) fn recommendation_for(tier: SuitabilityTier) -> &'static str {
    match tier {
        SuitabilityTier::High => "Strong candidate. Recommend advancing to technical interview.",
        SuitabilityTier::Medium => {
            "Potential candidate. Consider for phone screen to clarify concerns."
        }
        SuitabilityTier::Low => "Not a strong match for this role at this time.",
    }
}

/// Per-question strength and concern annotations for the recruiter summary.
pub(crate) fn annotate(
    questions: &[ScreeningQuestion],
    answers: &BTreeMap<QuestionId, ScoredAnswer>,
) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut concerns = Vec::new();

    for question in questions {
        match answers.get(&question.question_id) {
            Some(answer) => {
                let ratio = answer.match_ratio();
                if ratio >= STRENGTH_MIN_RATIO {
                    strengths.push(format!("Strong answer to: {}", question.question_id.0));
                } else if ratio < CONCERN_MAX_RATIO {
                    concerns.push(format!("Weak answer to: {}", question.question_id.0));
                }
            }
            None => {
                concerns.push(format!("Did not answer: {}", question.question_id.0));
            }
        }
    }

    let answered = answers.len();
    if answered < questions.len() {
        concerns.push(format!(
            "Answered {answered}/{} screening questions",
            questions.len()
        ));
    }

    (strengths, concerns)
}
