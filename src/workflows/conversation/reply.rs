use serde::{Deserialize, Serialize};

use super::catalog::{CompanyInfo, JobOffer};
use super::domain::QuestionId;
use super::evaluation::{EvaluationResult, SuitabilityTier};

/// Semantic payload of the agent's next message. The core decides what the
/// reply must convey; turning it into prose is the renderer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplyIntent {
    Greeting {
        company_name: String,
        job_title: String,
    },
    CompanyOverview(CompanyInfo),
    JobOverview(JobOffer),
    ProfileFollowUp,
    ScreeningQuestion {
        question_id: QuestionId,
        prompt: String,
    },
    ClosingSummary(EvaluationResult),
    Farewell,
    GeneralFollowUp,
}

impl ReplyIntent {
    pub const fn kind(&self) -> &'static str {
        match self {
            ReplyIntent::Greeting { .. } => "greeting",
            ReplyIntent::CompanyOverview(_) => "company_overview",
            ReplyIntent::JobOverview(_) => "job_overview",
            ReplyIntent::ProfileFollowUp => "profile_follow_up",
            ReplyIntent::ScreeningQuestion { .. } => "screening_question",
            ReplyIntent::ClosingSummary(_) => "closing_summary",
            ReplyIntent::Farewell => "farewell",
            ReplyIntent::GeneralFollowUp => "general_follow_up",
        }
    }
}

/// Turns a reply intent into the message text sent to the candidate. In
/// production this seam can host an LLM-backed writer; the core only ever
/// sees the trait.
pub trait MessageRenderer: Send + Sync {
    fn render(&self, intent: &ReplyIntent) -> String;
}

/// Deterministic renderer backed by fixed templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer;

impl MessageRenderer for TemplateRenderer {
    fn render(&self, intent: &ReplyIntent) -> String {
        match intent {
            ReplyIntent::Greeting {
                company_name,
                job_title,
            } => format!(
                "Hi! I'm an AI recruiter from {company_name}. I'm reaching out about our \
                 {job_title} position. Do you have a few minutes to chat about this opportunity?"
            ),
            ReplyIntent::CompanyOverview(company) => {
                let highlights = company
                    .benefits
                    .iter()
                    .take(3)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "{} is a {} company with {}. Our mission: {} {} Benefit highlights: {}.",
                    company.company_name,
                    company.industry,
                    company.size,
                    company.mission,
                    company.culture,
                    highlights
                )
            }
            ReplyIntent::JobOverview(offer) => format!(
                "The {} role: {} Location: {}. Remote policy: {}. Compensation: {}. You'd join \
                 a team of {}.",
                offer.title,
                offer.description,
                offer.location,
                offer.remote_policy,
                offer.salary_range,
                offer.team_size
            ),
            ReplyIntent::ProfileFollowUp => {
                "Appreciate you sharing that. Could you tell me more about your experience and \
                 the technologies you work with day to day?"
                    .to_string()
            }
            // The screening question must reach the candidate verbatim.
            ReplyIntent::ScreeningQuestion { prompt, .. } => prompt.clone(),
            ReplyIntent::ClosingSummary(evaluation) => closing_for(evaluation.tier).to_string(),
            ReplyIntent::Farewell => {
                "Thank you for your time today! We'll be in touch soon with next steps."
                    .to_string()
            }
            ReplyIntent::GeneralFollowUp => {
                "Happy to help with any questions about the role or the company. Could you tell \
                 me a bit about your background?"
                    .to_string()
            }
        }
    }
}

fn closing_for(tier: SuitabilityTier) -> &'static str {
    match tier {
        SuitabilityTier::High => {
            "Thank you so much for taking the time to chat with me today! Based on our \
             conversation, I think you'd be a great fit for this role. Our team will review \
             your profile and reach out within 2-3 business days to schedule the next \
             interview. Looking forward to continuing the conversation!"
        }
        SuitabilityTier::Medium => {
            "Thank you for the conversation today! I'd like to have a member of our recruiting \
             team do a quick follow-up call to discuss your background in more detail. Someone \
             will reach out to you within the next week. Thanks again!"
        }
        SuitabilityTier::Low => {
            "Thank you for your interest and for taking the time to speak with me today. While \
             this particular role might not be the perfect fit right now, we'll keep your \
             information on file for future opportunities. Best of luck in your job search!"
        }
    }
}
