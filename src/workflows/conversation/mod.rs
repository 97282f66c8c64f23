//! Screening conversation workflow: state machine, intent routing, answer
//! scoring, and suitability evaluation.
//!
//! The module owns all per-turn decision logic. Transport, prose rendering,
//! session persistence, and static recruiting content sit behind the traits
//! in `catalog`, `reply`, and `repository` so they can be swapped without
//! touching the state machine.

pub mod catalog;
pub mod domain;
pub(crate) mod evaluation;
pub(crate) mod extraction;
pub(crate) mod intent;
pub mod machine;
pub mod reply;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogError, CompanyInfo, CompanyInfoStore, JobOffer, JobOfferStore, RecruitingDirectory,
    ScreeningQuestionBank, StandardCatalog,
};
pub use domain::{
    CandidateProfile, ChatMessage, ConversationStage, MessageSender, Platform, QuestionId,
    ScreeningQuestion, Session, SessionId,
};
pub use evaluation::{evaluate, score_answer, EvaluationResult, ScoredAnswer, SuitabilityTier};
pub use extraction::{extract_facts, ProfileFacts};
pub use intent::{classify, IntentLabel};
pub use machine::{ConversationClosed, ConversationEngine};
pub use reply::{MessageRenderer, ReplyIntent, TemplateRenderer};
pub use repository::{MemorySessionStore, SessionStore, SessionStoreError};
pub use router::conversation_router;
pub use service::{
    ConversationService, ConversationServiceError, SessionGreeting, SessionRequest, TurnOutcome,
};
