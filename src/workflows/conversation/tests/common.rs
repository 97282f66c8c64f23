use std::sync::Arc;

use crate::workflows::conversation::catalog::{
    CompanyInfo, CompanyInfoStore, JobOffer, JobOfferStore, ScreeningQuestionBank, StandardCatalog,
};
use crate::workflows::conversation::domain::{
    CandidateProfile, Platform, QuestionId, ScreeningQuestion, Session, SessionId,
};
use crate::workflows::conversation::repository::{
    MemorySessionStore, SessionStore, SessionStoreError,
};
use crate::workflows::conversation::reply::{MessageRenderer, ReplyIntent};
use crate::workflows::conversation::service::{ConversationService, SessionRequest};

pub(super) const DEMO_JOB: &str = "senior_python_dev";
pub(super) const DEMO_COMPANY: &str = "tech_innovators";

pub(super) fn catalog() -> StandardCatalog {
    StandardCatalog::standard()
}

pub(super) fn demo_questions() -> Vec<ScreeningQuestion> {
    catalog()
        .questions_for(DEMO_JOB)
        .expect("standard catalog has demo job")
}

pub(super) fn demo_company() -> CompanyInfo {
    catalog()
        .company(DEMO_COMPANY)
        .expect("standard catalog has demo company")
}

pub(super) fn demo_offer() -> JobOffer {
    catalog()
        .job_offer(DEMO_JOB)
        .expect("standard catalog has demo offer")
}

pub(super) fn question(id: &str, keywords: &[&str], weight: f64) -> ScreeningQuestion {
    ScreeningQuestion {
        question_id: QuestionId(id.to_string()),
        prompt: format!("Tell me about {id}."),
        expected_keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        weight,
    }
}

pub(super) fn new_session(session_id: &str) -> Session {
    Session::new(
        SessionId(session_id.to_string()),
        DEMO_JOB,
        DEMO_COMPANY,
        CandidateProfile::new("candidate-001", Platform::LinkedIn, None),
    )
}

/// Stub renderer echoing the intent payload, so tests can assert routing
/// without coupling to template prose.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct EchoRenderer;

impl MessageRenderer for EchoRenderer {
    fn render(&self, intent: &ReplyIntent) -> String {
        match intent {
            ReplyIntent::ScreeningQuestion { question_id, .. } => {
                format!("<screening_question:{}>", question_id.0)
            }
            other => format!("<{}>", other.kind()),
        }
    }
}

pub(super) type EchoService = ConversationService<MemorySessionStore, StandardCatalog, EchoRenderer>;

pub(super) fn build_service() -> (Arc<EchoService>, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::default());
    let service = Arc::new(ConversationService::new(
        store.clone(),
        Arc::new(catalog()),
        Arc::new(EchoRenderer),
    ));
    (service, store)
}

pub(super) fn session_request() -> SessionRequest {
    SessionRequest {
        job_id: DEMO_JOB.to_string(),
        company_id: DEMO_COMPANY.to_string(),
        candidate_id: "candidate-001".to_string(),
        platform: Platform::LinkedIn,
        candidate_name: Some("Jordan Example".to_string()),
    }
}

/// Store that refuses every operation, for failure-path coverage.
pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn load(&self, _session_id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }

    fn save(&self, _session: Session) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }
}

/// Candidate turns that answer the four demo questions in bank order.
pub(super) const DEMO_ANSWERS: [&str; 4] = [
    "I've spent 5 years as a senior engineer shipping production systems at scale.",
    "I designed microservices with docker and kubernetes behind an api gateway, built to be scalable.",
    "Mostly aws and gcp, with kubernetes deployment and some lambda.",
    "I could start immediately, or with 2 weeks notice.",
];
