use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::{CatalogError, RecruitingDirectory};
use super::domain::{Platform, Session, SessionId};
use super::evaluation::EvaluationResult;
use super::reply::MessageRenderer;
use super::repository::SessionStore;
use super::service::{ConversationService, ConversationServiceError, SessionRequest};

/// Router builder exposing HTTP endpoints for the conversation workflow.
pub fn conversation_router<S, D, R>(service: Arc<ConversationService<S, D, R>>) -> Router
where
    S: SessionStore + 'static,
    D: RecruitingDirectory + 'static,
    R: MessageRenderer + 'static,
{
    Router::new()
        .route("/api/v1/conversations", post(start_handler::<S, D, R>))
        .route(
            "/api/v1/conversations/:session_id/messages",
            post(message_handler::<S, D, R>),
        )
        .route(
            "/api/v1/conversations/:session_id",
            get(session_handler::<S, D, R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct StartConversationRequest {
    pub candidate_id: String,
    pub platform: Platform,
    #[serde(default = "default_job_id")]
    pub job_id: String,
    #[serde(default = "default_company_id")]
    pub company_id: String,
    #[serde(default)]
    pub candidate_name: Option<String>,
}

fn default_job_id() -> String {
    "senior_python_dev".to_string()
}

fn default_company_id() -> String {
    "tech_innovators".to_string()
}

#[derive(Debug, Serialize)]
struct StartConversationResponse {
    session_id: String,
    message: String,
    stage: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    session_id: String,
    message: String,
    reply: &'static str,
    conversation_ended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation: Option<EvaluationResult>,
}

/// Sanitized progress view for the session info endpoint.
#[derive(Debug, Serialize)]
struct SessionView {
    session_id: String,
    stage: &'static str,
    message_count: usize,
    questions_asked: usize,
    questions_answered: usize,
    questions_total: usize,
    conversation_ended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation: Option<EvaluationResult>,
    candidate: CandidateView,
}

#[derive(Debug, Serialize)]
struct CandidateView {
    candidate_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    platform: &'static str,
}

impl SessionView {
    fn from_session(session: Session, questions_total: usize) -> Self {
        Self {
            session_id: session.session_id.0.clone(),
            stage: session.stage.label(),
            message_count: session.transcript.len(),
            questions_asked: session.asked.len(),
            questions_answered: session.answers.len(),
            questions_total,
            conversation_ended: session.terminal,
            evaluation: session.evaluation.clone(),
            candidate: CandidateView {
                candidate_id: session.candidate.candidate_id.clone(),
                name: session.candidate.name.clone(),
                platform: session.candidate.platform.label(),
            },
        }
    }
}

pub(crate) async fn start_handler<S, D, R>(
    State(service): State<Arc<ConversationService<S, D, R>>>,
    axum::Json(request): axum::Json<StartConversationRequest>,
) -> Response
where
    S: SessionStore + 'static,
    D: RecruitingDirectory + 'static,
    R: MessageRenderer + 'static,
{
    let session_request = SessionRequest {
        job_id: request.job_id,
        company_id: request.company_id,
        candidate_id: request.candidate_id,
        platform: request.platform,
        candidate_name: request.candidate_name,
    };

    match service.create_session(session_request) {
        Ok(greeting) => {
            let body = StartConversationResponse {
                session_id: greeting.session.session_id.0.clone(),
                message: greeting.message,
                stage: greeting.session.stage.label(),
            };
            (StatusCode::CREATED, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn message_handler<S, D, R>(
    State(service): State<Arc<ConversationService<S, D, R>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<MessageRequest>,
) -> Response
where
    S: SessionStore + 'static,
    D: RecruitingDirectory + 'static,
    R: MessageRenderer + 'static,
{
    let session_id = SessionId(session_id);
    match service.handle_message(&session_id, &request.message) {
        Ok(outcome) => {
            let body = MessageResponse {
                session_id: outcome.session_id.0.clone(),
                message: outcome.message,
                reply: outcome.reply.kind(),
                conversation_ended: outcome.terminal,
                evaluation: outcome.evaluation,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn session_handler<S, D, R>(
    State(service): State<Arc<ConversationService<S, D, R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
    D: RecruitingDirectory + 'static,
    R: MessageRenderer + 'static,
{
    let session_id = SessionId(session_id);
    let session = match service.session(&session_id) {
        Ok(session) => session,
        Err(error) => return error_response(error),
    };

    let questions_total = match service.question_total(&session.job_id) {
        Ok(total) => total,
        Err(error) => return error_response(error),
    };

    let view = SessionView::from_session(session, questions_total);
    (StatusCode::OK, axum::Json(view)).into_response()
}

fn error_response(error: ConversationServiceError) -> Response {
    let status = match &error {
        ConversationServiceError::Catalog(CatalogError::UnknownJob(_))
        | ConversationServiceError::Catalog(CatalogError::UnknownCompany(_))
        | ConversationServiceError::UnknownSession(_) => StatusCode::NOT_FOUND,
        ConversationServiceError::Closed(_) => StatusCode::CONFLICT,
        ConversationServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
