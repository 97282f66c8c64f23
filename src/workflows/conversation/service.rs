use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::catalog::{CatalogError, RecruitingDirectory};
use super::domain::{CandidateProfile, ConversationStage, Platform, Session, SessionId};
use super::evaluation::EvaluationResult;
use super::machine::{ConversationClosed, ConversationEngine};
use super::reply::{MessageRenderer, ReplyIntent};
use super::repository::{SessionStore, SessionStoreError};

/// Inputs needed to open a screening conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    pub job_id: String,
    pub company_id: String,
    pub candidate_id: String,
    pub platform: Platform,
    pub candidate_name: Option<String>,
}

/// A freshly created session together with its opening message.
#[derive(Debug, Clone)]
pub struct SessionGreeting {
    pub session: Session,
    pub reply: ReplyIntent,
    pub message: String,
}

/// Result of one processed turn, handed back to the transport layer.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub session_id: SessionId,
    pub reply: ReplyIntent,
    pub message: String,
    pub terminal: bool,
    pub evaluation: Option<EvaluationResult>,
}

/// Error raised by the conversation service.
#[derive(Debug, thiserror::Error)]
pub enum ConversationServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("unknown session id: {0}")]
    UnknownSession(String),
    #[error(transparent)]
    Closed(#[from] ConversationClosed),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Service composing the session store, content directory, renderer, and
/// the per-turn state machine. One instance serves all sessions; sessions
/// are independent and the directory is read-only, so concurrent use across
/// session ids is safe as long as the caller serializes turns per session.
pub struct ConversationService<S, D, R> {
    store: Arc<S>,
    directory: Arc<D>,
    renderer: Arc<R>,
}

fn next_session_id() -> SessionId {
    let hex = Uuid::new_v4().simple().to_string();
    SessionId(format!("session-{}", &hex[..12]))
}

impl<S, D, R> ConversationService<S, D, R>
where
    S: SessionStore + 'static,
    D: RecruitingDirectory + 'static,
    R: MessageRenderer + 'static,
{
    pub fn new(store: Arc<S>, directory: Arc<D>, renderer: Arc<R>) -> Self {
        Self {
            store,
            directory,
            renderer,
        }
    }

    /// Open a new session, emitting the greeting. Fails fast with a catalog
    /// error when the job or company id is unknown; no session is created in
    /// that case.
    pub fn create_session(
        &self,
        request: SessionRequest,
    ) -> Result<SessionGreeting, ConversationServiceError> {
        let questions = self.directory.questions_for(&request.job_id)?;
        let offer = self.directory.job_offer(&request.job_id)?;
        let company = self.directory.company(&request.company_id)?;

        let candidate =
            CandidateProfile::new(request.candidate_id, request.platform, request.candidate_name);
        let mut session = Session::new(
            next_session_id(),
            request.job_id,
            request.company_id,
            candidate,
        );

        let engine = ConversationEngine::new(&questions, &company, &offer);
        let reply = engine.greeting();
        let message = self.renderer.render(&reply);
        session.record_agent_message(message.clone());
        session.stage = ConversationStage::InformationGathering;

        info!(
            session = %session.session_id.0,
            job = %session.job_id,
            candidate = %session.candidate.candidate_id,
            "conversation started"
        );

        self.store.save(session.clone())?;

        Ok(SessionGreeting {
            session,
            reply,
            message,
        })
    }

    /// Process one candidate message. `ConversationClosed` surfaces without
    /// saving, leaving the stored session untouched.
    pub fn handle_message(
        &self,
        session_id: &SessionId,
        raw_message: &str,
    ) -> Result<TurnOutcome, ConversationServiceError> {
        let mut session = self
            .store
            .load(session_id)?
            .ok_or_else(|| ConversationServiceError::UnknownSession(session_id.0.clone()))?;

        let questions = self.directory.questions_for(&session.job_id)?;
        let company = self.directory.company(&session.company_id)?;
        let offer = self.directory.job_offer(&session.job_id)?;

        let engine = ConversationEngine::new(&questions, &company, &offer);
        let reply = engine.handle_message(&mut session, raw_message)?;

        let message = self.renderer.render(&reply);
        session.record_agent_message(message.clone());

        info!(
            session = %session.session_id.0,
            stage = session.stage.label(),
            reply = reply.kind(),
            terminal = session.terminal,
            "turn processed"
        );

        let outcome = TurnOutcome {
            session_id: session.session_id.clone(),
            terminal: session.terminal,
            evaluation: session.evaluation.clone(),
            message,
            reply,
        };

        self.store.save(session)?;

        Ok(outcome)
    }

    /// Fetch the current session record for status views.
    pub fn session(&self, session_id: &SessionId) -> Result<Session, ConversationServiceError> {
        self.store
            .load(session_id)?
            .ok_or_else(|| ConversationServiceError::UnknownSession(session_id.0.clone()))
    }

    /// Number of screening questions configured for a job.
    pub fn question_total(&self, job_id: &str) -> Result<usize, ConversationServiceError> {
        Ok(self.directory.questions_for(job_id)?.len())
    }

    /// The evaluation, if the session has reached one.
    pub fn evaluation(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<EvaluationResult>, ConversationServiceError> {
        Ok(self.session(session_id)?.evaluation)
    }
}
