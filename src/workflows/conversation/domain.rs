use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::evaluation::{EvaluationResult, ScoredAnswer};

/// Identifier wrapper for screening sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Identifier wrapper for screening questions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub String);

/// Messaging platform the candidate is reached on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LinkedIn,
    Unipile,
}

impl Platform {
    pub const fn label(self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::Unipile => "unipile",
        }
    }
}

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSender {
    Candidate,
    Agent,
}

/// One entry in the append-only conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sent_at: DateTime<Utc>,
    pub sender: MessageSender,
    pub body: String,
}

/// Candidate facts accumulated from the conversation. Fields are only ever
/// overwritten with newly extracted values, never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub candidate_id: String,
    pub platform: Platform,
    pub name: Option<String>,
    pub current_role: Option<String>,
    pub years_of_experience: Option<u8>,
    pub skills: BTreeSet<String>,
}

impl CandidateProfile {
    pub fn new(candidate_id: impl Into<String>, platform: Platform, name: Option<String>) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            platform,
            name,
            current_role: None,
            years_of_experience: None,
            skills: BTreeSet::new(),
        }
    }

    /// Enough profile data to start the screening questions.
    pub fn has_screening_basics(&self) -> bool {
        self.years_of_experience.is_some() && !self.skills.is_empty()
    }
}

/// A predefined screening question whose answer is scored against expected
/// keyword phrases. Supplied by the question bank, immutable, scoped to a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningQuestion {
    pub question_id: QuestionId,
    pub prompt: String,
    pub expected_keywords: Vec<String>,
    pub weight: f64,
}

/// Stage of the conversation flow tracked per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStage {
    Greeting,
    InformationGathering,
    KillerQuestions,
    CompanyQuestions,
    Evaluation,
    Closing,
}

impl ConversationStage {
    pub const fn label(self) -> &'static str {
        match self {
            ConversationStage::Greeting => "greeting",
            ConversationStage::InformationGathering => "information_gathering",
            ConversationStage::KillerQuestions => "killer_questions",
            ConversationStage::CompanyQuestions => "company_questions",
            ConversationStage::Evaluation => "evaluation",
            ConversationStage::Closing => "closing",
        }
    }
}

/// Full mutable record of one candidate conversation, owned by the state
/// machine from creation until the terminal flag is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: SessionId,
    pub job_id: String,
    pub company_id: String,
    pub candidate: CandidateProfile,
    pub stage: ConversationStage,
    pub transcript: Vec<ChatMessage>,
    pub asked: Vec<QuestionId>,
    pub answers: BTreeMap<QuestionId, ScoredAnswer>,
    pub evaluation: Option<EvaluationResult>,
    pub terminal: bool,
}

impl Session {
    pub fn new(
        session_id: SessionId,
        job_id: impl Into<String>,
        company_id: impl Into<String>,
        candidate: CandidateProfile,
    ) -> Self {
        Self {
            session_id,
            job_id: job_id.into(),
            company_id: company_id.into(),
            candidate,
            stage: ConversationStage::Greeting,
            transcript: Vec::new(),
            asked: Vec::new(),
            answers: BTreeMap::new(),
            evaluation: None,
            terminal: false,
        }
    }

    pub fn record_candidate_message(&mut self, body: impl Into<String>) {
        self.transcript.push(ChatMessage {
            sent_at: Utc::now(),
            sender: MessageSender::Candidate,
            body: body.into(),
        });
    }

    pub fn record_agent_message(&mut self, body: impl Into<String>) {
        self.transcript.push(ChatMessage {
            sent_at: Utc::now(),
            sender: MessageSender::Agent,
            body: body.into(),
        });
    }

    /// The most recently asked question that has not been answered yet.
    /// Questions are asked one at a time, so only the last id can be open.
    pub fn pending_question(&self) -> Option<&QuestionId> {
        self.asked.last().filter(|id| !self.answers.contains_key(id))
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }
}
