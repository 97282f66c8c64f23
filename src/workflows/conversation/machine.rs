use super::catalog::{CompanyInfo, JobOffer};
use super::domain::{ConversationStage, QuestionId, ScreeningQuestion, Session, SessionId};
use super::evaluation::{self, score_answer};
use super::extraction::extract_facts;
use super::intent::{classify, IntentLabel};
use super::reply::ReplyIntent;

/// Raised when a message arrives after the session reached its terminal
/// state. The session is left untouched, so repeated calls are idempotent.
#[derive(Debug, thiserror::Error)]
#[error("conversation {} is already closed", .session_id.0)]
pub struct ConversationClosed {
    pub session_id: SessionId,
}

/// Per-turn conversation state machine.
///
/// Built fresh each turn from the job's question list and the static
/// company/job content; all mutable state lives in the `Session`. Handling
/// a turn is a pure, synchronous computation: no I/O happens here.
pub struct ConversationEngine<'a> {
    questions: &'a [ScreeningQuestion],
    company: &'a CompanyInfo,
    offer: &'a JobOffer,
}

impl<'a> ConversationEngine<'a> {
    pub fn new(
        questions: &'a [ScreeningQuestion],
        company: &'a CompanyInfo,
        offer: &'a JobOffer,
    ) -> Self {
        Self {
            questions,
            company,
            offer,
        }
    }

    /// Opening message content for a freshly created session.
    pub fn greeting(&self) -> ReplyIntent {
        ReplyIntent::Greeting {
            company_name: self.company.company_name.clone(),
            job_title: self.offer.title.clone(),
        }
    }

    /// Route one candidate message through the state machine, mutating the
    /// session and returning the semantic content of the agent's reply.
    ///
    /// A message that matches an intent trigger while a screening question is
    /// outstanding is treated as the answer to that question, except for
    /// farewells (which always close) and company/job questions (a side
    /// branch that never consumes the pending answer slot).
    pub fn handle_message(
        &self,
        session: &mut Session,
        raw_message: &str,
    ) -> Result<ReplyIntent, ConversationClosed> {
        if session.terminal {
            return Err(ConversationClosed {
                session_id: session.session_id.clone(),
            });
        }

        session.record_candidate_message(raw_message);

        let reply = match classify(raw_message) {
            IntentLabel::EndConversation => self.close(session),
            IntentLabel::AskCompany => {
                self.enter_side_branch(session);
                ReplyIntent::CompanyOverview(self.company.clone())
            }
            IntentLabel::AskJob => {
                self.enter_side_branch(session);
                ReplyIntent::JobOverview(self.offer.clone())
            }
            intent => match session.pending_question().cloned() {
                Some(pending) => {
                    self.score_pending(session, &pending, raw_message);
                    self.advance_screening(session)
                }
                None if intent == IntentLabel::ProvideInfo => self.gather_info(session, raw_message),
                None => self.advance_screening(session),
            },
        };

        Ok(reply)
    }

    /// Company/job questions are answered in place. Mid-screening the stage
    /// is preserved so the pending question stays answerable; before
    /// screening the session records the detour.
    fn enter_side_branch(&self, session: &mut Session) {
        if session.stage != ConversationStage::KillerQuestions {
            session.stage = ConversationStage::CompanyQuestions;
        }
    }

    fn gather_info(&self, session: &mut Session, raw_message: &str) -> ReplyIntent {
        let facts = extract_facts(raw_message);
        facts.merge_into(&mut session.candidate);

        if session.candidate.has_screening_basics() && session.asked.is_empty() {
            return self.advance_screening(session);
        }

        session.stage = ConversationStage::InformationGathering;
        ReplyIntent::ProfileFollowUp
    }

    fn score_pending(&self, session: &mut Session, pending: &QuestionId, raw_message: &str) {
        // A pending id missing from the bank means the bank was swapped
        // mid-session; skip scoring and let the turn degrade gracefully.
        if let Some(question) = self
            .questions
            .iter()
            .find(|question| &question.question_id == pending)
        {
            let scored = score_answer(question, raw_message);
            session.answers.insert(pending.clone(), scored);
        }
    }

    /// Dispatch the next unasked question in bank order, or wrap up once the
    /// bank is exhausted.
    fn advance_screening(&self, session: &mut Session) -> ReplyIntent {
        let next = self
            .questions
            .iter()
            .find(|question| !session.asked.contains(&question.question_id));

        match next {
            Some(question) => {
                session.stage = ConversationStage::KillerQuestions;
                session.asked.push(question.question_id.clone());
                ReplyIntent::ScreeningQuestion {
                    question_id: question.question_id.clone(),
                    prompt: question.prompt.clone(),
                }
            }
            None if session.answers.is_empty() => {
                // Nothing askable and nothing answered (empty bank): keep the
                // conversation open instead of evaluating thin air.
                session.stage = ConversationStage::InformationGathering;
                ReplyIntent::GeneralFollowUp
            }
            None => self.close(session),
        }
    }

    /// Terminal transition. With at least one scored answer the evaluation
    /// runs exactly once and the reply conveys its summary; otherwise the
    /// session closes with a neutral farewell and no evaluation.
    fn close(&self, session: &mut Session) -> ReplyIntent {
        let reply = if session.answers.is_empty() {
            ReplyIntent::Farewell
        } else {
            session.stage = ConversationStage::Evaluation;
            let evaluation = evaluation::evaluate(self.questions, &session.answers);
            session.evaluation = Some(evaluation.clone());
            ReplyIntent::ClosingSummary(evaluation)
        };

        session.stage = ConversationStage::Closing;
        session.terminal = true;
        reply
    }
}
