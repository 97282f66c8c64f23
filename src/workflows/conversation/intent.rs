use serde::{Deserialize, Serialize};

/// Discrete classification of a candidate message, driving state-machine
/// routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    EndConversation,
    AskCompany,
    AskJob,
    ProvideInfo,
    GeneralInquiry,
}

impl IntentLabel {
    pub const fn label(self) -> &'static str {
        match self {
            IntentLabel::EndConversation => "end_conversation",
            IntentLabel::AskCompany => "ask_company",
            IntentLabel::AskJob => "ask_job",
            IntentLabel::ProvideInfo => "provide_info",
            IntentLabel::GeneralInquiry => "general_inquiry",
        }
    }
}

const END_CONVERSATION_TRIGGERS: &[&str] =
    &["goodbye", "bye", "thank you", "thanks", "not interested"];

const ASK_COMPANY_TRIGGERS: &[&str] = &[
    "company", "culture", "mission", "values", "benefits", "perks", "team", "colleagues",
];

const ASK_JOB_TRIGGERS: &[&str] = &[
    "job",
    "role",
    "position",
    "responsibilities",
    "requirements",
    "salary",
    "location",
    "remote",
    "office",
];

const PROVIDE_INFO_TRIGGERS: &[&str] =
    &["i am", "i have", "i work", "my experience", "i've been"];

/// Trigger tables in precedence order; the first label with a matching
/// phrase wins.
const PRECEDENCE: &[(IntentLabel, &[&str])] = &[
    (IntentLabel::EndConversation, END_CONVERSATION_TRIGGERS),
    (IntentLabel::AskCompany, ASK_COMPANY_TRIGGERS),
    (IntentLabel::AskJob, ASK_JOB_TRIGGERS),
    (IntentLabel::ProvideInfo, PROVIDE_INFO_TRIGGERS),
];

/// Classify a raw candidate message. Pure and case-insensitive; every input
/// maps to exactly one label, falling back to `GeneralInquiry`.
pub fn classify(message: &str) -> IntentLabel {
    let lowered = message.to_lowercase();

    for (label, triggers) in PRECEDENCE {
        if triggers.iter().any(|phrase| lowered.contains(phrase)) {
            return *label;
        }
    }

    IntentLabel::GeneralInquiry
}
