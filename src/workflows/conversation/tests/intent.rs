use crate::workflows::conversation::intent::{classify, IntentLabel};

#[test]
fn classifies_farewell_as_end_conversation() {
    assert_eq!(
        classify("Thank you, but I'm not interested"),
        IntentLabel::EndConversation
    );
    assert_eq!(classify("goodbye!"), IntentLabel::EndConversation);
}

#[test]
fn classifies_company_questions() {
    assert_eq!(
        classify("Can you tell me about your culture?"),
        IntentLabel::AskCompany
    );
    assert_eq!(
        classify("What benefits do you offer?"),
        IntentLabel::AskCompany
    );
}

#[test]
fn classifies_job_questions() {
    assert_eq!(
        classify("What does the role involve?"),
        IntentLabel::AskJob
    );
    assert_eq!(
        classify("What is the salary range?"),
        IntentLabel::AskJob
    );
    assert_eq!(classify("Is the work remote?"), IntentLabel::AskJob);
}

#[test]
fn classifies_self_description_as_provide_info() {
    assert_eq!(
        classify("I am a backend developer with cloud exposure"),
        IntentLabel::ProvideInfo
    );
    assert_eq!(
        classify("My experience covers embedded and web work"),
        IntentLabel::ProvideInfo
    );
}

#[test]
fn falls_back_to_general_inquiry() {
    assert_eq!(classify("Sounds good"), IntentLabel::GeneralInquiry);
    assert_eq!(classify(""), IntentLabel::GeneralInquiry);
}

#[test]
fn classification_is_case_insensitive() {
    assert_eq!(classify("GOODBYE"), IntentLabel::EndConversation);
    assert_eq!(
        classify("TELL ME ABOUT THE CULTURE"),
        IntentLabel::AskCompany
    );
}

#[test]
fn precedence_picks_the_first_matching_label() {
    // Farewell phrasing wins over an embedded company keyword.
    assert_eq!(
        classify("Thanks for the details about the culture, goodbye"),
        IntentLabel::EndConversation
    );
    // Company keywords win over job keywords.
    assert_eq!(
        classify("How do the culture and the salary compare?"),
        IntentLabel::AskCompany
    );
    // Job keywords win over self-description phrasing.
    assert_eq!(
        classify("I am curious about the salary"),
        IntentLabel::AskJob
    );
}
