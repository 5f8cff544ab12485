use super::gemini::GeminiClient;
use super::prompt::{
    EMPTY_QUESTION_MESSAGE, FALLBACK_MESSAGE, MAX_QUESTION_LEN, QUESTION_TOO_LONG_MESSAGE,
    question_len,
};

/// Turns a question into an answer. Never fails: input problems and remote
/// failures both come back as canned replies.
#[derive(Clone)]
pub struct ChatService {
    gemini: GeminiClient,
}

impl ChatService {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }

    pub fn is_configured(&self) -> bool {
        self.gemini.is_configured()
    }

    pub async fn process(&self, question: &str) -> String {
        if let Some(message) = validate_question(question) {
            tracing::debug!(reason = message, "Question rejected before AI call");
            return message.to_string();
        }

        let question = question.trim();
        tracing::debug!(question_len = question_len(question), "Forwarding question to Gemini");

        match self.gemini.generate(question).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!(error = %e, "Gemini call failed, using fallback");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

/// The canned reply for an unusable question, or `None` if it may go to the model.
pub fn validate_question(question: &str) -> Option<&'static str> {
    if question.trim().is_empty() {
        return Some(EMPTY_QUESTION_MESSAGE);
    }
    if question_len(question) > MAX_QUESTION_LEN {
        return Some(QUESTION_TOO_LONG_MESSAGE);
    }
    None
}
