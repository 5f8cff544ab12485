use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::services::prompt::{MAX_QUESTION_LEN, question_len};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChatRequest {
    /// Missing reads as empty so it fails the not-blank rule.
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Question cannot be empty"),
        custom(
            function = "within_length_limit",
            message = "Question must be at most 300 characters"
        )
    )]
    #[schema(example = "What courses are offered?", max_length = 300)]
    pub question: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn within_length_limit(value: &str) -> Result<(), ValidationError> {
    if question_len(value) > MAX_QUESTION_LEN {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}
