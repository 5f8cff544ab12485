use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::prompt::build_full_prompt;

#[derive(Debug, thiserror::Error)]
pub enum RemoteCallError {
    #[error("Gemini API key is not configured")]
    NotConfigured,
    #[error("Gemini request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Gemini returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Failed to parse Gemini response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("No response candidates from Gemini API")]
    NoCandidates,
    #[error("No content parts in Gemini response")]
    NoParts,
}

/// Client for the native `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    pub fn new(
        http: reqwest::Client,
        api_url: &str,
        api_key: &str,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            timeout,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Ask Gemini to answer `question` under the college system prompt.
    pub async fn generate(&self, question: &str) -> Result<String, RemoteCallError> {
        self.generate_content(&build_full_prompt(question)).await
    }

    async fn generate_content(&self, prompt: &str) -> Result<String, RemoteCallError> {
        if !self.is_configured() {
            return Err(RemoteCallError::NotConfigured);
        }

        let mut request = self
            .http
            .post(&self.api_url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt));

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RemoteCallError::Status { status, body });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        parsed.into_text()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(text: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of `candidates[0].content.parts[0]`. A part without text reads as empty.
    fn into_text(self) -> Result<String, RemoteCallError> {
        let candidate = self
            .candidates
            .and_then(|c| c.into_iter().next())
            .ok_or(RemoteCallError::NoCandidates)?;

        let part = candidate
            .content
            .and_then(|c| c.parts)
            .and_then(|p| p.into_iter().next())
            .ok_or(RemoteCallError::NoParts)?;

        Ok(part.text.unwrap_or_default())
    }
}
