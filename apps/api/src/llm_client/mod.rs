//! Completion client — the single point of entry for all text-generation
//! calls in Musebox.
//!
//! ARCHITECTURAL RULE: no other module may talk to the completion service
//! directly. All LLM interactions go through this module.
//!
//! One prompt in, one user-role message out, first choice's content back.
//! Failures are terminal for the current request: no retry, no backoff.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// The default model for all completion calls.
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion service returned no content")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Wraps the chat-completions API. Cheap to clone; the inner `reqwest`
/// client is shared.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
}

impl CompletionClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Sends `prompt` as a single user message to the default model and
    /// returns the generated text.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.complete_with_model(prompt, DEFAULT_MODEL).await
    }

    /// Same as [`complete`](Self::complete) with an explicit model id.
    pub async fn complete_with_model(
        &self,
        prompt: &str,
        model: &str,
    ) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the service's own error message when the body parses
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;
        let text = first_choice_content(chat).ok_or(LlmError::EmptyResponse)?;

        debug!("completion call succeeded ({} chars)", text.len());
        Ok(text)
    }
}

fn first_choice_content(response: ChatResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_choice_content() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "A poem."}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_choice_content(response).as_deref(), Some("A poem."));
    }

    #[test]
    fn empty_choices_yield_none() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(first_choice_content(response).is_none());
    }

    #[test]
    fn parses_service_error_body() {
        let raw = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let parsed: ApiError = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.message, "Incorrect API key provided");
    }
}
