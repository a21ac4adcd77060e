use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{GenerationError, ResponseGenerator};
use crate::domain::{Directive, Transcript};
use crate::infrastructure::observability::sanitize_for_log;

/// Persona reply generation over an OpenAI-compatible `/chat/completions`
/// endpoint. The directive rides as the system message, the transcript as
/// the user message.
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiGenerator {
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        max_tokens: u32,
        temperature: f32,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key,
            base_url,
            model,
            max_tokens,
            temperature,
        }
    }
}

#[async_trait]
impl ResponseGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        directive: &Directive,
        transcript: &Transcript,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": directive.as_str() },
                { "role": "user", "content": transcript.as_str() },
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        });

        tracing::debug!(
            model = %self.model,
            transcript = %sanitize_for_log(transcript.as_str()),
            "Requesting persona reply"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::ApiRequestFailed(format!("request: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GenerationError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("decode: {}", e)))?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| GenerationError::InvalidResponse("no choices returned".to_string()))?;

        if reply.is_empty() {
            return Err(GenerationError::InvalidResponse(
                "empty completion".to_string(),
            ));
        }

        Ok(reply)
    }
}
