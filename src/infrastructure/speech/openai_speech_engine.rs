use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{SpeechSynthesizer, SynthesisError, SynthesizedSpeech};

/// OpenAI-compatible `/audio/speech` wav output is fixed at 24 kHz.
const WAV_SAMPLE_RATE: u32 = 24_000;

/// Text-to-speech over an OpenAI-compatible `/audio/speech` endpoint.
pub struct OpenAiSpeechEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    voice: String,
}

impl OpenAiSpeechEngine {
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        voice: String,
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
            voice,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeechEngine {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedSpeech, SynthesisError> {
        let url = format!("{}/audio/speech", self.base_url);

        let body = serde_json::json!({
            "model": self.model,
            "voice": self.voice,
            "input": text,
            "response_format": "wav",
        });

        tracing::debug!(model = %self.model, voice = %self.voice, chars = text.len(), "Requesting speech synthesis");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("body: {}", e)))?;

        if audio.is_empty() {
            return Err(SynthesisError::SynthesisFailed(
                "engine returned no audio".to_string(),
            ));
        }

        Ok(SynthesizedSpeech {
            audio: audio.to_vec(),
            sample_rate: WAV_SAMPLE_RATE,
        })
    }
}
