use async_trait::async_trait;

/// Raw output of the text-to-speech engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedSpeech {
    pub audio: Vec<u8>,
    pub sample_rate: u32,
}

/// Text-to-speech engine. Must accept any UTF-8 input, including
/// punctuation-only or single-word text.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedSpeech, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("synthesis failed: {0}")]
    SynthesisFailed(String),
}
