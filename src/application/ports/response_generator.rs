use async_trait::async_trait;

use crate::domain::{Directive, Transcript};

/// Text-generation engine producing the persona's reply for one turn.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    async fn generate(
        &self,
        directive: &Directive,
        transcript: &Transcript,
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("generation timed out")]
    Timeout,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
