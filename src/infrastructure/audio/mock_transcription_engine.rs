use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Deterministic fixture for tests and scaffold mode: returns a fixed
/// transcript (or a fixed failure) and counts its invocations.
pub struct MockTranscriptionEngine {
    transcript: Option<String>,
    calls: AtomicUsize,
}

impl MockTranscriptionEngine {
    pub fn returning(transcript: &str) -> Self {
        Self {
            transcript: Some(transcript.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            transcript: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, _audio_data: &[u8]) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.transcript {
            Some(text) => Ok(text.clone()),
            None => Err(TranscriptionError::DecodingFailed(
                "mock engine offline".to_string(),
            )),
        }
    }
}
