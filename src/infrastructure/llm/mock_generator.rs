use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{GenerationError, ResponseGenerator};
use crate::domain::{Directive, Transcript};

/// Deterministic fixture: fixed reply, call counter, and a record of the
/// last (directive, transcript) pair it was handed.
pub struct MockResponseGenerator {
    reply: Option<String>,
    calls: AtomicUsize,
    last_input: Mutex<Option<(String, String)>>,
}

impl MockResponseGenerator {
    pub fn returning(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_input(&self) -> Option<(String, String)> {
        self.last_input.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl ResponseGenerator for MockResponseGenerator {
    async fn generate(
        &self,
        directive: &Directive,
        transcript: &Transcript,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().expect("lock poisoned") = Some((
            directive.as_str().to_string(),
            transcript.as_str().to_string(),
        ));
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(GenerationError::ApiRequestFailed(
                "mock generator offline".to_string(),
            )),
        }
    }
}
