use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{SpeechSynthesizer, SynthesisError, SynthesizedSpeech};

/// Deterministic fixture: a tiny fixed wav-ish payload, call counter, and
/// the last input text, so tests can assert what the synthesizer was fed.
pub struct MockSpeechSynthesizer {
    fail: bool,
    calls: AtomicUsize,
    last_input: Mutex<Option<String>>,
}

impl MockSpeechSynthesizer {
    pub fn speaking() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_input(&self) -> Option<String> {
        self.last_input.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedSpeech, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().expect("lock poisoned") = Some(text.to_string());
        if self.fail {
            return Err(SynthesisError::SynthesisFailed(
                "mock synthesizer offline".to_string(),
            ));
        }
        Ok(SynthesizedSpeech {
            audio: b"RIFFmockwav".to_vec(),
            sample_rate: 22_050,
        })
    }
}
