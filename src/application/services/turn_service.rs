use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::application::ports::{
    GenerationError, ResponseGenerator, SpeechSynthesizer, StagingStore, StagingStoreError,
    SynthesisError, TranscriptionEngine, TranscriptionError,
};
use crate::application::services::persona_policy;
use crate::domain::{AudioPayload, RespectScore, StoragePath, TimeContext, Transcript};
use crate::infrastructure::text_processing::sanitize_for_speech;

/// One inbound turn, immutable once built.
#[derive(Debug, Clone)]
pub struct TurnRequest {
    pub api_key: Option<String>,
    pub audio: Vec<u8>,
    pub audio_filename: String,
    pub system_prompt: Option<String>,
    pub respect_score: RespectScore,
    pub time_context: TimeContext,
    pub user_context: HashMap<String, String>,
}

/// The sole output entity of a completed turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub transcript: Transcript,
    pub response_text: String,
    pub audio: AudioPayload,
    pub respect_delta: i32,
}

/// Pipeline stage names carried by failure results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Staging,
    Transcription,
    Generation,
    Synthesis,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Staging => "staging",
            Stage::Transcription => "transcription",
            Stage::Generation => "generation",
            Stage::Synthesis => "synthesis",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("invalid api key")]
    Unauthorized,
    #[error("transcription unavailable: {0}")]
    TranscriptionUnavailable(#[from] TranscriptionError),
    #[error("generation unavailable: {0}")]
    GenerationUnavailable(#[from] GenerationError),
    #[error("synthesis unavailable: {0}")]
    SynthesisUnavailable(#[from] SynthesisError),
    #[error("{} failed: {message}", .stage.as_str())]
    ProcessingFailed { stage: Stage, message: String },
}

impl TurnError {
    pub fn stage(&self) -> Option<Stage> {
        match self {
            TurnError::Unauthorized => None,
            TurnError::TranscriptionUnavailable(_) => Some(Stage::Transcription),
            TurnError::GenerationUnavailable(_) => Some(Stage::Generation),
            TurnError::SynthesisUnavailable(_) => Some(Stage::Synthesis),
            TurnError::ProcessingFailed { stage, .. } => Some(*stage),
        }
    }
}

/// Sequences the five pipeline stages for one turn: transcribe, score,
/// build directive, generate, sanitize, synthesize. Holds no per-request
/// state; concurrent turns share nothing but the injected engines.
pub struct TurnService<T, G, S>
where
    T: TranscriptionEngine + ?Sized,
    G: ResponseGenerator + ?Sized,
    S: SpeechSynthesizer + ?Sized,
{
    transcription_engine: Arc<T>,
    response_generator: Arc<G>,
    speech_synthesizer: Arc<S>,
    staging_store: Arc<dyn StagingStore>,
    api_key: String,
    generation_timeout: Duration,
}

impl<T, G, S> TurnService<T, G, S>
where
    T: TranscriptionEngine + ?Sized,
    G: ResponseGenerator + ?Sized,
    S: SpeechSynthesizer + ?Sized,
{
    pub fn new(
        transcription_engine: Arc<T>,
        response_generator: Arc<G>,
        speech_synthesizer: Arc<S>,
        staging_store: Arc<dyn StagingStore>,
        api_key: String,
        generation_timeout: Duration,
    ) -> Self {
        Self {
            transcription_engine,
            response_generator,
            speech_synthesizer,
            staging_store,
            api_key,
            generation_timeout,
        }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            time_context = %request.time_context,
            respect_score = %request.respect_score,
            audio_bytes = request.audio.len(),
            user_context_keys = request.user_context.len()
        )
    )]
    pub async fn handle_turn(&self, request: TurnRequest) -> Result<TurnOutcome, TurnError> {
        if request.api_key.as_deref() != Some(self.api_key.as_str()) {
            tracing::warn!("Turn rejected: api key mismatch");
            return Err(TurnError::Unauthorized);
        }

        let turn_id = Uuid::new_v4();
        let path = StoragePath::for_turn(turn_id, &request.audio_filename);

        self.staging_store
            .store(&path, &request.audio)
            .await
            .map_err(|e| TurnError::ProcessingFailed {
                stage: Stage::Staging,
                message: e.to_string(),
            })?;

        let staged = StagedAudio::new(Arc::clone(&self.staging_store), path);

        let outcome = self.run_pipeline(&staged.path, &request).await;

        staged.release().await;

        match &outcome {
            Ok(turn) => tracing::info!(
                turn_id = %turn_id,
                respect_delta = turn.respect_delta,
                "Turn completed"
            ),
            Err(e) => tracing::error!(
                turn_id = %turn_id,
                stage = e.stage().map(|s| s.as_str()).unwrap_or("auth"),
                error = %e,
                "Turn failed"
            ),
        }

        outcome
    }

    async fn run_pipeline(
        &self,
        path: &StoragePath,
        request: &TurnRequest,
    ) -> Result<TurnOutcome, TurnError> {
        let audio = self
            .staging_store
            .fetch(path)
            .await
            .map_err(|e| TurnError::ProcessingFailed {
                stage: Stage::Staging,
                message: e.to_string(),
            })?;

        let raw_text = self.transcription_engine.transcribe(&audio).await?;
        let transcript = Transcript::from_raw(&raw_text);
        tracing::debug!(transcript = %transcript, silence = transcript.is_silence(), "Transcription completed");

        // Scored against the original transcript, before any generation, so
        // the delta is independent of the generator's fate.
        let respect_delta = persona_policy::score_delta(&transcript, request.respect_score);

        let directive = persona_policy::build_directive(
            request.time_context,
            request.respect_score,
            request.system_prompt.as_deref(),
        );

        let generation = self.response_generator.generate(&directive, &transcript);
        let response_text = match tokio::time::timeout(self.generation_timeout, generation).await {
            Ok(result) => result?,
            Err(_) => return Err(TurnError::GenerationUnavailable(GenerationError::Timeout)),
        };

        let speakable = sanitize_for_speech(&response_text);
        let speech = self.speech_synthesizer.synthesize(&speakable).await?;

        Ok(TurnOutcome {
            transcript,
            response_text,
            audio: AudioPayload::new(speech.audio, speech.sample_rate),
            respect_delta,
        })
    }
}

/// Owns one turn's staged audio object. Explicitly released on every normal
/// exit path; if the turn future is dropped mid-flight (caller disconnect)
/// the `Drop` impl spawns the deletion instead.
struct StagedAudio {
    store: Arc<dyn StagingStore>,
    path: StoragePath,
    released: bool,
}

impl StagedAudio {
    fn new(store: Arc<dyn StagingStore>, path: StoragePath) -> Self {
        Self {
            store,
            path,
            released: false,
        }
    }

    async fn release(mut self) {
        self.released = true;
        if let Err(e) = self.store.delete(&self.path).await {
            if !matches!(e, StagingStoreError::NotFound(_)) {
                tracing::warn!(path = %self.path, error = %e, "Failed to delete staged audio");
            }
        }
    }
}

impl Drop for StagedAudio {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        let store = Arc::clone(&self.store);
        let path = self.path.clone();
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _ = store.delete(&path).await;
            });
        }
    }
}
