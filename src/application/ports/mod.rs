mod response_generator;
mod speech_synthesizer;
mod staging_store;
mod transcription_engine;

pub use response_generator::{GenerationError, ResponseGenerator};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError, SynthesizedSpeech};
pub use staging_store::{StagingStore, StagingStoreError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
