mod mock_speech_engine;
mod openai_speech_engine;

pub use mock_speech_engine::MockSpeechSynthesizer;
pub use openai_speech_engine::OpenAiSpeechEngine;
