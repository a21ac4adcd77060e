mod speech_sanitizer;

pub use speech_sanitizer::sanitize_for_speech;
