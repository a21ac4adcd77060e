use base64::{engine::general_purpose, Engine as _};

/// Synthesized speech returned by the text-to-speech engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    pub data: Vec<u8>,
    pub sample_rate: u32,
}

impl AudioPayload {
    pub fn new(data: Vec<u8>, sample_rate: u32) -> Self {
        Self { data, sample_rate }
    }

    /// Encodes the audio as a self-describing data URI for the response
    /// envelope.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:audio/wav;base64,{}",
            general_purpose::STANDARD.encode(&self.data)
        )
    }
}
