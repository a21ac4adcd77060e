mod audio_payload;
mod directive;
mod respect;
mod storage_path;
mod time_context;
mod transcript;

pub use audio_payload::AudioPayload;
pub use directive::Directive;
pub use respect::{RespectScore, RespectTier};
pub use storage_path::StoragePath;
pub use time_context::TimeContext;
pub use transcript::{Transcript, NO_SPEECH_SENTINEL};
