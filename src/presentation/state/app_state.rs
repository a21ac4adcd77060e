use std::sync::Arc;

use crate::application::ports::{ResponseGenerator, SpeechSynthesizer, TranscriptionEngine};
use crate::application::services::TurnService;
use crate::presentation::config::Settings;

pub struct AppState<T, G, S>
where
    T: TranscriptionEngine + ?Sized,
    G: ResponseGenerator + ?Sized,
    S: SpeechSynthesizer + ?Sized,
{
    pub turn_service: Arc<TurnService<T, G, S>>,
    pub settings: Settings,
}

impl<T, G, S> Clone for AppState<T, G, S>
where
    T: TranscriptionEngine + ?Sized,
    G: ResponseGenerator + ?Sized,
    S: SpeechSynthesizer + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            turn_service: Arc::clone(&self.turn_service),
            settings: self.settings.clone(),
        }
    }
}
