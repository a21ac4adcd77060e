mod settings;

pub use settings::{
    AuthSettings, EngineProvider, GenerationSettings, LoggingSettings, ServerSettings, Settings,
    StorageSettings, SynthesisSettings, TranscriptionSettings,
};
