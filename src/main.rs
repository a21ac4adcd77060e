use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use garcon::application::ports::{
    ResponseGenerator, SpeechSynthesizer, StagingStore, TranscriptionEngine,
};
use garcon::application::services::TurnService;
use garcon::infrastructure::audio::{MockTranscriptionEngine, OpenAiWhisperEngine};
use garcon::infrastructure::llm::{MockResponseGenerator, OpenAiGenerator};
use garcon::infrastructure::observability::{init_tracing, TracingConfig};
use garcon::infrastructure::speech::{MockSpeechSynthesizer, OpenAiSpeechEngine};
use garcon::infrastructure::storage::LocalStagingStore;
use garcon::presentation::config::{
    EngineProvider, GenerationSettings, SynthesisSettings, TranscriptionSettings,
};
use garcon::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            environment: settings.logging.environment.clone(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let staging_store: Arc<dyn StagingStore> = Arc::new(LocalStagingStore::new(PathBuf::from(
        &settings.storage.local_path,
    ))?);

    let turn_service = Arc::new(TurnService::new(
        build_transcription_engine(&settings.transcription),
        build_response_generator(&settings.generation),
        build_speech_synthesizer(&settings.synthesis),
        staging_store,
        settings.auth.api_key.clone(),
        Duration::from_secs(settings.generation.timeout_seconds),
    ));

    let addr = settings
        .server
        .socket_addr()
        .with_context(|| format!("Invalid SERVER_HOST: {}", settings.server.host))?;
    let state = AppState {
        turn_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn build_transcription_engine(settings: &TranscriptionSettings) -> Arc<dyn TranscriptionEngine> {
    match settings.provider {
        EngineProvider::Mock => {
            tracing::info!("Using mock transcription engine");
            Arc::new(MockTranscriptionEngine::returning(
                "Un café, s'il vous plaît.",
            ))
        }
        EngineProvider::OpenAi => Arc::new(OpenAiWhisperEngine::new(
            settings.api_key.clone(),
            settings.base_url.clone(),
            settings.model.clone(),
            Duration::from_secs(settings.timeout_seconds),
        )),
    }
}

fn build_response_generator(settings: &GenerationSettings) -> Arc<dyn ResponseGenerator> {
    match settings.provider {
        EngineProvider::Mock => {
            tracing::info!("Using mock response generator");
            Arc::new(MockResponseGenerator::returning(
                "Bien. Un café. C'est tout?",
            ))
        }
        EngineProvider::OpenAi => Arc::new(OpenAiGenerator::new(
            settings.api_key.clone(),
            settings.base_url.clone(),
            settings.model.clone(),
            settings.max_tokens,
            settings.temperature,
            Duration::from_secs(settings.timeout_seconds),
        )),
    }
}

fn build_speech_synthesizer(settings: &SynthesisSettings) -> Arc<dyn SpeechSynthesizer> {
    match settings.provider {
        EngineProvider::Mock => {
            tracing::info!("Using mock speech synthesizer");
            Arc::new(MockSpeechSynthesizer::speaking())
        }
        EngineProvider::OpenAi => Arc::new(OpenAiSpeechEngine::new(
            settings.api_key.clone(),
            settings.base_url.clone(),
            settings.model.clone(),
            settings.voice.clone(),
            Duration::from_secs(settings.timeout_seconds),
        )),
    }
}
