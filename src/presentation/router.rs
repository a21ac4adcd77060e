use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ResponseGenerator, SpeechSynthesizer, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, turn_handler};
use crate::presentation::state::AppState;

pub fn create_router<T, G, S>(state: AppState<T, G, S>) -> Router
where
    T: TranscriptionEngine + 'static + ?Sized,
    G: ResponseGenerator + 'static + ?Sized,
    S: SpeechSynthesizer + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Leave headroom above the audio cap for the other multipart fields.
    let body_limit = state.settings.storage.max_upload_size_bytes + 64 * 1024;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/turn", post(turn_handler::<T, G, S>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
