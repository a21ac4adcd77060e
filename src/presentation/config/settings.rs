use std::net::{AddrParseError, SocketAddr};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    pub transcription: TranscriptionSettings,
    pub generation: GenerationSettings,
    pub synthesis: SynthesisSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        Ok(SocketAddr::new(self.host.parse()?, self.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Pre-shared key compared for exact equality against `x-api-key`.
    pub api_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineProvider {
    Mock,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: EngineProvider,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub provider: EngineProvider,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Turn-level bound on the generation stage; exceeding it is surfaced
    /// as GenerationUnavailable.
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    pub provider: EngineProvider,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub voice: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub local_path: String,
    pub max_upload_size_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Fallback tracing filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Free-form deployment name, carried into the log fields.
    pub environment: String,
    pub enable_json: bool,
}

impl Settings {
    /// Builds settings from environment variables with local-dev defaults.
    /// Providers default to `mock` so the service boots without any
    /// upstream credentials.
    pub fn from_env() -> Self {
        let openai_key = env_or("OPENAI_API_KEY", "");
        let openai_base = env_or("OPENAI_BASE_URL", "https://api.openai.com/v1");
        let environment = env_or("APP_ENV", "local");

        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 8080),
            },
            auth: AuthSettings {
                api_key: env_or("TURN_API_KEY", "dev-key"),
            },
            transcription: TranscriptionSettings {
                provider: provider_from_env("TRANSCRIPTION_PROVIDER"),
                api_key: openai_key.clone(),
                base_url: openai_base.clone(),
                model: env_or("TRANSCRIPTION_MODEL", "whisper-1"),
                timeout_seconds: env_parse("TRANSCRIPTION_TIMEOUT_SECONDS", 30),
            },
            generation: GenerationSettings {
                provider: provider_from_env("GENERATION_PROVIDER"),
                api_key: openai_key.clone(),
                base_url: openai_base.clone(),
                model: env_or("GENERATION_MODEL", "gpt-4o-mini"),
                max_tokens: env_parse("GENERATION_MAX_TOKENS", 200),
                temperature: env_parse("GENERATION_TEMPERATURE", 0.7),
                timeout_seconds: env_parse("GENERATION_TIMEOUT_SECONDS", 30),
            },
            synthesis: SynthesisSettings {
                provider: provider_from_env("SYNTHESIS_PROVIDER"),
                api_key: openai_key,
                base_url: openai_base,
                model: env_or("SYNTHESIS_MODEL", "tts-1"),
                voice: env_or("SYNTHESIS_VOICE", "onyx"),
                timeout_seconds: env_parse("SYNTHESIS_TIMEOUT_SECONDS", 30),
            },
            storage: StorageSettings {
                local_path: env_or("STAGING_PATH", "./staging"),
                max_upload_size_bytes: env_parse("MAX_UPLOAD_SIZE_BYTES", 10 * 1024 * 1024),
            },
            logging: LoggingSettings {
                level: env_or("LOG_LEVEL", "info,garcon=debug,tower_http=debug"),
                enable_json: json_logging(
                    &environment,
                    std::env::var("LOG_FORMAT").ok().as_deref(),
                ),
                environment,
            },
        }
    }
}

/// JSON logs when explicitly requested, and always in prod.
fn json_logging(environment: &str, log_format: Option<&str>) -> bool {
    matches!(environment, "prod" | "production")
        || log_format
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn provider_from_env(key: &str) -> EngineProvider {
    match std::env::var(key).map(|v| v.to_lowercase()) {
        Ok(v) if v == "openai" => EngineProvider::OpenAi,
        _ => EngineProvider::Mock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prod_environment_forces_json_logs() {
        assert!(json_logging("prod", None));
        assert!(json_logging("production", None));
        assert!(!json_logging("local", None));
    }

    #[test]
    fn log_format_json_enables_json_logs_anywhere() {
        assert!(json_logging("local", Some("json")));
        assert!(json_logging("local", Some("JSON")));
        assert!(!json_logging("local", Some("plain")));
    }

    #[test]
    fn server_settings_resolve_to_a_socket_addr() {
        let server = ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(
            server.socket_addr().unwrap(),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
    }

    #[test]
    fn unparseable_host_is_rejected() {
        let server = ServerSettings {
            host: "not-an-ip".to_string(),
            port: 8080,
        };
        assert!(server.socket_addr().is_err());
    }
}
