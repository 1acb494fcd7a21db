use std::time::Duration;

use homeval_core::theme::Theme;
use homeval_inference::loader::DEFAULT_MODEL_TIMEOUT_SECS;
use homeval_inference::ModelSource;

/// Server configuration loaded from environment variables.
///
/// All fields except the model source have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Where the price model is loaded from.
    pub model_source: ModelSource,
    /// Presentation settings served to the front end.
    pub theme: Theme,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MODEL_PATH`           | (one of PATH/URL required) |
    /// | `MODEL_URL`            | (one of PATH/URL required) |
    /// | `MODEL_TIMEOUT_SECS`   | `10`                       |
    /// | `UI_COLOR_SCHEME`      | `classic`                  |
    /// | `UI_ANIMATE_PRICE`     | `false`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let model_timeout_secs: u64 = std::env::var("MODEL_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_MODEL_TIMEOUT_SECS.to_string())
            .parse()
            .expect("MODEL_TIMEOUT_SECS must be a valid u64");

        let model_source = ModelSource::from_settings(
            std::env::var("MODEL_PATH").ok(),
            std::env::var("MODEL_URL").ok(),
            Duration::from_secs(model_timeout_secs),
        )
        .unwrap_or_else(|e| panic!("Invalid model configuration: {e}"));

        let scheme = std::env::var("UI_COLOR_SCHEME").unwrap_or_else(|_| "classic".into());
        let animate = parse_flag(&std::env::var("UI_ANIMATE_PRICE").unwrap_or_default());
        let theme = Theme::from_settings(&scheme, animate)
            .unwrap_or_else(|e| panic!("Invalid UI theme: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            model_source,
            theme,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// `1`, `true`, `yes` and `on` (any case) enable a flag; anything else disables it.
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
