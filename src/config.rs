use std::env;

use thiserror::Error;

pub const ENV_VAR: &str = "LABGATE_ENV";
pub const LOG_LEVEL_VAR: &str = "LABGATE_LOG_LEVEL";
pub const OUTPUT_VAR: &str = "LABGATE_OUTPUT";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Where the tool is running. Unrecognised values fall back to development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidOutput {
                value: value.to_owned(),
            }),
        }
    }
}

/// Runtime settings for the `labgate` binary.
///
/// Decision thresholds are fixed in code; only how the tool logs and prints
/// is configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub output: OutputFormat,
}

/// Tracing controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl AppConfig {
    /// Load from the process environment, after reading `.env` if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable holds an unsupported value.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable holds an unsupported value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = lookup(ENV_VAR)
            .map(|value| AppEnvironment::from_str(&value))
            .unwrap_or_default();

        let log_level = lookup(LOG_LEVEL_VAR)
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());

        let output = match lookup(OUTPUT_VAR) {
            Some(value) => OutputFormat::parse(&value)?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            output,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported output format '{value}' in LABGATE_OUTPUT; expected 'text' or 'json'")]
    InvalidOutput { value: String },
}
