use anyhow::anyhow;
use serde::Deserialize;

/// ================================
/// Service-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Identity provider base host. Overridable so tests can point the
    /// client at a local stub.
    #[serde(default = "default_edl_base_url")]
    pub edl_base_url: String,
    #[serde(default = "default_region")]
    pub region: String,
    pub logging: Option<LoggingConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            edl_base_url: default_edl_base_url(),
            region: default_region(),
            logging: None,
        }
    }
}

/// ================================
/// Invocation event
/// ================================
/// Payload handed over by the scheduler. Anything beyond the prefix is
/// opaque to this task and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RotationEvent {
    pub prefix: String,
}

impl RotationEvent {
    /// Resolve the event from a raw JSON payload or a bare prefix argument.
    pub fn resolve(event_json: Option<&str>, prefix: Option<String>) -> anyhow::Result<Self> {
        if let Some(raw) = event_json {
            return serde_json::from_str(raw)
                .map_err(|err| anyhow!("invalid rotation event payload: {err}"));
        }
        prefix
            .map(|prefix| Self { prefix })
            .ok_or_else(|| anyhow!("either --event or --prefix must be provided"))
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

fn default_edl_base_url() -> String {
    "https://urs.earthdata.nasa.gov".to_string()
}

fn default_region() -> String {
    "us-west-2".to_string()
}
