use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "warn" or "logcli_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

// Console logs share stderr with the child's diagnostics, keep them quiet.
fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Bound of the line channel between the capture workers and the printer.
    #[serde(default = "default_line_channel_capacity")]
    pub line_channel_capacity: usize,
}

fn default_line_channel_capacity() -> usize {
    100
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            line_channel_capacity: default_line_channel_capacity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Mode used when `--mode` is not given.
    #[serde(default = "default_style_mode")]
    pub mode: String,
}

fn default_style_mode() -> String {
    "normal".to_string()
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            mode: default_style_mode(),
        }
    }
}
