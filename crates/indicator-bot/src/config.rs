//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Telegram Bot API configuration
    pub telegram: TelegramConfig,

    /// Indicator service configuration
    #[serde(default)]
    pub indicator: IndicatorConfig,

    /// Webhook server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot auth token
    pub bot_token: String,

    /// Bot API base URL
    #[serde(default = "default_telegram_api_url")]
    pub api_url: String,

    /// Optional chat id that replies are pinned to instead of the
    /// inbound message's chat
    #[serde(default)]
    pub chat_id_override: Option<String>,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorConfig {
    /// Indicator service base URL
    #[serde(default = "default_indicator_url")]
    pub base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Comma-separated supported command words
    #[serde(default = "default_commands")]
    pub commands: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_indicator_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            commands: default_commands(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_telegram_api_url() -> String {
    "https://api.telegram.org".into()
}

fn default_indicator_url() -> String {
    "https://polar-cliffs-67704.herokuapp.com".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_commands() -> String {
    "rsi".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder().add_source(
            config::Environment::default()
                .separator("__")
                // Values stay strings; humantime and u16 fields parse
                // from their serde representations.
                .try_parsing(false),
        );

        // Flat names recognized for parity with earlier deployments.
        if let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") {
            builder = builder
                .set_override("telegram.bot_token", token)
                .context("Failed to apply TELEGRAM_BOT_TOKEN")?;
        }
        if let Ok(chat_id) = std::env::var("CHAT_ID") {
            builder = builder
                .set_override("telegram.chat_id_override", chat_id)
                .context("Failed to apply CHAT_ID")?;
        }

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Supported command words.
    pub fn commands(&self) -> Vec<String> {
        self.bot
            .commands
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Configured chat id override, validated as numeric.
    pub fn chat_id_override(&self) -> Result<Option<i64>> {
        self.telegram
            .chat_id_override
            .as_deref()
            .map(|raw| {
                raw.parse()
                    .with_context(|| format!("Invalid chat id override: {}", raw))
            })
            .transpose()
    }
}
