//! Bot configuration structs
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;

use bot_core::ChannelName;

/// Main bot configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    pub bot: BotSettings,
    pub server: ServerConfig,
    pub channels: ChannelSettings,
}

/// General bot settings
#[derive(Debug, Clone, Deserialize)]
pub struct BotSettings {
    #[serde(default = "default_nickname")]
    pub nickname: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Chat server endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Channels the bot joins at startup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelSettings {
    #[serde(default)]
    pub autojoin: Vec<String>,
}

impl ChannelSettings {
    /// Autojoin channels with the leading `#` normalization applied
    pub fn autojoin_channels(&self) -> Vec<ChannelName> {
        self.autojoin.iter().map(|name| ChannelName::new(name)).collect()
    }
}

// Default value functions
fn default_nickname() -> String {
    "seenbot".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

impl BotConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or
    /// carry unparseable values
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let port = match env::var("SERVER_PORT") {
            Err(_) => return Err(ConfigError::MissingVar("SERVER_PORT")),
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT", raw))?,
        };

        Ok(Self {
            bot: BotSettings {
                nickname: env::var("BOT_NICKNAME").unwrap_or_else(|_| default_nickname()),
                env: env::var("BOT_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| default_host()),
                port,
            },
            channels: ChannelSettings {
                autojoin: env::var("BOT_CHANNELS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|c| !c.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
