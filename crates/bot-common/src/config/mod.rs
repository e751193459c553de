//! Configuration loading

mod bot_config;

pub use bot_config::{
    BotConfig, BotSettings, ChannelSettings, ConfigError, Environment, ServerConfig,
};
