//! Plugin state
//!
//! Shared dependencies for event handlers and commands.

use std::sync::Arc;

use bot_common::{BotConfig, ConfigError};
use bot_core::{ChatTransport, Nickname};

use crate::registry::PresenceRegistry;

/// Shared presence plugin state
///
/// Holds the registry singleton and the transport handle; constructed once
/// at startup and cloned into every handler.
#[derive(Clone)]
pub struct PluginState {
    /// Presence registry shared by all handlers
    registry: Arc<PresenceRegistry>,
    /// Outbound boundary to the protocol layer
    transport: Arc<dyn ChatTransport>,
}

impl PluginState {
    /// Create plugin state from an existing registry and transport
    pub fn new(registry: Arc<PresenceRegistry>, transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            registry,
            transport,
        }
    }

    /// Build state from configuration, constructing the registry around the
    /// configured nickname
    ///
    /// # Errors
    /// Returns an error if the configured nickname is empty.
    pub fn from_config(
        config: &BotConfig,
        transport: Arc<dyn ChatTransport>,
    ) -> Result<Self, ConfigError> {
        let self_nick = Nickname::new(&config.bot.nickname).ok_or_else(|| {
            ConfigError::InvalidValue("BOT_NICKNAME", config.bot.nickname.clone())
        })?;

        Ok(Self::new(PresenceRegistry::new_shared(self_nick), transport))
    }

    /// Get the presence registry
    pub fn registry(&self) -> &PresenceRegistry {
        &self.registry
    }

    /// Get the transport handle
    pub fn transport(&self) -> &dyn ChatTransport {
        self.transport.as_ref()
    }
}

impl std::fmt::Debug for PluginState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginState")
            .field("registry", &self.registry)
            .finish()
    }
}
