//! Test doubles shared by unit tests

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use bot_core::{ChannelName, ChatTransport, MessageContext, Nickname, TransportResult};

use crate::registry::PresenceRegistry;
use crate::state::PluginState;

/// Outbound action captured by the recording transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentAction {
    Reply { channel: String, text: String },
    Join { channel: String },
    Leave { channel: String },
    Names { channel: String },
}

/// Transport double that records every outbound action
#[derive(Default)]
pub struct RecordingTransport {
    actions: Mutex<Vec<SentAction>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<SentAction> {
        self.actions.lock().clone()
    }

    /// Reply texts only, in send order
    pub fn replies(&self) -> Vec<String> {
        self.actions
            .lock()
            .iter()
            .filter_map(|action| match action {
                SentAction::Reply { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn reply(&self, context: &MessageContext, text: &str) -> TransportResult<()> {
        self.actions.lock().push(SentAction::Reply {
            channel: context.channel.as_str().to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn join_channel(&self, channel: &ChannelName) -> TransportResult<()> {
        self.actions.lock().push(SentAction::Join {
            channel: channel.as_str().to_string(),
        });
        Ok(())
    }

    async fn leave_channel(&self, channel: &ChannelName) -> TransportResult<()> {
        self.actions.lock().push(SentAction::Leave {
            channel: channel.as_str().to_string(),
        });
        Ok(())
    }

    async fn request_names(&self, channel: &ChannelName) -> TransportResult<()> {
        self.actions.lock().push(SentAction::Names {
            channel: channel.as_str().to_string(),
        });
        Ok(())
    }
}

/// Plugin state wired to a fresh registry and recording transport
pub fn state_with_bot(bot_nick: &str) -> (PluginState, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    let registry = PresenceRegistry::new_shared(Nickname::new(bot_nick).unwrap());
    let state = PluginState::new(registry, transport.clone());
    (state, transport)
}
