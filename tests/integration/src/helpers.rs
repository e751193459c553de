//! Test helpers for integration tests
//!
//! Provides a recording transport double and a driver for scripted event
//! sequences.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use bot_core::{
    ChannelEvent, ChannelName, ChatTransport, MessageContext, Nickname, TransportResult,
};
use bot_presence::{EventDispatcher, PluginState, PresenceRegistry};

/// Outbound action captured by the recording transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Reply { channel: String, text: String },
    Join { channel: String },
    Leave { channel: String },
    Names { channel: String },
}

/// Transport double that records every outbound action
#[derive(Default)]
pub struct RecordingTransport {
    actions: Mutex<Vec<Action>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, in order
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().clone()
    }

    /// Reply texts only, in send order
    pub fn replies(&self) -> Vec<String> {
        self.actions
            .lock()
            .iter()
            .filter_map(|action| match action {
                Action::Reply { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of membership-list requests sent
    pub fn names_requests(&self) -> usize {
        self.actions
            .lock()
            .iter()
            .filter(|action| matches!(action, Action::Names { .. }))
            .count()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn reply(&self, context: &MessageContext, text: &str) -> TransportResult<()> {
        self.actions.lock().push(Action::Reply {
            channel: context.channel.as_str().to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn join_channel(&self, channel: &ChannelName) -> TransportResult<()> {
        self.actions.lock().push(Action::Join {
            channel: channel.as_str().to_string(),
        });
        Ok(())
    }

    async fn leave_channel(&self, channel: &ChannelName) -> TransportResult<()> {
        self.actions.lock().push(Action::Leave {
            channel: channel.as_str().to_string(),
        });
        Ok(())
    }

    async fn request_names(&self, channel: &ChannelName) -> TransportResult<()> {
        self.actions.lock().push(Action::Names {
            channel: channel.as_str().to_string(),
        });
        Ok(())
    }
}

/// Plugin state wired to a fresh registry and a recording transport
pub fn setup(bot_nick: &str) -> (PluginState, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    let registry = PresenceRegistry::new_shared(
        Nickname::new(bot_nick).expect("bot nickname fixture must not be blank"),
    );
    let state = PluginState::new(registry, transport.clone());
    (state, transport)
}

/// Feed a scripted sequence of events through the dispatcher
pub async fn drive(state: &PluginState, events: Vec<ChannelEvent>) -> Result<()> {
    for event in events {
        EventDispatcher::dispatch(state, event).await?;
    }
    Ok(())
}
