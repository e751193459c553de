//! Channel event handlers
//!
//! Translates protocol events into presence registry mutations and, for
//! chat messages, hands the text on to command dispatch.

mod error;

pub use error::{HandlerError, HandlerResult};

use bot_core::{ChannelEvent, Nickname};

use crate::commands;
use crate::state::PluginState;

/// Dispatch incoming channel events to the presence registry
pub struct EventDispatcher;

impl EventDispatcher {
    /// Handle one protocol event
    ///
    /// Registry mutations are synchronous; the await points are transport
    /// sends only.
    pub async fn dispatch(state: &PluginState, event: ChannelEvent) -> HandlerResult<()> {
        match event {
            ChannelEvent::JoinedChannel { channel } => {
                tracing::debug!(channel = %channel, "Joined channel, requesting membership list");
                state.transport().request_names(&channel).await?;
            }
            ChannelEvent::UserJoined { nick, .. } => {
                state.registry().record_activity(&nick);
            }
            // departure is an activity signal, not a removal
            ChannelEvent::UserLeft { nick, .. } | ChannelEvent::UserQuit { nick, .. } => {
                state.registry().record_activity(&nick);
            }
            ChannelEvent::NamesReply { channel, entries } => {
                for entry in &entries {
                    if let Some(nick) = Nickname::from_names_entry(entry) {
                        state.registry().seed_presence(&nick);
                    }
                }
                tracing::debug!(
                    channel = %channel,
                    count = entries.len(),
                    "Membership list ingested"
                );
            }
            ChannelEvent::NamesEnd { channel } => {
                tracing::trace!(channel = %channel, "Membership list complete");
            }
            ChannelEvent::Message { context, text } => {
                state.registry().record_activity(&context.nick);
                commands::dispatch(state, &context, &text).await?;
            }
        }

        Ok(())
    }
}
