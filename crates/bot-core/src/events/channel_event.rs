//! Channel event types
//!
//! The protocol layer translates wire traffic into these events and hands
//! them to the presence plugin one at a time.

use serde::{Deserialize, Serialize};

use crate::value_objects::{ChannelName, Nickname};

/// Context for a message that may require a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContext {
    /// Sender of the message
    pub nick: Nickname,
    /// Channel the message was sent in
    pub channel: ChannelName,
    /// Whether the message was directed at the bot
    pub directed: bool,
}

impl MessageContext {
    /// Create a message context
    pub fn new(nick: Nickname, channel: ChannelName, directed: bool) -> Self {
        Self {
            nick,
            channel,
            directed,
        }
    }

    /// Same sender and direction, different target channel
    pub fn in_channel(&self, channel: ChannelName) -> Self {
        Self {
            nick: self.nick.clone(),
            channel,
            directed: self.directed,
        }
    }
}

/// Protocol events that affect presence state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChannelEvent {
    /// The bot itself finished joining a channel
    JoinedChannel { channel: ChannelName },

    /// Another user joined a channel
    UserJoined {
        nick: Nickname,
        channel: ChannelName,
    },

    /// A user left a channel
    UserLeft {
        nick: Nickname,
        channel: ChannelName,
    },

    /// A user disconnected from the server
    UserQuit { nick: Nickname, message: String },

    /// Server reply to a membership-list request, entries as sent on the wire
    NamesReply {
        channel: ChannelName,
        entries: Vec<String>,
    },

    /// End of a membership-list reply
    NamesEnd { channel: ChannelName },

    /// An ordinary chat message
    Message {
        context: MessageContext,
        text: String,
    },
}
