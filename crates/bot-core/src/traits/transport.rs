//! Chat transport trait - outbound actions the presence plugin may take
//!
//! The domain layer defines what it needs to send; the protocol layer
//! provides the implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::events::MessageContext;
use crate::value_objects::ChannelName;

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors surfaced by the protocol layer
#[derive(Debug, Error)]
pub enum TransportError {
    /// The connection to the chat server is gone
    #[error("Connection closed")]
    ConnectionClosed,

    /// An outbound line could not be delivered
    #[error("Send failed: {0}")]
    SendFailed(String),
}

/// Outbound actions produced by the presence plugin
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Reply to a message in its originating channel
    async fn reply(&self, context: &MessageContext, text: &str) -> TransportResult<()>;

    /// Ask the server to join a channel
    async fn join_channel(&self, channel: &ChannelName) -> TransportResult<()>;

    /// Ask the server to part a channel
    async fn leave_channel(&self, channel: &ChannelName) -> TransportResult<()>;

    /// Request the membership list for a channel
    async fn request_names(&self, channel: &ChannelName) -> TransportResult<()>;
}
