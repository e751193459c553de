//! Handler error types

use thiserror::Error;

use bot_core::TransportError;

/// Handler error type
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Transport failure while sending an outbound action
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Handler result type
pub type HandlerResult<T> = Result<T, HandlerError>;
