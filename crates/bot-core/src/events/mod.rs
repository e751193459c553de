//! Channel events delivered by the protocol layer

mod channel_event;

pub use channel_event::{ChannelEvent, MessageContext};
