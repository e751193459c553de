//! Presence registry - the shared table of tracked users

mod presence_registry;

pub use presence_registry::PresenceRegistry;
