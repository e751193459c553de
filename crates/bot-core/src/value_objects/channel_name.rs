//! Channel name - normalized channel identifier
//!
//! Bare names lacking a leading `#` get one prepended. Construction never
//! fails; malformed fragments are corrected rather than rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized channel name, always carrying the leading `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelName(String);

impl ChannelName {
    /// Create a channel name, prepending `#` when missing
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with('#') {
            Self(trimmed.to_string())
        } else {
            Self(format!("#{trimmed}"))
        }
    }

    /// The normalized name including the leading `#`
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChannelName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
