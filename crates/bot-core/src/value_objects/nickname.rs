//! Nickname - case-insensitive user handle
//!
//! The presence registry keys users by the lowercased form while preserving
//! the display form as first entered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Markers a membership-list reply may prefix to a nickname to flag channel
/// operator or voice status.
const STATUS_MARKERS: [char; 3] = ['@', '+', '#'];

/// Case-insensitive user handle with the display form preserved
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nickname(String);

impl Nickname {
    /// Create a nickname from raw input
    ///
    /// Surrounding whitespace is trimmed. Returns `None` for empty or
    /// all-whitespace input; a missing name is never an error.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Create a nickname from a raw membership-list entry
    ///
    /// Strips a single leading operator/voice marker before construction.
    pub fn from_names_entry(raw: &str) -> Option<Self> {
        let stripped = raw.strip_prefix(STATUS_MARKERS).unwrap_or(raw);
        Self::new(stripped)
    }

    /// Display form as first entered
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used as the registry key
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Case-insensitive comparison against raw input
    pub fn matches(&self, other: &str) -> bool {
        self.key() == other.trim().to_lowercase()
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
