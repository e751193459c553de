//! Presence record - a tracked user's last observed activity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Nickname;

/// A tracked user's presence state
///
/// `last_seen = None` means the user is known to be present but no
/// qualifying activity has been observed since tracking began.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceRecord {
    pub nickname: Nickname,
    pub last_seen: Option<DateTime<Utc>>,
}

impl PresenceRecord {
    /// Create a record for a user observed acting at `at`
    pub fn active(nickname: Nickname, at: DateTime<Utc>) -> Self {
        Self {
            nickname,
            last_seen: Some(at),
        }
    }

    /// Create a record for a user known to be present with no observed activity
    pub fn seeded(nickname: Nickname) -> Self {
        Self {
            nickname,
            last_seen: None,
        }
    }

    /// Advance the activity timestamp
    ///
    /// The timestamp never moves backwards; a stale `at` leaves the record
    /// unchanged.
    pub fn mark_active(&mut self, at: DateTime<Utc>) {
        match self.last_seen {
            Some(prev) if prev >= at => {}
            _ => self.last_seen = Some(at),
        }
    }

    /// Whether any qualifying activity has been observed
    #[inline]
    pub fn has_activity(&self) -> bool {
        self.last_seen.is_some()
    }
}
