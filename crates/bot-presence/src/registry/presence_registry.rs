//! Presence registry
//!
//! Tracks every user ever observed and the time of their last activity.
//! A single mutex guards the whole table and is held only for the duration
//! of one map access; rendering and transport I/O happen outside the lock.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use parking_lot::Mutex;

use bot_core::{Nickname, PresenceRecord};

/// Registry of every user observed since startup
///
/// Keys are lowercased nicknames; iteration order is first-observed order.
/// Records are never removed; a user who leaves stays queryable with their
/// last activity time.
pub struct PresenceRegistry {
    /// The nickname the bot runs under; signals about it are always ignored
    self_nick: Nickname,
    /// Tracked users keyed by lowercased nickname, first-observed order
    records: Mutex<IndexMap<String, PresenceRecord>>,
}

impl PresenceRegistry {
    /// Create a new registry for a bot running under `self_nick`
    pub fn new(self_nick: Nickname) -> Self {
        Self {
            self_nick,
            records: Mutex::new(IndexMap::new()),
        }
    }

    /// Create a new registry wrapped in Arc
    #[must_use]
    pub fn new_shared(self_nick: Nickname) -> Arc<Self> {
        Arc::new(Self::new(self_nick))
    }

    /// The nickname the bot is running under
    pub fn self_nick(&self) -> &Nickname {
        &self.self_nick
    }

    /// Check whether a name refers to the bot itself
    pub fn is_self(&self, name: &str) -> bool {
        self.self_nick.matches(name)
    }

    /// Mark a user as having just acted
    ///
    /// Creates the record if the user is new, otherwise advances the
    /// existing timestamp. The clock is sampled at each call.
    pub fn record_activity(&self, nick: &Nickname) {
        self.record_activity_at(nick, Utc::now());
    }

    /// Timestamped variant backing `record_activity`
    pub(crate) fn record_activity_at(&self, nick: &Nickname, at: DateTime<Utc>) {
        if self.is_self(nick.as_str()) {
            tracing::trace!(nick = %nick, "Ignoring activity for own nickname");
            return;
        }

        let mut records = self.records.lock();
        match records.get_mut(&nick.key()) {
            Some(record) => record.mark_active(at),
            None => {
                records.insert(nick.key(), PresenceRecord::active(nick.clone(), at));
                tracing::debug!(nick = %nick, "User added to presence registry");
            }
        }
    }

    /// Register a user from a membership list without an activity time
    ///
    /// An existing record is left untouched; seeding never erases or
    /// regresses a known activity time.
    pub fn seed_presence(&self, nick: &Nickname) {
        if self.is_self(nick.as_str()) {
            tracing::trace!(nick = %nick, "Ignoring seed for own nickname");
            return;
        }

        let mut records = self.records.lock();
        if !records.contains_key(&nick.key()) {
            records.insert(nick.key(), PresenceRecord::seeded(nick.clone()));
            tracing::debug!(nick = %nick, "User seeded into presence registry");
        }
    }

    /// Look up a user by case-insensitive name
    pub fn lookup(&self, name: &str) -> Option<PresenceRecord> {
        let key = name.trim().to_lowercase();
        self.records.lock().get(&key).cloned()
    }

    /// Display forms of all tracked users, first-observed order
    pub fn known_nicks(&self) -> Vec<String> {
        self.records
            .lock()
            .values()
            .map(|record| record.nickname.as_str().to_string())
            .collect()
    }

    /// Number of tracked users
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether any user has been observed yet
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl std::fmt::Debug for PresenceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresenceRegistry")
            .field("self_nick", &self.self_nick)
            .field("records", &self.records.lock().len())
            .finish()
    }
}
