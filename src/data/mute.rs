//! Mute expiry registrar.
//!
//! Tracks which users are under a timed mute and when each mute ends. The
//! registrar only records release times; applying and removing the mute role
//! on the platform is the caller's business. The periodic sweep asks for the
//! due entries, performs the release side effects, and then removes the
//! records. All comparisons are against a caller-supplied "now", so expiry
//! logic is testable with synthetic clocks.

use chrono::{DateTime, Utc};
use serenity::all::{GuildId, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One tracked mute: where to release it and when it is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteRecord {
    /// Guild the mute role was applied in, needed for the release call.
    pub guild_id: GuildId,
    /// Absolute point in time at which the mute ends.
    pub expires_at: DateTime<Utc>,
}

/// Registrar of outstanding timed mutes, shared across handlers.
///
/// A user has at most one record at a time; registering again overwrites the
/// previous record. Cloning the registrar shares the underlying storage.
#[derive(Clone)]
pub struct MuteRegistrar {
    records: Arc<RwLock<HashMap<UserId, MuteRecord>>>,
}

impl MuteRegistrar {
    /// Creates an empty registrar.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Tracks a mute until `expires_at`, overwriting any existing record for
    /// the user.
    pub async fn register(&self, user_id: UserId, guild_id: GuildId, expires_at: DateTime<Utc>) {
        let mut records = self.records.write().await;
        records.insert(
            user_id,
            MuteRecord {
                guild_id,
                expires_at,
            },
        );
    }

    /// Drops the record for a user without any release side effect.
    ///
    /// Used when an explicit unmute has already revoked the mute state on the
    /// platform. Returns whether a record existed.
    pub async fn clear(&self, user_id: UserId) -> bool {
        let mut records = self.records.write().await;
        records.remove(&user_id).is_some()
    }

    /// Entries whose expiry is at or before `now`.
    ///
    /// Records are not removed here; the sweep removes each entry after
    /// attempting its release so that a failed release never blocks removal.
    pub async fn due(&self, now: DateTime<Utc>) -> Vec<(UserId, MuteRecord)> {
        let records = self.records.read().await;
        records
            .iter()
            .filter(|(_, record)| record.expires_at <= now)
            .map(|(user_id, record)| (*user_id, *record))
            .collect()
    }

    /// Removes the record for a user, but only while it is still expired as
    /// of `now`.
    ///
    /// A mute re-issued while the sweep was awaiting a release call has a
    /// fresh expiry and must survive; the guard keeps the sweep from deleting
    /// it. Returns whether a record was removed.
    pub async fn remove_if_expired(&self, user_id: UserId, now: DateTime<Utc>) -> bool {
        let mut records = self.records.write().await;
        match records.get(&user_id) {
            Some(record) if record.expires_at <= now => {
                records.remove(&user_id);
                true
            }
            _ => false,
        }
    }

    /// Whether a record exists for the user. Used in tests.
    #[cfg(test)]
    pub async fn is_registered(&self, user_id: UserId) -> bool {
        let records = self.records.read().await;
        records.contains_key(&user_id)
    }
}

impl Default for MuteRegistrar {
    fn default() -> Self {
        Self::new()
    }
}
