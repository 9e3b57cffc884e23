//! Reaction-role binding table.
//!
//! Maps a message to a set of emoji-to-role-name associations. The table is
//! consulted on every reaction event; a message absent from the table is
//! simply not a role-granting message. Entries are created by an operator
//! command and never removed, even when the underlying message or role is
//! later deleted, so stale bindings persist until the process restarts.

use serenity::all::{MessageId, ReactionType};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Converts an emoji into the string key used by the binding table.
///
/// Unicode emoji key as themselves; custom guild emoji key as their
/// `<:name:id>` tag, which is stable for a given emoji across events.
pub fn emoji_key(emoji: &ReactionType) -> String {
    emoji.to_string()
}

/// Table of reaction-role bindings, shared across handlers.
///
/// Cloning the table shares the underlying storage. All access goes through
/// the async lock; the lock is never held across a remote call, so handler
/// bodies cannot observe a torn entry.
#[derive(Clone)]
pub struct ReactionRoleTable {
    bindings: Arc<RwLock<HashMap<MessageId, HashMap<String, String>>>>,
}

impl ReactionRoleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            bindings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Records an association between an emoji on a message and a role name.
    ///
    /// A message can carry any number of independent emoji bindings. Binding
    /// an emoji that is already bound on the same message silently overwrites
    /// the previous role name (last write wins).
    pub async fn bind(&self, message_id: MessageId, emoji_key: String, role_name: String) {
        let mut bindings = self.bindings.write().await;
        bindings
            .entry(message_id)
            .or_default()
            .insert(emoji_key, role_name);
    }

    /// Looks up the role name bound to an emoji on a message.
    ///
    /// Returns `None` when the message has no bindings at all or when this
    /// particular emoji is unbound; callers treat both as a no-op.
    pub async fn role_for(&self, message_id: MessageId, emoji_key: &str) -> Option<String> {
        let bindings = self.bindings.read().await;
        bindings
            .get(&message_id)
            .and_then(|entries| entries.get(emoji_key))
            .cloned()
    }

    /// Number of emoji bound on a message. Used in tests to verify that
    /// overwriting does not add entries.
    #[cfg(test)]
    pub async fn binding_count(&self, message_id: MessageId) -> usize {
        let bindings = self.bindings.read().await;
        bindings.get(&message_id).map_or(0, HashMap::len)
    }
}

impl Default for ReactionRoleTable {
    fn default() -> Self {
        Self::new()
    }
}
