//! Narrow surface of the chat platform consumed by the bot.
//!
//! Everything the stateful services need from Discord goes through the
//! [`ChatGateway`] trait: role lookup, role mutation, the member-role probe
//! the sweep uses, reaction attachment, a message accessibility probe, and
//! plain text delivery. Keeping the surface this small lets the services run
//! against a recording fake in tests while production wires in the
//! Serenity-backed [`DiscordGateway`].

pub mod discord;

pub use discord::DiscordGateway;

use serenity::all::{ChannelId, GuildId, MessageId, ReactionType, RoleId, UserId};
use serenity::async_trait;

use crate::error::gateway::GatewayError;

/// A role as the platform reports it: handle plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleHandle {
    pub id: RoleId,
    pub name: String,
}

/// Remote operations the bot performs against the chat platform.
///
/// Implementations perform real network calls; any transport or permission
/// failure surfaces as [`GatewayError`]. "Not found" outcomes that callers
/// must act on (`find_role`, `member_roles`, `message_exists`) are modeled in
/// the return type instead of the error.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Looks up a role by name within a guild.
    async fn find_role(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<Option<RoleHandle>, GatewayError>;

    /// Grants a role to a member.
    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), GatewayError>;

    /// Revokes a role from a member.
    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), GatewayError>;

    /// Current role set of a member, or `None` when the member is no longer
    /// present in the guild.
    async fn member_roles(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<Vec<RoleId>>, GatewayError>;

    /// Attaches a reaction to a message so users see which emoji to press.
    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<(), GatewayError>;

    /// Whether the message exists and is accessible to the bot.
    async fn message_exists(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<bool, GatewayError>;

    /// Sends a plain text message to a channel.
    async fn send_text(&self, channel_id: ChannelId, content: &str) -> Result<(), GatewayError>;
}
