//! Reaction-role binding operations.

use serenity::all::{ChannelId, GuildId, MessageId, ReactionType, UserId};

use crate::data::reaction_role::emoji_key;
use crate::data::ReactionRoleTable;
use crate::error::{command::CommandError, AppError};
use crate::gateway::ChatGateway;

/// Service for creating reaction-role bindings and acting on reaction events.
pub struct ReactionRoleService<'a> {
    bindings: &'a ReactionRoleTable,
    gateway: &'a dyn ChatGateway,
}

impl<'a> ReactionRoleService<'a> {
    pub fn new(bindings: &'a ReactionRoleTable, gateway: &'a dyn ChatGateway) -> Self {
        Self { bindings, gateway }
    }

    /// Registers a new (message, emoji, role) association.
    ///
    /// The named role must exist in the guild and the target message must be
    /// accessible; either failure surfaces immediately and leaves the table
    /// untouched. On success the bot attaches the emoji to the message so
    /// users see which reaction to press, then records the association.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose role registry is consulted
    /// - `channel_id` - Channel containing the target message
    /// - `message_id` - Message the reaction is attached to
    /// - `emoji` - Reaction emoji to bind
    /// - `role_name` - Name of the role to grant and revoke
    ///
    /// # Returns
    /// - `Ok(())` - Binding recorded and reaction attached
    /// - `Err(CommandError::RoleNotFound)` - No role with that name exists
    /// - `Err(CommandError::MessageNotFound)` - Message is not accessible
    pub async fn bind(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: ReactionType,
        role_name: &str,
    ) -> Result<(), AppError> {
        if self.gateway.find_role(guild_id, role_name).await?.is_none() {
            return Err(CommandError::RoleNotFound(role_name.to_string()).into());
        }
        if !self.gateway.message_exists(channel_id, message_id).await? {
            return Err(CommandError::MessageNotFound(message_id).into());
        }

        self.gateway
            .add_reaction(channel_id, message_id, &emoji)
            .await?;
        self.bindings
            .bind(message_id, emoji_key(&emoji), role_name.to_string())
            .await;

        tracing::info!(
            "Bound {} on message {} to role '{}'",
            emoji,
            message_id,
            role_name
        );
        Ok(())
    }

    /// Grants the bound role when a user adds a tracked reaction.
    ///
    /// No-op when the message has no bindings, when this emoji is unbound, or
    /// when the reacting user is the bot itself (the bot seeds the first
    /// reaction on every bound message). A role that has been deleted since
    /// binding surfaces as `RoleNotFound`; the binding stays in place.
    pub async fn reaction_added(
        &self,
        bot_id: UserId,
        guild_id: GuildId,
        message_id: MessageId,
        emoji: &ReactionType,
        user_id: UserId,
    ) -> Result<(), AppError> {
        if user_id == bot_id {
            return Ok(());
        }
        let Some(role_name) = self.bindings.role_for(message_id, &emoji_key(emoji)).await else {
            return Ok(());
        };

        let Some(role) = self.gateway.find_role(guild_id, &role_name).await? else {
            return Err(CommandError::RoleNotFound(role_name).into());
        };
        self.gateway.grant_role(guild_id, user_id, role.id).await?;

        tracing::info!(
            "Granted role '{}' to user {} via reaction on message {}",
            role.name,
            user_id,
            message_id
        );
        Ok(())
    }

    /// Revokes the bound role when a user removes a tracked reaction.
    ///
    /// Mirror of [`Self::reaction_added`], with the same guards. Removing the
    /// last reaction of a kind does not remove the binding itself.
    pub async fn reaction_removed(
        &self,
        bot_id: UserId,
        guild_id: GuildId,
        message_id: MessageId,
        emoji: &ReactionType,
        user_id: UserId,
    ) -> Result<(), AppError> {
        if user_id == bot_id {
            return Ok(());
        }
        let Some(role_name) = self.bindings.role_for(message_id, &emoji_key(emoji)).await else {
            return Ok(());
        };

        let Some(role) = self.gateway.find_role(guild_id, &role_name).await? else {
            return Err(CommandError::RoleNotFound(role_name).into());
        };
        self.gateway.revoke_role(guild_id, user_id, role.id).await?;

        tracing::info!(
            "Revoked role '{}' from user {} via reaction on message {}",
            role.name,
            user_id,
            message_id
        );
        Ok(())
    }
}
