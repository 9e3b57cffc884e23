//! Serenity-backed implementation of the chat gateway.

use serenity::all::{
    ChannelId, CreateMessage, GuildId, MessageId, ReactionType, RoleId, UserId,
};
use serenity::async_trait;
use serenity::http::{Http, HttpError, StatusCode};
use std::sync::Arc;

use crate::error::gateway::GatewayError;
use crate::gateway::{ChatGateway, RoleHandle};

/// Gateway over the bot's shared Discord HTTP client.
pub struct DiscordGateway {
    http: Arc<Http>,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

/// Whether the error is Discord reporting a missing resource rather than a
/// transport or permission failure.
fn is_not_found(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code == StatusCode::NOT_FOUND
    )
}

#[async_trait]
impl ChatGateway for DiscordGateway {
    async fn find_role(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<Option<RoleHandle>, GatewayError> {
        let roles = self.http.get_guild_roles(guild_id).await?;
        Ok(roles
            .into_iter()
            .find(|role| role.name == name)
            .map(|role| RoleHandle {
                id: role.id,
                name: role.name,
            }))
    }

    async fn grant_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), GatewayError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, None)
            .await?;
        Ok(())
    }

    async fn revoke_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), GatewayError> {
        self.http
            .remove_member_role(guild_id, user_id, role_id, None)
            .await?;
        Ok(())
    }

    async fn member_roles(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<Vec<RoleId>>, GatewayError> {
        match self.http.get_member(guild_id, user_id).await {
            Ok(member) => Ok(Some(member.roles)),
            Err(err) if is_not_found(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn add_reaction(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &ReactionType,
    ) -> Result<(), GatewayError> {
        self.http
            .create_reaction(channel_id, message_id, emoji)
            .await?;
        Ok(())
    }

    async fn message_exists(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<bool, GatewayError> {
        match self.http.get_message(channel_id, message_id).await {
            Ok(_) => Ok(true),
            Err(err) if is_not_found(&err) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn send_text(&self, channel_id: ChannelId, content: &str) -> Result<(), GatewayError> {
        channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;
        Ok(())
    }
}
