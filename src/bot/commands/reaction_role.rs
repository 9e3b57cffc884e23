//! Operator command for creating reaction-role bindings.

use serenity::all::{Context, Message, MessageId, Permissions, ReactionType};

use crate::bot::commands::{log_action, require_permission};
use crate::error::{command::CommandError, AppError};
use crate::gateway::DiscordGateway;
use crate::service::ReactionRoleService;
use crate::state::AppState;

/// `reactionrole <message_id> <emoji> <role name>` - binds an emoji on a
/// message in the invoking channel to a role.
///
/// The role name may contain spaces; everything after the emoji is the name.
pub async fn bind(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    args: &str,
) -> Result<(), AppError> {
    const USAGE: &str = "reactionrole <message_id> <emoji> <role name>";

    let guild_id = require_permission(ctx, message, Permissions::MANAGE_ROLES)?;

    let Some((id_raw, rest)) = args.split_once(char::is_whitespace) else {
        return Err(CommandError::Usage(USAGE).into());
    };
    let Some((emoji_raw, role_name)) = rest.trim_start().split_once(char::is_whitespace) else {
        return Err(CommandError::Usage(USAGE).into());
    };
    let role_name = role_name.trim();
    if role_name.is_empty() {
        return Err(CommandError::Usage(USAGE).into());
    }

    let message_id = match id_raw.parse::<u64>() {
        Ok(id) if id != 0 => MessageId::new(id),
        _ => return Err(CommandError::InvalidMessageId(id_raw.to_string()).into()),
    };
    let emoji = ReactionType::try_from(emoji_raw)
        .map_err(|_| CommandError::InvalidEmoji(emoji_raw.to_string()))?;

    let gateway = DiscordGateway::new(ctx.http.clone());
    let service = ReactionRoleService::new(&state.reaction_roles, &gateway);
    service
        .bind(guild_id, message.channel_id, message_id, emoji.clone(), role_name)
        .await?;

    message
        .channel_id
        .say(
            &ctx.http,
            format!(
                "Reacting with {} on message {} now toggles the '{}' role.",
                emoji, message_id, role_name
            ),
        )
        .await?;
    log_action(
        state,
        &gateway,
        &format!(
            "🎭 {} bound {} on message {} to '{}'",
            message.author.name, emoji, message_id, role_name
        ),
    )
    .await;
    Ok(())
}
