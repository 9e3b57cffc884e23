//! Prefix command parsing and dispatch.
//!
//! Commands arrive as ordinary messages beginning with the configured prefix.
//! The dispatcher splits off the command word, routes to the matching
//! handler, and reports failures back to the invoking channel. Unknown
//! commands are ignored silently. Permission gating happens here in the
//! command layer; the services themselves never re-check.

pub mod fun;
pub mod moderation;
pub mod reaction_role;
pub mod utility;

use serenity::all::{Context, GuildId, Message, Permissions};

use crate::error::{command::CommandError, AppError};
use crate::gateway::ChatGateway;
use crate::state::AppState;

/// Routes a prefixed message to its command handler.
pub async fn dispatch(state: &AppState, ctx: &Context, message: &Message) {
    let Some(rest) = message.content.strip_prefix(&state.config.command_prefix) else {
        return;
    };
    let mut parts = rest.trim().splitn(2, char::is_whitespace);
    let Some(command) = parts.next().filter(|word| !word.is_empty()) else {
        return;
    };
    let args = parts.next().unwrap_or("").trim();

    let result = match command.to_ascii_lowercase().as_str() {
        "ping" => utility::ping(ctx, message).await,
        "serverinfo" => utility::server_info(ctx, message).await,
        "userinfo" => utility::user_info(ctx, message, args).await,
        "8ball" => fun::eight_ball(ctx, message, args).await,
        "roll" => fun::roll(ctx, message, args).await,
        "coinflip" => fun::coin_flip(ctx, message).await,
        "mute" => moderation::mute(state, ctx, message, args).await,
        "unmute" => moderation::unmute(state, ctx, message, args).await,
        "kick" => moderation::kick(state, ctx, message, args).await,
        "ban" => moderation::ban(state, ctx, message, args).await,
        "reactionrole" => reaction_role::bind(state, ctx, message, args).await,
        // Unknown commands fall through silently.
        _ => return,
    };

    if let Err(err) = result {
        report_failure(ctx, message, command, err).await;
    }
}

/// Logs a command failure and tells the invoking user what went wrong.
async fn report_failure(ctx: &Context, message: &Message, command: &str, err: AppError) {
    tracing::error!("Command '{}' failed: {}", command, err);

    if let Err(e) = message.channel_id.say(&ctx.http, err.user_message()).await {
        tracing::error!("Failed to report command failure: {}", e);
    }
}

/// Ensures the invoker holds `required` in the guild the message was sent in.
///
/// Resolves permissions from the cached guild: the guild owner and
/// administrators always pass. Fails closed when the guild or member is
/// missing from the cache.
///
/// # Returns
/// - `Ok(GuildId)` - Invoker may run the command
/// - `Err(CommandError::GuildOnly)` - Message did not come from a guild
/// - `Err(CommandError::PermissionDenied)` - Invoker lacks the permission
pub(super) fn require_permission(
    ctx: &Context,
    message: &Message,
    required: Permissions,
) -> Result<GuildId, AppError> {
    let Some(guild_id) = message.guild_id else {
        return Err(CommandError::GuildOnly.into());
    };

    let Some(guild) = ctx.cache.guild(guild_id) else {
        tracing::warn!("Guild {} missing from cache during permission check", guild_id);
        return Err(CommandError::PermissionDenied.into());
    };
    let Some(member) = guild.members.get(&message.author.id) else {
        return Err(CommandError::PermissionDenied.into());
    };

    let permissions = guild.member_permissions(member);
    if permissions.administrator() || permissions.contains(required) {
        Ok(guild_id)
    } else {
        Err(CommandError::PermissionDenied.into())
    }
}

/// Mirrors a moderation action to the configured log channel, if any.
///
/// Delivery failures are logged locally and otherwise ignored; the action
/// itself has already happened.
pub(super) async fn log_action(state: &AppState, gateway: &dyn ChatGateway, line: &str) {
    let Some(channel_id) = state.config.log_channel_id else {
        return;
    };
    if let Err(e) = gateway.send_text(channel_id, line).await {
        tracing::warn!("Failed to write to log channel: {}", e);
    }
}
