//! Moderation commands: mute, unmute, kick, ban.
//!
//! Mute and unmute run through the mute service so the expiry registrar stays
//! in step with the role state; kick and ban are plain platform calls.

use chrono::Utc;
use serenity::all::{Context, Message, Permissions};

use crate::bot::commands::{log_action, require_permission};
use crate::error::{command::CommandError, AppError};
use crate::gateway::DiscordGateway;
use crate::service::MuteService;
use crate::state::AppState;
use crate::util::parse::{parse_duration, parse_user_mention};

/// `mute @user <duration>` - applies the mute role and schedules its release.
pub async fn mute(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    args: &str,
) -> Result<(), AppError> {
    const USAGE: &str = "mute @user <duration>";

    let guild_id = require_permission(ctx, message, Permissions::MODERATE_MEMBERS)?;

    let mut words = args.split_whitespace();
    let (Some(target), Some(duration_raw)) = (words.next(), words.next()) else {
        return Err(CommandError::Usage(USAGE).into());
    };
    let user_id = parse_user_mention(target)?;
    let duration = parse_duration(duration_raw)?;

    let gateway = DiscordGateway::new(ctx.http.clone());
    let service = MuteService::new(&state.mutes, &gateway);
    let expires_at = service
        .mute(
            guild_id,
            user_id,
            &state.config.mute_role_name,
            duration,
            Utc::now(),
        )
        .await?;

    message
        .channel_id
        .say(
            &ctx.http,
            format!("Muted <@{}> until <t:{}:f>.", user_id, expires_at.timestamp()),
        )
        .await?;
    log_action(
        state,
        &gateway,
        &format!(
            "🔇 {} muted <@{}> for {}",
            message.author.name, user_id, duration_raw
        ),
    )
    .await;
    Ok(())
}

/// `unmute @user` - lifts a mute ahead of its expiry.
pub async fn unmute(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    args: &str,
) -> Result<(), AppError> {
    const USAGE: &str = "unmute @user";

    let guild_id = require_permission(ctx, message, Permissions::MODERATE_MEMBERS)?;

    let target = args
        .split_whitespace()
        .next()
        .ok_or(CommandError::Usage(USAGE))?;
    let user_id = parse_user_mention(target)?;

    let gateway = DiscordGateway::new(ctx.http.clone());
    let service = MuteService::new(&state.mutes, &gateway);
    service
        .unmute(guild_id, user_id, &state.config.mute_role_name)
        .await?;

    message
        .channel_id
        .say(&ctx.http, format!("Unmuted <@{}>.", user_id))
        .await?;
    log_action(
        state,
        &gateway,
        &format!("🔊 {} unmuted <@{}>", message.author.name, user_id),
    )
    .await;
    Ok(())
}

/// `kick @user [reason]`
pub async fn kick(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    args: &str,
) -> Result<(), AppError> {
    const USAGE: &str = "kick @user [reason]";

    let guild_id = require_permission(ctx, message, Permissions::KICK_MEMBERS)?;
    let (target, reason) = split_target_and_reason(args).ok_or(CommandError::Usage(USAGE))?;
    let user_id = parse_user_mention(target)?;

    ctx.http.kick_member(guild_id, user_id, reason).await?;

    message
        .channel_id
        .say(&ctx.http, format!("Kicked <@{}>.", user_id))
        .await?;
    log_action(
        state,
        &DiscordGateway::new(ctx.http.clone()),
        &format!("👢 {} kicked <@{}>", message.author.name, user_id),
    )
    .await;
    Ok(())
}

/// `ban @user [reason]`
pub async fn ban(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    args: &str,
) -> Result<(), AppError> {
    const USAGE: &str = "ban @user [reason]";

    let guild_id = require_permission(ctx, message, Permissions::BAN_MEMBERS)?;
    let (target, reason) = split_target_and_reason(args).ok_or(CommandError::Usage(USAGE))?;
    let user_id = parse_user_mention(target)?;

    // 0: keep the banned user's message history.
    ctx.http.ban_user(guild_id, user_id, 0, reason).await?;

    message
        .channel_id
        .say(&ctx.http, format!("Banned <@{}>.", user_id))
        .await?;
    log_action(
        state,
        &DiscordGateway::new(ctx.http.clone()),
        &format!("🔨 {} banned <@{}>", message.author.name, user_id),
    )
    .await;
    Ok(())
}

/// Splits `@user some free-form reason` into target and optional reason.
fn split_target_and_reason(args: &str) -> Option<(&str, Option<&str>)> {
    let mut parts = args.splitn(2, char::is_whitespace);
    let target = parts.next().filter(|t| !t.is_empty())?;
    let reason = parts.next().map(str::trim).filter(|r| !r.is_empty());
    Some((target, reason))
}
