//! Reaction add/remove handlers driving the reaction-role feature.
//!
//! Every reaction event in a guild is checked against the binding table; the
//! service decides whether it maps to a role grant or revoke. Failures are
//! logged here and never propagate, so one bad event cannot disturb later
//! event dispatch or the bindings themselves.

use serenity::all::{Context, Reaction};

use crate::gateway::DiscordGateway;
use crate::service::ReactionRoleService;
use crate::state::AppState;

/// Grants the bound role when a user adds a tracked reaction.
pub async fn handle_reaction_add(state: &AppState, ctx: Context, reaction: Reaction) {
    let (Some(guild_id), Some(user_id)) = (reaction.guild_id, reaction.user_id) else {
        return;
    };
    let bot_id = ctx.cache.current_user().id;

    let gateway = DiscordGateway::new(ctx.http.clone());
    let service = ReactionRoleService::new(&state.reaction_roles, &gateway);

    if let Err(e) = service
        .reaction_added(bot_id, guild_id, reaction.message_id, &reaction.emoji, user_id)
        .await
    {
        tracing::error!(
            "Failed to handle reaction add on message {}: {}",
            reaction.message_id,
            e
        );
    }
}

/// Revokes the bound role when a user removes a tracked reaction.
pub async fn handle_reaction_remove(state: &AppState, ctx: Context, reaction: Reaction) {
    let (Some(guild_id), Some(user_id)) = (reaction.guild_id, reaction.user_id) else {
        return;
    };
    let bot_id = ctx.cache.current_user().id;

    let gateway = DiscordGateway::new(ctx.http.clone());
    let service = ReactionRoleService::new(&state.reaction_roles, &gateway);

    if let Err(e) = service
        .reaction_removed(bot_id, guild_id, reaction.message_id, &reaction.emoji, user_id)
        .await
    {
        tracing::error!(
            "Failed to handle reaction remove on message {}: {}",
            reaction.message_id,
            e
        );
    }
}
