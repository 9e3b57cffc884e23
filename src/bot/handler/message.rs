use serenity::all::{Context, Message};

use crate::bot::commands;
use crate::state::AppState;

/// Reply to the bare greeting message.
const HELLO_REPLY: &str = "Hello, Moon-kun! 💖";

/// Handles message creation in a channel.
///
/// Ignores the bot's own output, answers the standalone greeting, and hands
/// everything else to the prefix-command dispatcher.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.id == ctx.cache.current_user().id {
        return;
    }

    if message.content.trim().eq_ignore_ascii_case("hello") {
        if let Err(e) = message.channel_id.say(&ctx.http, HELLO_REPLY).await {
            tracing::error!("Failed to send greeting: {}", e);
        }
        return;
    }

    commands::dispatch(state, &ctx, &message).await;
}
