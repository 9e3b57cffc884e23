//! Ready event handler for bot initialization.
//!
//! The `ready` event fires once the gateway handshake completes and is the
//! first signal that the bot can process commands and reactions.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connected account and how many guilds the session covers, and
/// sets the presence line shown under the bot's name.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::listening("moonbeams")));
}
