use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the Discord client and returns it along with its HTTP handle.
///
/// The HTTP handle is extracted so the mute expiry scheduler can perform
/// Discord calls without maintaining a second connection to Discord.
///
/// # Arguments
/// - `state` - Shared application state handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start, plus its HTTP handle
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    // Configure gateway intents - what events the bot will receive.
    // MESSAGE_CONTENT and GUILD_MEMBERS are privileged intents and must be
    // enabled in the Discord Developer Portal.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::GUILD_MEMBERS;

    let token = state.config.discord_bot_token.clone();
    let handler = Handler::new(state);

    let client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner.
///
/// Blocks until the client shuts down, so callers that need to keep working
/// should run it inside its own task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
