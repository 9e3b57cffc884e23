//! moonbot - a small Discord moderation and utility bot.
//!
//! The bot registers prefix commands (moderation actions, utility lookups,
//! fun responses) and two stateful side-features: reaction-triggered role
//! assignment and timed mute expiry. All state lives in process memory; a
//! restart discards every binding and pending mute.

mod bot;
mod config;
mod data;
mod error;
mod gateway;
mod scheduler;
mod service;
mod state;
mod util;

use std::sync::atomic::Ordering;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::scheduler::mute_expiry;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(config);

    tracing::info!("Starting moonbot");

    // Initialize Discord bot and extract its HTTP client
    let (client, discord_http) = bot::start::init_bot(state.clone()).await?;

    // On ctrl-c: flag the sweep to stop before its next revoke, then take the
    // gateway connection down.
    let shutdown = state.shutdown.clone();
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested");
            shutdown.store(true, Ordering::Relaxed);
            shard_manager.shutdown_all().await;
        }
    });

    // Start the mute expiry scheduler on the bot's HTTP handle
    mute_expiry::start_scheduler(state, discord_http).await?;

    // Run the bot (this blocks until shutdown)
    bot::start::start_bot(client).await
}
