use chrono::Utc;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;
use crate::gateway::{ChatGateway, DiscordGateway};
use crate::service::MuteService;
use crate::state::AppState;

/// Starts the mute expiry scheduler.
///
/// The sweep runs every 30 seconds and releases all mutes whose expiry has
/// passed. Sweep failures are logged inside the job and never stop the
/// schedule.
///
/// # Arguments
/// - `state` - Shared application state holding the registrar and config
/// - `discord_http` - Discord HTTP client shared with the bot
pub async fn start_scheduler(state: AppState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_state = state.clone();
    let job_http = discord_http.clone();

    // Schedule job to run every 30 seconds
    let job = Job::new_async("*/30 * * * * *", move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();

        Box::pin(async move {
            sweep_expired_mutes(&state, http).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Mute expiry scheduler started");

    Ok(())
}

/// Runs one sweep tick and reports releases to the log channel.
async fn sweep_expired_mutes(state: &AppState, http: Arc<Http>) {
    let gateway = DiscordGateway::new(http);
    let service = MuteService::new(&state.mutes, &gateway);

    let released = service
        .sweep(&state.config.mute_role_name, Utc::now(), &state.shutdown)
        .await;
    if released == 0 {
        return;
    }

    tracing::info!("Mute sweep released {} expired mute(s)", released);
    if let Some(channel_id) = state.config.log_channel_id {
        let line = format!("⏰ Released {} expired mute(s)", released);
        if let Err(e) = gateway.send_text(channel_id, &line).await {
            tracing::warn!("Failed to report sweep releases to log channel: {}", e);
        }
    }
}
