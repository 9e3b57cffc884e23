use serenity::all::ChannelId;

use crate::error::{config::ConfigError, AppError};

/// Default command prefix, matching the original bot deployment.
const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Default name of the role that marks a muted member.
const DEFAULT_MUTE_ROLE_NAME: &str = "Muted";

pub struct Config {
    pub discord_bot_token: String,

    pub command_prefix: String,
    pub mute_role_name: String,

    /// Channel that receives moderation-action log lines, if configured.
    pub log_channel_id: Option<ChannelId>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let log_channel_id = match std::env::var("LOG_CHANNEL_ID") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(id) if id != 0 => Some(ChannelId::new(id)),
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "LOG_CHANNEL_ID".to_string(),
                        value: raw,
                    }
                    .into())
                }
            },
            Err(_) => None,
        };

        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            command_prefix: std::env::var("COMMAND_PREFIX")
                .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string()),
            mute_role_name: std::env::var("MUTE_ROLE_NAME")
                .unwrap_or_else(|_| DEFAULT_MUTE_ROLE_NAME.to_string()),
            log_channel_id,
        })
    }
}
