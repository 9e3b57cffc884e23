//! Error types for bot operations.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors via
//! `#[from]` conversions. Command failures carry their own operator-facing
//! message; everything else is logged in full and reported to the invoking
//! user as a generic line.

pub mod command;
pub mod config;
pub mod gateway;

use thiserror::Error;

use crate::error::{command::CommandError, config::ConfigError, gateway::GatewayError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most
/// variants use `#[from]` for automatic error conversion. Command errors
/// carry their own user-facing rendering; other variants are internal and
/// only surface through logs.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Operator-facing failure of a chat command (bad arguments, missing
    /// role, missing permission).
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Remote call to the chat platform failed.
    #[error(transparent)]
    GatewayErr(#[from] GatewayError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Renders the error as a line suitable for the invoking user.
    ///
    /// Command errors explain themselves; all other errors return a generic
    /// message so internal details stay in the server-side log.
    pub fn user_message(&self) -> String {
        match self {
            AppError::CommandErr(err) => err.to_string(),
            _ => "Something went wrong running that command.".to_string(),
        }
    }
}
