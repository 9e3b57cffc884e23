//! Discord bot integration: gateway events, prefix commands, startup.
//!
//! This module wires the bot against Discord. Gateway events (ready, message,
//! reaction add/remove) arrive through the event handler and are delegated to
//! per-event modules; messages beginning with the configured prefix are
//! dispatched to the command layer. The bot's HTTP client is shared with the
//! mute expiry scheduler so both talk to Discord over one connection pool.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild metadata for permission checks and lookups
//! - `GUILD_MESSAGES` - Messages in guilds, for the command layer
//! - `MESSAGE_CONTENT` - Message text (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` - Reaction add/remove events
//! - `GUILD_MEMBERS` - Member data for permission checks (privileged intent)
//!
//! Privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod commands;
pub mod handler;
pub mod start;
