//! In-memory tables backing the bot's stateful features.
//!
//! This module contains the process-wide mutable state: the reaction-role
//! binding table and the mute expiry registrar. Neither table is persisted;
//! a restart silently discards all bindings and all pending mutes. Each table
//! owns its storage behind an async lock and exposes only its operations, so
//! no other module touches the underlying maps directly.

pub mod mute;
pub mod reaction_role;

pub use mute::{MuteRecord, MuteRegistrar};
pub use reaction_role::ReactionRoleTable;
