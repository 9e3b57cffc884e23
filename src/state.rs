//! Application state shared across event handlers and the scheduler.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! needed by the bot. The state is initialized once during startup and then
//! cloned into the event handler and the mute expiry scheduler.
//!
//! All fields use cheap-to-clone types: the two in-memory tables share their
//! storage through internal `Arc`s, and the config and shutdown flag are
//! reference-counted directly.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::config::Config;
use crate::data::{MuteRegistrar, ReactionRoleTable};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from the environment.
    pub config: Arc<Config>,

    /// Reaction-role bindings, consulted on every reaction event.
    pub reaction_roles: ReactionRoleTable,

    /// Outstanding timed mutes, drained by the periodic sweep.
    pub mutes: MuteRegistrar,

    /// Set when shutdown is requested; an in-flight sweep checks this before
    /// each per-user revoke.
    pub shutdown: Arc<AtomicBool>,
}

impl AppState {
    /// Creates the application state from a loaded configuration.
    ///
    /// Both tables start empty. Bindings and pending mutes live only in
    /// process memory and are discarded on restart; role state already applied
    /// on the platform is not reverted.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            reaction_roles: ReactionRoleTable::new(),
            mutes: MuteRegistrar::new(),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }
}
