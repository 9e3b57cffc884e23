//! Timed mute operations and the expiry sweep.

use chrono::{DateTime, Duration, Utc};
use serenity::all::{GuildId, UserId};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::data::MuteRegistrar;
use crate::error::{command::CommandError, AppError};
use crate::gateway::ChatGateway;

/// Service applying timed mutes and releasing them when due.
pub struct MuteService<'a> {
    mutes: &'a MuteRegistrar,
    gateway: &'a dyn ChatGateway,
}

impl<'a> MuteService<'a> {
    pub fn new(mutes: &'a MuteRegistrar, gateway: &'a dyn ChatGateway) -> Self {
        Self { mutes, gateway }
    }

    /// Applies the mute role to a member and registers the release time.
    ///
    /// A user already muted gets the new expiry; the previous record is
    /// overwritten.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the mute applies in
    /// - `user_id` - Member to mute
    /// - `mute_role_name` - Configured name of the mute role
    /// - `duration` - How long the mute lasts from `now`
    /// - `now` - Current time, supplied by the caller
    ///
    /// # Returns
    /// - `Ok(expiry)` - Role applied and release registered
    /// - `Err(CommandError::RoleNotFound)` - Mute role missing from the guild
    pub async fn mute(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        mute_role_name: &str,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, AppError> {
        let Some(role) = self.gateway.find_role(guild_id, mute_role_name).await? else {
            return Err(CommandError::RoleNotFound(mute_role_name.to_string()).into());
        };
        self.gateway.grant_role(guild_id, user_id, role.id).await?;

        let expires_at = now + duration;
        self.mutes.register(user_id, guild_id, expires_at).await;

        tracing::info!(
            "Muted user {} in guild {} until {}",
            user_id,
            guild_id,
            expires_at
        );
        Ok(expires_at)
    }

    /// Revokes the mute role and drops the tracked record.
    ///
    /// The record is only cleared once the revoke has gone through; if the
    /// revoke fails the record stays and the sweep picks the user up later.
    pub async fn unmute(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        mute_role_name: &str,
    ) -> Result<(), AppError> {
        let Some(role) = self.gateway.find_role(guild_id, mute_role_name).await? else {
            return Err(CommandError::RoleNotFound(mute_role_name.to_string()).into());
        };
        self.gateway.revoke_role(guild_id, user_id, role.id).await?;
        self.mutes.clear(user_id).await;

        tracing::info!("Unmuted user {} in guild {}", user_id, guild_id);
        Ok(())
    }

    /// Releases every record whose expiry has passed.
    ///
    /// For each due entry the mute role is revoked, guarded so members who no
    /// longer hold the role (or have left the guild) are skipped without a
    /// platform call. A failed revoke is logged, never propagated: the record
    /// is still removed and the remaining due entries are still processed.
    /// `cancel` is checked before each per-user revoke so a shutdown does not
    /// wait for a long sweep.
    ///
    /// # Returns
    /// - Number of records removed by this sweep
    pub async fn sweep(
        &self,
        mute_role_name: &str,
        now: DateTime<Utc>,
        cancel: &AtomicBool,
    ) -> usize {
        let due = self.mutes.due(now).await;
        let mut released = 0;

        for (user_id, record) in due {
            if cancel.load(Ordering::Relaxed) {
                tracing::info!("Mute sweep cancelled with entries still due");
                break;
            }

            if let Err(err) = self.release(record.guild_id, user_id, mute_role_name).await {
                tracing::error!("Failed to release mute for user {}: {}", user_id, err);
            }
            if self.mutes.remove_if_expired(user_id, now).await {
                released += 1;
            }
        }

        released
    }

    /// Revokes the mute role from one member if they still hold it.
    ///
    /// Skips silently when the member has left the guild or when the mute
    /// role itself no longer exists.
    async fn release(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        mute_role_name: &str,
    ) -> Result<(), AppError> {
        let Some(role) = self.gateway.find_role(guild_id, mute_role_name).await? else {
            tracing::warn!(
                "Mute role '{}' no longer exists in guild {}",
                mute_role_name,
                guild_id
            );
            return Ok(());
        };

        let Some(member_roles) = self.gateway.member_roles(guild_id, user_id).await? else {
            tracing::debug!(
                "User {} is no longer in guild {}, skipping release",
                user_id,
                guild_id
            );
            return Ok(());
        };
        if !member_roles.contains(&role.id) {
            tracing::debug!("User {} no longer holds the mute role", user_id);
            return Ok(());
        }

        self.gateway.revoke_role(guild_id, user_id, role.id).await?;
        tracing::info!(
            "Released expired mute for user {} in guild {}",
            user_id,
            guild_id
        );
        Ok(())
    }
}
