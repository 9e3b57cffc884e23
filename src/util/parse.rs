//! Parsing helpers for user-supplied command arguments.

use chrono::Duration;
use serenity::all::UserId;

use crate::error::{command::CommandError, AppError};

/// Parses durations of the form `30s`, `10m`, `2h` or `1d`.
///
/// # Arguments
/// - `value` - The raw duration argument as typed by the user
///
/// # Returns
/// - `Ok(Duration)` - Positive duration in the given unit
/// - `Err(AppError::CommandErr(InvalidDuration))` - Unknown unit, missing
///   number, or non-positive amount
pub fn parse_duration(value: &str) -> Result<Duration, AppError> {
    let invalid = || CommandError::InvalidDuration(value.to_string());

    let unit = value.chars().last().ok_or_else(invalid)?;
    let digits = &value[..value.len() - unit.len_utf8()];
    let amount: i64 = digits.parse().map_err(|_| invalid())?;
    if amount <= 0 {
        return Err(invalid().into());
    }

    let duration = match unit {
        's' => Duration::seconds(amount),
        'm' => Duration::minutes(amount),
        'h' => Duration::hours(amount),
        'd' => Duration::days(amount),
        _ => return Err(invalid().into()),
    };
    Ok(duration)
}

/// Extracts the user id from a `<@123>` or `<@!123>` mention, or a bare id.
pub fn parse_user_mention(value: &str) -> Result<UserId, AppError> {
    let inner = value
        .strip_prefix("<@")
        .and_then(|rest| rest.strip_suffix('>'))
        .map(|rest| rest.trim_start_matches('!'))
        .unwrap_or(value);

    match inner.parse::<u64>() {
        Ok(id) if id != 0 => Ok(UserId::new(id)),
        _ => Err(CommandError::InvalidUserMention(value.to_string()).into()),
    }
}
