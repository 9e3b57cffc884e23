use serenity::all::MessageId;
use thiserror::Error;

/// Failures of operator-issued chat commands.
///
/// Every variant renders as the reply sent back to the invoking user, so the
/// messages are written for the channel, not for the log.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The named role does not exist in the guild at the time of the call.
    #[error("role '{0}' was not found in this server")]
    RoleNotFound(String),

    /// The target message is not accessible in the invoking channel.
    #[error("message {0} could not be found in this channel")]
    MessageNotFound(MessageId),

    /// The invoker lacks the role flags the command requires.
    #[error("you don't have permission to use this command")]
    PermissionDenied,

    /// The command only makes sense inside a guild channel.
    #[error("that command only works in a server")]
    GuildOnly,

    /// Duration argument did not parse.
    #[error("'{0}' is not a valid duration (try 30s, 10m, 2h or 1d)")]
    InvalidDuration(String),

    /// Target argument was neither a user mention nor a bare user id.
    #[error("'{0}' does not look like a user mention")]
    InvalidUserMention(String),

    /// Message id argument did not parse.
    #[error("'{0}' is not a valid message id")]
    InvalidMessageId(String),

    /// Emoji argument was neither a unicode emoji nor a custom emoji tag.
    #[error("'{0}' is not a usable emoji")]
    InvalidEmoji(String),

    /// Wrong argument shape; the message carries the expected form.
    #[error("usage: {0}")]
    Usage(&'static str),
}
