use thiserror::Error;

/// Failure of a remote call to the chat platform.
///
/// Grant, revoke, reaction and lookup calls all funnel their transport errors
/// through this type so callers can contain them per entry without caring
/// which underlying request failed.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The platform rejected or failed the call.
    ///
    /// Boxed because serenity::Error is large.
    #[error("Discord API call failed: {0}")]
    CallFailed(#[source] Box<serenity::Error>),
}

impl From<serenity::Error> for GatewayError {
    fn from(err: serenity::Error) -> Self {
        GatewayError::CallFailed(Box::new(err))
    }
}
