use thiserror::Error;

/// Errors surfaced by the notification bridge.
///
/// Caller-contract violations (`IdOutOfRange`, `InvalidTime`) are raised
/// before any channel traffic. Everything else originates at the channel
/// boundary or in inbound-event dispatch.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Notification id does not fit the native signed 32-bit id space.
    #[error("notification id {0} is outside the signed 32-bit range")]
    IdOutOfRange(i64),

    /// Hour, minute, or second outside its calendar range.
    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    /// Inbound event name the bridge does not understand.
    #[error("unsupported inbound event '{0}'")]
    UnsupportedEvent(String),

    /// Recognized inbound event whose arguments have the wrong shape.
    #[error("malformed arguments for inbound event '{event}': {detail}")]
    MalformedEvent {
        event: &'static str,
        detail: String,
    },

    /// Outbound request could not be serialized for the channel.
    #[error("failed to encode request for '{method}'")]
    Encode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failure reported by the native side of the channel.
    #[error("channel invoke '{method}' failed: {message}")]
    Channel { method: String, message: String },

    /// The event side went away before delivering a registration token.
    #[error("remote registration abandoned before a token arrived")]
    RegistrationAbandoned,
}

pub type BridgeResult<T> = Result<T, BridgeError>;
