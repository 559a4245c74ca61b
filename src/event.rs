//! Typed inbound events and the application callbacks they feed.

use std::sync::Arc;

use serde_json::Value;

use crate::channel::event as event_name;
use crate::error::{BridgeError, BridgeResult};

/// Callback invoked when the user taps a delivered notification.
pub type SelectHandler = Arc<dyn Fn(Option<String>) + Send + Sync>;

/// Callback for notifications arriving while the app is foregrounded.
/// Only the legacy iOS presentation path raises this.
pub type ForegroundHandler = Arc<dyn Fn(ForegroundNotification) + Send + Sync>;

/// Callback fired when the native side reports a remote-registration token.
pub type RegistrationHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// A notification surfaced to the app instead of the system tray while the
/// app was in the foreground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForegroundNotification {
    pub id: i32,
    pub title: Option<String>,
    pub body: Option<String>,
    pub payload: Option<String>,
}

/// The callback set installed by `initialize`. Every slot is optional;
/// events with no handler are consumed silently.
#[derive(Default)]
pub struct EventHandlers {
    pub on_select: Option<SelectHandler>,
    pub on_foreground: Option<ForegroundHandler>,
    pub on_registration: Option<RegistrationHandler>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_select<F>(mut self, handler: F) -> Self
    where
        F: Fn(Option<String>) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(handler));
        self
    }

    pub fn with_foreground<F>(mut self, handler: F) -> Self
    where
        F: Fn(ForegroundNotification) + Send + Sync + 'static,
    {
        self.on_foreground = Some(Arc::new(handler));
        self
    }

    pub fn with_registration<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_registration = Some(Arc::new(handler));
        self
    }
}

impl std::fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandlers")
            .field("on_select", &self.on_select.is_some())
            .field("on_foreground", &self.on_foreground.is_some())
            .field("on_registration", &self.on_registration.is_some())
            .finish()
    }
}

/// A parsed inbound event.
///
/// Parsing is strict for events the bridge acts on; acknowledgement-only
/// events carry their arguments opaquely.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    /// User tapped a delivered notification.
    Select { payload: Option<String> },
    /// Foreground display on the legacy iOS path.
    ForegroundDisplay(ForegroundNotification),
    /// Remote registration produced a device token.
    RegistrationToken { token: String },
    /// Remote registration failed. Acknowledged, not acted on.
    RegistrationFailed { reason: Value },
    /// A remote push arrived. Acknowledged, not acted on.
    RemotePush { payload: Value },
}

impl InboundEvent {
    /// Maps a raw event name and argument value onto a typed event.
    ///
    /// Unknown names fail with `UnsupportedEvent`; recognized names with the
    /// wrong argument shape fail with `MalformedEvent`.
    pub fn parse(name: &str, args: &Value) -> BridgeResult<Self> {
        match name {
            event_name::SELECT_NOTIFICATION => Ok(Self::Select {
                payload: optional_string(event_name::SELECT_NOTIFICATION, args)?,
            }),
            event_name::DID_RECEIVE_LOCAL_NOTIFICATION => {
                Ok(Self::ForegroundDisplay(parse_foreground(args)?))
            }
            event_name::DID_REGISTER_FOR_REMOTE_NOTIFICATIONS_WITH_DEVICE_TOKEN => {
                let token = args.as_str().ok_or_else(|| BridgeError::MalformedEvent {
                    event: event_name::DID_REGISTER_FOR_REMOTE_NOTIFICATIONS_WITH_DEVICE_TOKEN,
                    detail: "expected a token string".to_string(),
                })?;
                Ok(Self::RegistrationToken {
                    token: token.to_string(),
                })
            }
            event_name::DID_REGISTER_FOR_REMOTE_NOTIFICATIONS_FAILED => {
                Ok(Self::RegistrationFailed {
                    reason: args.clone(),
                })
            }
            event_name::DID_RECEIVE_REMOTE_NOTIFICATION => Ok(Self::RemotePush {
                payload: args.clone(),
            }),
            other => Err(BridgeError::UnsupportedEvent(other.to_string())),
        }
    }
}

fn optional_string(event: &'static str, args: &Value) -> BridgeResult<Option<String>> {
    match args {
        Value::Null => Ok(None),
        Value::String(payload) => Ok(Some(payload.clone())),
        other => Err(BridgeError::MalformedEvent {
            event,
            detail: format!("expected a string or null payload, got {other}"),
        }),
    }
}

fn parse_foreground(args: &Value) -> BridgeResult<ForegroundNotification> {
    let event = event_name::DID_RECEIVE_LOCAL_NOTIFICATION;
    let id = args
        .get("id")
        .and_then(Value::as_i64)
        .and_then(|id| i32::try_from(id).ok())
        .ok_or_else(|| BridgeError::MalformedEvent {
            event,
            detail: "missing or non-integer 'id'".to_string(),
        })?;
    Ok(ForegroundNotification {
        id,
        title: field_string(args, "title"),
        body: field_string(args, "body"),
        payload: field_string(args, "payload"),
    })
}

fn field_string(args: &Value, key: &str) -> Option<String> {
    args.get(key).and_then(Value::as_str).map(str::to_owned)
}
