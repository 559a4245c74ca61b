//! Cross-platform notification bridge for mobile hosts.
//!
//! Forwards notification-scheduling requests from application code to the
//! native Android and iOS notification subsystems over an opaque method
//! channel, and relays native callbacks (tap, foreground display,
//! remote-registration token) back to registered handlers.
//!
//! The bridge does no scheduling of its own: validation is local and
//! minimal, and all persistence, alarm arithmetic, and delivery happen on
//! the native side of the channel. Its only state is a callback registry
//! and a cached remote-registration token.

pub mod bridge;
pub mod channel;
pub mod error;
pub mod event;
pub mod platform;
pub mod request;
pub mod schedule;

pub use bridge::{EventRouter, NotificationAppLaunchDetails, NotificationBridge};
pub use channel::MethodChannel;
pub use error::{BridgeError, BridgeResult};
pub use event::{EventHandlers, ForegroundNotification, InboundEvent};
pub use platform::{InitializationSettings, MobilePlatform, NotificationDetails};
pub use schedule::{Day, RepeatInterval, Time};
