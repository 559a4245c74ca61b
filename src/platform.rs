//! Platform identity and the opaque per-platform option carriers.

use serde_json::Value;

/// Mobile operating systems reachable through the bridge.
///
/// Resolved once when the bridge is constructed; every per-call branch
/// selection keys off the stored value rather than re-detecting the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobilePlatform {
    Android,
    Ios,
}

impl MobilePlatform {
    pub fn name(&self) -> &'static str {
        match self {
            MobilePlatform::Android => "Android",
            MobilePlatform::Ios => "iOS",
        }
    }
}

/// Per-platform styling and behavior options for a single notification.
///
/// The branches are opaque to the bridge: native code owns their schema, and
/// only the branch matching the bridge's platform is ever serialized onto the
/// channel. The other branch's contents never leave the process.
#[derive(Debug, Clone, Default)]
pub struct NotificationDetails {
    pub android: Option<Value>,
    pub ios: Option<Value>,
}

impl NotificationDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_android(mut self, options: Value) -> Self {
        self.android = Some(options);
        self
    }

    pub fn with_ios(mut self, options: Value) -> Self {
        self.ios = Some(options);
        self
    }

    pub(crate) fn branch(&self, platform: MobilePlatform) -> Option<&Value> {
        match platform {
            MobilePlatform::Android => self.android.as_ref(),
            MobilePlatform::Ios => self.ios.as_ref(),
        }
    }
}

/// Per-platform options sent with the one-time native setup request.
#[derive(Debug, Clone, Default)]
pub struct InitializationSettings {
    pub android: Option<Value>,
    pub ios: Option<Value>,
}

impl InitializationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_android(mut self, options: Value) -> Self {
        self.android = Some(options);
        self
    }

    pub fn with_ios(mut self, options: Value) -> Self {
        self.ios = Some(options);
        self
    }

    pub(crate) fn branch(&self, platform: MobilePlatform) -> Option<&Value> {
        match platform {
            MobilePlatform::Android => self.android.as_ref(),
            MobilePlatform::Ios => self.ios.as_ref(),
        }
    }
}
