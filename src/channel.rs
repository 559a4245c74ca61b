//! The opaque transport seam between the bridge and native code.

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::error::BridgeResult;

/// Outbound method names the bridge invokes on the native side.
pub mod method {
    pub const INITIALIZE: &str = "initialize";
    pub const SHOW: &str = "show";
    pub const CANCEL: &str = "cancel";
    pub const CANCEL_ALL: &str = "cancelAll";
    pub const SCHEDULE: &str = "schedule";
    pub const PERIODICALLY_SHOW: &str = "periodicallyShow";
    pub const SHOW_DAILY_AT_TIME: &str = "showDailyAtTime";
    pub const SHOW_WEEKLY_AT_DAY_AND_TIME: &str = "showWeeklyAtDayAndTime";
    pub const REGISTER_FOR_REMOTE_NOTIFICATIONS: &str = "registerForRemoteNotifications";
    pub const GET_NOTIFICATION_APP_LAUNCH_DETAILS: &str = "getNotificationAppLaunchDetails";
}

/// Inbound event names the native side raises back at the application.
pub mod event {
    pub const SELECT_NOTIFICATION: &str = "selectNotification";
    pub const DID_RECEIVE_LOCAL_NOTIFICATION: &str = "didReceiveLocalNotification";
    pub const DID_REGISTER_FOR_REMOTE_NOTIFICATIONS_WITH_DEVICE_TOKEN: &str =
        "didRegisterForRemoteNotificationsWithDeviceToken";
    pub const DID_REGISTER_FOR_REMOTE_NOTIFICATIONS_FAILED: &str =
        "didRegisterForRemoteNotificationsFailed";
    pub const DID_RECEIVE_REMOTE_NOTIFICATION: &str = "didReceiveRemoteNotification";
}

/// Asynchronous request/response transport into the native layer.
///
/// Implementations wrap whatever mechanism actually reaches platform code.
/// The bridge assumes nothing beyond one reply per invocation: no timeout,
/// no retry, no ordering between concurrent invocations. A transport that
/// never replies leaves the caller suspended.
pub trait MethodChannel: Send + Sync {
    fn invoke(
        &self,
        method: &str,
        args: Value,
    ) -> Pin<Box<dyn Future<Output = BridgeResult<Value>> + Send + '_>>;
}
