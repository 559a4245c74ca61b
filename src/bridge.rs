//! The application-facing facade over the native notification channel.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::channel::{MethodChannel, method};
use crate::error::{BridgeError, BridgeResult};
use crate::event::{EventHandlers, InboundEvent};
use crate::platform::{InitializationSettings, MobilePlatform, NotificationDetails};
use crate::request::{DailyRequest, PeriodicRequest, ScheduleRequest, ShowRequest, WeeklyRequest};
use crate::schedule::{Day, RepeatInterval, Time};

/// Whether the application was started by a notification tap, and the tapped
/// notification's payload if so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAppLaunchDetails {
    pub did_notification_launch_app: bool,
    pub payload: Option<String>,
}

/// Remote-registration bookkeeping. The token and waiter list are only ever
/// touched under this struct's lock; the waiter drain swaps the list out
/// while locked and completes the senders afterwards.
#[derive(Default)]
struct RegistrationState {
    token: Option<String>,
    request_in_flight: bool,
    waiters: Vec<oneshot::Sender<String>>,
}

/// State shared between the bridge and its event router.
pub(crate) struct BridgeState {
    handlers: Mutex<EventHandlers>,
    registration: Mutex<RegistrationState>,
}

impl BridgeState {
    fn new() -> Self {
        Self {
            handlers: Mutex::new(EventHandlers::default()),
            registration: Mutex::new(RegistrationState::default()),
        }
    }

    /// Applies a parsed inbound event. Handler invocation happens with no
    /// lock held, so callbacks may re-enter the bridge freely.
    fn apply(&self, event: InboundEvent) {
        match event {
            InboundEvent::Select { payload } => {
                let handler = self.handlers.lock().on_select.clone();
                if let Some(handler) = handler {
                    (*handler)(payload);
                }
            }
            InboundEvent::ForegroundDisplay(notification) => {
                let handler = self.handlers.lock().on_foreground.clone();
                if let Some(handler) = handler {
                    (*handler)(notification);
                }
            }
            InboundEvent::RegistrationToken { token } => {
                let waiters = {
                    let mut registration = self.registration.lock();
                    registration.token = Some(token.clone());
                    registration.request_in_flight = false;
                    std::mem::take(&mut registration.waiters)
                };
                info!(waiters = waiters.len(), "remote registration token received");
                for waiter in waiters {
                    // A waiter whose caller already gave up is fine to skip.
                    let _ = waiter.send(token.clone());
                }
                let handler = self.handlers.lock().on_registration.clone();
                if let Some(handler) = handler {
                    (*handler)(&token);
                }
            }
            InboundEvent::RegistrationFailed { reason } => {
                debug!(%reason, "remote registration failed; no caller is notified");
            }
            InboundEvent::RemotePush { payload } => {
                debug!(%payload, "remote push received; no caller is notified");
            }
        }
    }
}

/// Inbound half of the bridge.
///
/// Handed to whoever owns the channel subscription; raw native events are
/// fed through [`EventRouter::dispatch`], which parses them and drives the
/// callback registry and registration state.
#[derive(Clone)]
pub struct EventRouter {
    state: Arc<BridgeState>,
}

impl EventRouter {
    /// Parses and applies one inbound event.
    ///
    /// Unknown event names and malformed arguments fail the call; events the
    /// bridge merely acknowledges succeed without side effects.
    pub fn dispatch(&self, name: &str, args: Value) -> BridgeResult<()> {
        let event = InboundEvent::parse(name, &args)?;
        self.state.apply(event);
        Ok(())
    }
}

/// Facade forwarding notification requests to the native layer and relaying
/// native callbacks back to application code.
///
/// Constructed once per process from a platform identity and a channel
/// handle. Cloning yields another handle onto the same shared state.
#[derive(Clone)]
pub struct NotificationBridge {
    platform: MobilePlatform,
    channel: Arc<dyn MethodChannel>,
    state: Arc<BridgeState>,
}

impl NotificationBridge {
    pub fn new(platform: MobilePlatform, channel: Arc<dyn MethodChannel>) -> Self {
        Self {
            platform,
            channel,
            state: Arc::new(BridgeState::new()),
        }
    }

    pub fn platform(&self) -> MobilePlatform {
        self.platform
    }

    /// Returns the router the channel subscription owner feeds inbound
    /// events into.
    pub fn event_router(&self) -> EventRouter {
        EventRouter {
            state: Arc::clone(&self.state),
        }
    }

    /// Installs the callback set and performs native-side setup.
    ///
    /// Must complete before any other operation; the native layer rejects or
    /// ignores earlier calls. Returns whether native setup succeeded.
    pub async fn initialize(
        &self,
        settings: &InitializationSettings,
        handlers: EventHandlers,
    ) -> BridgeResult<bool> {
        *self.state.handlers.lock() = handlers;
        let args = settings.branch(self.platform).cloned().unwrap_or(Value::Null);
        debug!(platform = self.platform.name(), "initializing native notifications");
        let reply = self.channel.invoke(method::INITIALIZE, args).await?;
        Ok(reply.as_bool().unwrap_or_default())
    }

    /// Displays a notification immediately.
    pub async fn show(
        &self,
        id: i64,
        title: Option<String>,
        body: Option<String>,
        details: &NotificationDetails,
        payload: Option<String>,
    ) -> BridgeResult<()> {
        let id = validate_id(id)?;
        let request = ShowRequest {
            id,
            title,
            body,
            platform_specifics: details.branch(self.platform).cloned(),
            payload: payload.unwrap_or_default(),
        };
        debug!(id, "forwarding show request");
        self.invoke(method::SHOW, &request).await.map(drop)
    }

    /// Cancels a pending or delivered notification.
    ///
    /// No local record of live ids exists; canceling an unknown id is the
    /// native layer's concern, never an error here.
    pub async fn cancel(&self, id: i64) -> BridgeResult<()> {
        let id = validate_id(id)?;
        debug!(id, "forwarding cancel request");
        self.channel
            .invoke(method::CANCEL, Value::from(id))
            .await
            .map(drop)
    }

    /// Cancels every notification this application owns.
    pub async fn cancel_all(&self) -> BridgeResult<()> {
        debug!("forwarding cancel-all request");
        self.channel
            .invoke(method::CANCEL_ALL, Value::Null)
            .await
            .map(drop)
    }

    /// Schedules a one-shot notification at an absolute instant.
    pub async fn schedule(
        &self,
        id: i64,
        title: Option<String>,
        body: Option<String>,
        scheduled_at: DateTime<Utc>,
        details: &NotificationDetails,
        payload: Option<String>,
    ) -> BridgeResult<()> {
        let id = validate_id(id)?;
        let request = ScheduleRequest {
            id,
            title,
            body,
            milliseconds_since_epoch: scheduled_at.timestamp_millis(),
            platform_specifics: details.branch(self.platform).cloned(),
            payload: payload.unwrap_or_default(),
        };
        debug!(id, at = request.milliseconds_since_epoch, "forwarding schedule request");
        self.invoke(method::SCHEDULE, &request).await.map(drop)
    }

    /// Schedules a repeating notification; the first fire is one interval
    /// after the call instant.
    pub async fn periodically_show(
        &self,
        id: i64,
        title: Option<String>,
        body: Option<String>,
        interval: RepeatInterval,
        details: &NotificationDetails,
        payload: Option<String>,
    ) -> BridgeResult<()> {
        let id = validate_id(id)?;
        let request = self.periodic_request(id, title, body, interval, details, payload);
        debug!(id, interval = interval.ordinal(), "forwarding periodic request");
        self.invoke(method::PERIODICALLY_SHOW, &request)
            .await
            .map(drop)
    }

    /// Schedules a daily notification at a fixed wall-clock time.
    pub async fn show_daily_at_time(
        &self,
        id: i64,
        title: Option<String>,
        body: Option<String>,
        time: Time,
        details: &NotificationDetails,
        payload: Option<String>,
    ) -> BridgeResult<()> {
        let id = validate_id(id)?;
        let request = DailyRequest {
            periodic: self.periodic_request(id, title, body, RepeatInterval::Daily, details, payload),
            repeat_time: time,
        };
        debug!(id, "forwarding daily request");
        self.invoke(method::SHOW_DAILY_AT_TIME, &request)
            .await
            .map(drop)
    }

    /// Schedules a weekly notification at a fixed weekday and time.
    pub async fn show_weekly_at_day_and_time(
        &self,
        id: i64,
        title: Option<String>,
        body: Option<String>,
        day: Day,
        time: Time,
        details: &NotificationDetails,
        payload: Option<String>,
    ) -> BridgeResult<()> {
        let id = validate_id(id)?;
        let request = WeeklyRequest {
            daily: DailyRequest {
                periodic: self.periodic_request(
                    id,
                    title,
                    body,
                    RepeatInterval::Weekly,
                    details,
                    payload,
                ),
                repeat_time: time,
            },
            day,
        };
        debug!(id, day = day.value(), "forwarding weekly request");
        self.invoke(method::SHOW_WEEKLY_AT_DAY_AND_TIME, &request)
            .await
            .map(drop)
    }

    /// Obtains a remote-registration token.
    ///
    /// Resolves immediately from the cache when a token is already known.
    /// Otherwise the caller joins the waiter list; the first waiter issues
    /// the single native request all concurrent callers share, and everyone
    /// resolves together when the token event arrives.
    pub async fn register_for_remote_notifications(&self, params: Value) -> BridgeResult<String> {
        let (receiver, issue_request) = {
            let mut registration = self.state.registration.lock();
            if let Some(token) = &registration.token {
                return Ok(token.clone());
            }
            let (sender, receiver) = oneshot::channel();
            registration.waiters.push(sender);
            let issue_request = !registration.request_in_flight;
            registration.request_in_flight = true;
            (receiver, issue_request)
        };
        if issue_request {
            debug!("requesting remote registration");
            self.channel
                .invoke(method::REGISTER_FOR_REMOTE_NOTIFICATIONS, params)
                .await?;
        }
        receiver
            .await
            .map_err(|_| BridgeError::RegistrationAbandoned)
    }

    /// Reports whether the app was launched by a notification tap.
    ///
    /// A reply without a payload key yields a launch record with no payload.
    pub async fn get_notification_app_launch_details(
        &self,
    ) -> BridgeResult<NotificationAppLaunchDetails> {
        let reply = self
            .channel
            .invoke(method::GET_NOTIFICATION_APP_LAUNCH_DETAILS, Value::Null)
            .await?;
        Ok(NotificationAppLaunchDetails {
            did_notification_launch_app: reply
                .get("notificationLaunchedApp")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            payload: reply
                .get("payload")
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }

    fn periodic_request(
        &self,
        id: i32,
        title: Option<String>,
        body: Option<String>,
        interval: RepeatInterval,
        details: &NotificationDetails,
        payload: Option<String>,
    ) -> PeriodicRequest {
        PeriodicRequest {
            id,
            title,
            body,
            called_at: Utc::now().timestamp_millis(),
            repeat_interval: interval,
            platform_specifics: details.branch(self.platform).cloned(),
            payload: payload.unwrap_or_default(),
        }
    }

    /// Serializes a tagged request at the channel boundary and invokes it.
    async fn invoke<T: Serialize>(&self, method_name: &str, request: &T) -> BridgeResult<Value> {
        let args = serde_json::to_value(request).map_err(|source| BridgeError::Encode {
            method: method_name.to_string(),
            source,
        })?;
        self.channel.invoke(method_name, args).await
    }
}

/// The only local input validation besides time-of-day construction: the
/// native id space is signed 32-bit.
fn validate_id(id: i64) -> BridgeResult<i32> {
    i32::try_from(id).map_err(|_| BridgeError::IdOutOfRange(id))
}
