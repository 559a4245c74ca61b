//! Remote-registration flows: single-flight native requests, waiter
//! resolution order, and the cached-token fast path.

mod common;

use serde_json::{Value, json};
use tokio_test::{assert_pending, assert_ready};

use notify_bridge::channel::{event, method};
use notify_bridge::{BridgeError, MobilePlatform};

use common::bridge_on;

const TOKEN_EVENT: &str = event::DID_REGISTER_FOR_REMOTE_NOTIFICATIONS_WITH_DEVICE_TOKEN;

#[tokio::test]
async fn concurrent_callers_share_one_native_request_and_one_token() {
    common::init_tracing();
    let (channel, bridge) = bridge_on(MobilePlatform::Ios);
    let router = bridge.event_router();

    let (first, second, third, _) = tokio::join!(
        bridge.register_for_remote_notifications(json!({"sandbox": true})),
        bridge.register_for_remote_notifications(json!({"sandbox": true})),
        bridge.register_for_remote_notifications(json!({"sandbox": true})),
        async {
            // Let all three callers enqueue before the token arrives.
            tokio::task::yield_now().await;
            router
                .dispatch(TOKEN_EVENT, json!("device-token-1"))
                .expect("token event should dispatch");
        }
    );

    assert_eq!(first.unwrap(), "device-token-1");
    assert_eq!(second.unwrap(), "device-token-1");
    assert_eq!(third.unwrap(), "device-token-1");
    assert_eq!(
        channel
            .calls_for(method::REGISTER_FOR_REMOTE_NOTIFICATIONS)
            .len(),
        1
    );
}

#[tokio::test]
async fn cached_token_resolves_immediately_with_no_native_request() {
    let (channel, bridge) = bridge_on(MobilePlatform::Ios);
    bridge
        .event_router()
        .dispatch(TOKEN_EVENT, json!("device-token-1"))
        .unwrap();

    let token = bridge
        .register_for_remote_notifications(Value::Null)
        .await
        .unwrap();

    assert_eq!(token, "device-token-1");
    assert!(
        channel
            .calls_for(method::REGISTER_FOR_REMOTE_NOTIFICATIONS)
            .is_empty()
    );
}

#[test]
fn registration_suspends_until_the_token_event_arrives() {
    let (_channel, bridge) = bridge_on(MobilePlatform::Ios);
    let router = bridge.event_router();

    let mut pending = tokio_test::task::spawn(bridge.register_for_remote_notifications(Value::Null));
    assert_pending!(pending.poll());

    router.dispatch(TOKEN_EVENT, json!("device-token-2")).unwrap();
    assert!(pending.is_woken());
    let token = assert_ready!(pending.poll()).unwrap();
    assert_eq!(token, "device-token-2");
}

#[test]
fn registration_failure_event_leaves_waiters_suspended() {
    let (channel, bridge) = bridge_on(MobilePlatform::Ios);
    let router = bridge.event_router();

    let mut pending = tokio_test::task::spawn(bridge.register_for_remote_notifications(Value::Null));
    assert_pending!(pending.poll());

    // The failure event is acknowledged without resolving anyone.
    router
        .dispatch(event::DID_REGISTER_FOR_REMOTE_NOTIFICATIONS_FAILED, Value::Null)
        .unwrap();
    assert_pending!(pending.poll());

    // A later token still resolves the original waiter.
    router.dispatch(TOKEN_EVENT, json!("late-token")).unwrap();
    let token = assert_ready!(pending.poll()).unwrap();
    assert_eq!(token, "late-token");
    assert_eq!(
        channel
            .calls_for(method::REGISTER_FOR_REMOTE_NOTIFICATIONS)
            .len(),
        1
    );
}

#[tokio::test]
async fn failed_native_registration_call_propagates_once() {
    let (channel, bridge) = bridge_on(MobilePlatform::Ios);
    channel.fail_with(
        method::REGISTER_FOR_REMOTE_NOTIFICATIONS,
        "entitlement missing",
    );

    let outcome = bridge.register_for_remote_notifications(Value::Null).await;
    assert!(matches!(outcome, Err(BridgeError::Channel { .. })));
}
