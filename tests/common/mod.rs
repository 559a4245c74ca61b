#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use notify_bridge::{BridgeError, BridgeResult, MethodChannel, MobilePlatform, NotificationBridge};

/// Test double for the native transport: records every invocation and
/// answers from a canned per-method reply table.
pub struct FakeChannel {
    calls: Mutex<Vec<(String, Value)>>,
    replies: Mutex<HashMap<String, Value>>,
    failures: Mutex<HashMap<String, String>>,
}

impl FakeChannel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            replies: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
        })
    }

    /// Cans the reply for a method. Methods without one reply with null.
    pub fn reply_with(&self, method: &str, reply: Value) {
        self.replies.lock().insert(method.to_string(), reply);
    }

    /// Makes a method report a native-side failure instead of replying.
    pub fn fail_with(&self, method: &str, message: &str) {
        self.failures
            .lock()
            .insert(method.to_string(), message.to_string());
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().clone()
    }

    pub fn calls_for(&self, method: &str) -> Vec<Value> {
        self.calls
            .lock()
            .iter()
            .filter(|(name, _)| name == method)
            .map(|(_, args)| args.clone())
            .collect()
    }

    /// The arguments of the single recorded call to `method`; panics when
    /// the method was called zero or multiple times.
    pub fn single_call(&self, method: &str) -> Value {
        let mut calls = self.calls_for(method);
        assert_eq!(calls.len(), 1, "expected exactly one '{method}' call");
        calls.remove(0)
    }
}

impl MethodChannel for FakeChannel {
    fn invoke(
        &self,
        method: &str,
        args: Value,
    ) -> Pin<Box<dyn Future<Output = BridgeResult<Value>> + Send + '_>> {
        self.calls.lock().push((method.to_string(), args));
        let failure = self.failures.lock().get(method).cloned();
        let reply = self
            .replies
            .lock()
            .get(method)
            .cloned()
            .unwrap_or(Value::Null);
        let method = method.to_string();
        Box::pin(async move {
            match failure {
                Some(message) => Err(BridgeError::Channel { method, message }),
                None => Ok(reply),
            }
        })
    }
}

pub fn bridge_on(platform: MobilePlatform) -> (Arc<FakeChannel>, NotificationBridge) {
    let channel = FakeChannel::new();
    let bridge = NotificationBridge::new(platform, channel.clone());
    (channel, bridge)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
