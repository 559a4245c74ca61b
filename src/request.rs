//! Tagged wire structs, one per outbound operation.
//!
//! Each operation owns an explicit request type; serialization to the
//! channel's generic value happens once, at the channel boundary. Field
//! names here are the wire contract with the native side.

use serde::Serialize;
use serde_json::Value;

use crate::schedule::{Day, RepeatInterval, Time};

/// Immediate display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowRequest {
    pub id: i32,
    pub title: Option<String>,
    pub body: Option<String>,
    pub platform_specifics: Option<Value>,
    pub payload: String,
}

/// One-shot display at an absolute instant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub id: i32,
    pub title: Option<String>,
    pub body: Option<String>,
    pub milliseconds_since_epoch: i64,
    pub platform_specifics: Option<Value>,
    pub payload: String,
}

/// Repeating display anchored at the call instant.
///
/// The native side computes the first fire time as `calledAt` plus one
/// interval and repeats every interval thereafter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodicRequest {
    pub id: i32,
    pub title: Option<String>,
    pub body: Option<String>,
    pub called_at: i64,
    pub repeat_interval: RepeatInterval,
    pub platform_specifics: Option<Value>,
    pub payload: String,
}

/// Daily display at a fixed wall-clock time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRequest {
    #[serde(flatten)]
    pub periodic: PeriodicRequest,
    pub repeat_time: Time,
}

/// Weekly display at a fixed weekday and wall-clock time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRequest {
    #[serde(flatten)]
    pub daily: DailyRequest,
    pub day: Day,
}
