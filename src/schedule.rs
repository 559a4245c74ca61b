//! Scheduling vocabulary: wall-clock times, weekdays, repeat intervals.
//!
//! These types exist to make invalid schedule parameters unrepresentable on
//! the wire. Construction is where validation happens; serialization is
//! infallible afterwards.

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::error::{BridgeError, BridgeResult};

/// Wall-clock time of day carried with daily and weekly schedules.
///
/// Wire form is a map of `hour`, `minute`, and `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Time {
    hour: u32,
    minute: u32,
    second: u32,
}

impl Time {
    /// Builds a time of day, rejecting out-of-range components.
    pub fn new(hour: u32, minute: u32, second: u32) -> BridgeResult<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(BridgeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}

impl From<NaiveTime> for Time {
    /// Sub-second precision is dropped; native schedulers resolve to seconds.
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }
}

/// Days of the week as the native side numbers them: 1 = Sunday through
/// 7 = Saturday. This is deliberately not ISO weekday numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Day {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl Serialize for Day {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.value())
    }
}

/// How often a repeating notification refires.
///
/// Wire form is the ordinal position, which the native side maps back onto
/// its own interval table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatInterval {
    EveryMinute = 0,
    Hourly = 1,
    Daily = 2,
    Weekly = 3,
}

impl RepeatInterval {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl Serialize for RepeatInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.ordinal())
    }
}
