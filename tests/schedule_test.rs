//! Scheduling vocabulary: validation ranges and wire forms.

use chrono::NaiveTime;
use serde_json::json;

use notify_bridge::{BridgeError, Day, RepeatInterval, Time};

#[test]
fn time_rejects_out_of_range_components() {
    assert!(matches!(
        Time::new(24, 0, 0),
        Err(BridgeError::InvalidTime { hour: 24, .. })
    ));
    assert!(matches!(
        Time::new(0, 60, 0),
        Err(BridgeError::InvalidTime { minute: 60, .. })
    ));
    assert!(matches!(
        Time::new(0, 0, 60),
        Err(BridgeError::InvalidTime { second: 60, .. })
    ));
}

#[test]
fn time_accepts_boundary_components() -> anyhow::Result<()> {
    let midnight = Time::new(0, 0, 0)?;
    assert_eq!((midnight.hour(), midnight.minute(), midnight.second()), (0, 0, 0));

    let last = Time::new(23, 59, 59)?;
    assert_eq!((last.hour(), last.minute(), last.second()), (23, 59, 59));
    Ok(())
}

#[test]
fn time_serializes_as_a_component_map() -> anyhow::Result<()> {
    let time = Time::new(7, 5, 0)?;
    assert_eq!(
        serde_json::to_value(time)?,
        json!({"hour": 7, "minute": 5, "second": 0})
    );
    Ok(())
}

#[test]
fn time_from_naive_time_drops_subseconds() {
    let naive = NaiveTime::from_hms_milli_opt(8, 30, 15, 500).unwrap();
    let time = Time::from(naive);
    assert_eq!((time.hour(), time.minute(), time.second()), (8, 30, 15));
}

#[test]
fn day_wire_numbers_start_at_sunday() {
    assert_eq!(Day::Sunday.value(), 1);
    assert_eq!(Day::Wednesday.value(), 4);
    assert_eq!(Day::Saturday.value(), 7);
    assert_eq!(serde_json::to_value(Day::Sunday).unwrap(), json!(1));
}

#[test]
fn repeat_interval_wire_form_is_the_ordinal() {
    assert_eq!(RepeatInterval::EveryMinute.ordinal(), 0);
    assert_eq!(RepeatInterval::Hourly.ordinal(), 1);
    assert_eq!(RepeatInterval::Daily.ordinal(), 2);
    assert_eq!(RepeatInterval::Weekly.ordinal(), 3);
    assert_eq!(serde_json::to_value(RepeatInterval::Daily).unwrap(), json!(2));
}
