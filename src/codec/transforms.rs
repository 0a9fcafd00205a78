use std::net::Ipv4Addr;

use chrono::{DateTime, Days, Local, LocalResult, NaiveTime, TimeDelta, TimeZone};
use serde_json::Value;

use super::{CommandValue, FieldValue};

/// Reason a single value could not be transformed. The descriptor wraps it
/// into an [`Error::InvalidValue`](crate::Error::InvalidValue) carrying the field name.
pub type TransformResult<T> = std::result::Result<T, String>;

const STATION_COUNT: usize = 8;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Decode transforms applied to status (`/jc`) wire values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoder {
    /// Epoch seconds to local date-time
    Timestamp,
    Integer,
    /// Nonzero to `true`
    Flag,
    Text,
    /// Minutes-from-midnight to an absolute time today, 0 meaning absent
    SunTime,
    /// Packed 32-bit integer to dotted quad
    IpAddress,
    /// Bitmask to the open state of 8 stations
    StationBits,
    /// Structure not known; handed back untouched
    Passthrough,
}

impl Decoder {
    pub fn decode(&self, raw: &Value, now: DateTime<Local>) -> TransformResult<FieldValue> {
        match self {
            Decoder::Timestamp => as_integer(raw)
                .and_then(epoch_to_local)
                .map(FieldValue::Timestamp),
            Decoder::Integer => as_integer(raw).map(FieldValue::Integer),
            Decoder::Flag => as_flag(raw).map(FieldValue::Bool),
            Decoder::Text => Ok(FieldValue::Text(as_text(raw))),
            Decoder::SunTime => as_integer(raw)
                .and_then(|minutes| sun_time(minutes, now))
                .map(FieldValue::Time),
            Decoder::IpAddress => as_integer(raw)
                .and_then(ip_address)
                .map(FieldValue::Address),
            Decoder::StationBits => {
                station_mask(raw).map(|mask| FieldValue::Stations(stations(mask)))
            }
            Decoder::Passthrough => Ok(FieldValue::Raw(raw.clone())),
        }
    }
}

/// Encode transforms producing command (`/cv`) wire values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoder {
    Integer,
    /// Absolute resume time to whole minutes from now
    RainDelay,
}

impl Encoder {
    pub fn encode(&self, value: &CommandValue, now: DateTime<Local>) -> TransformResult<i64> {
        match (self, value) {
            (Encoder::Integer, CommandValue::Int(i)) => Ok(*i),
            (Encoder::Integer, CommandValue::ResumeAt(_)) => {
                Err("expected an integer, got a resume time".into())
            }
            (Encoder::RainDelay, CommandValue::ResumeAt(resume)) => {
                Ok(rain_delay_minutes(*resume, now))
            }
            (Encoder::RainDelay, CommandValue::Int(0)) => Ok(0),
            (Encoder::RainDelay, CommandValue::Int(i)) => Err(format!(
                "expected a resume time or 0 to clear the delay, got {i}"
            )),
        }
    }
}

fn as_integer(raw: &Value) -> TransformResult<i64> {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| format!("expected an integer, got {n}")),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("expected an integer, got {raw}")),
        other => Err(format!("expected an integer, got {other}")),
    }
}

fn as_flag(raw: &Value) -> TransformResult<bool> {
    match raw {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => n
            .as_f64()
            .map(|f| f != 0.0)
            .ok_or_else(|| format!("expected a number, got {n}")),
        Value::String(_) => as_integer(raw).map(|i| i != 0),
        other => Err(format!("expected a number or boolean, got {other}")),
    }
}

fn as_text(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn epoch_to_local(secs: i64) -> TransformResult<DateTime<Local>> {
    match Local.timestamp_opt(secs, 0) {
        LocalResult::Single(ts) => Ok(ts),
        _ => Err(format!("epoch {secs} is out of range")),
    }
}

/// Next local midnight minus `minutes`; 0 means the device has no value.
pub fn sun_time(minutes: i64, now: DateTime<Local>) -> TransformResult<Option<DateTime<Local>>> {
    if minutes == 0 {
        return Ok(None);
    }
    if !(1..=MINUTES_PER_DAY).contains(&minutes) {
        return Err(format!(
            "{minutes} is not a minute of the day (1..={MINUTES_PER_DAY})"
        ));
    }
    let naive = now
        .date_naive()
        .and_time(NaiveTime::MIN)
        .checked_add_days(Days::new(1))
        .zip(TimeDelta::try_minutes(minutes))
        .and_then(|(midnight, offset)| midnight.checked_sub_signed(offset))
        .ok_or_else(|| format!("{minutes} minutes before midnight is out of range"))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(Some)
        .ok_or_else(|| format!("{naive} does not exist in the local timezone"))
}

/// Dotted quad with the most significant byte first.
pub fn ip_address(packed: i64) -> TransformResult<String> {
    u32::try_from(packed)
        .map(|ip| Ipv4Addr::from(ip).to_string())
        .map_err(|_| format!("{packed} does not fit in 32 bits"))
}

fn station_mask(raw: &Value) -> TransformResult<u8> {
    // Multi-board firmware reports one byte per board; only the first is decoded
    let raw = match raw {
        Value::Array(boards) => boards
            .first()
            .ok_or_else(|| "empty station bit array".to_string())?,
        other => other,
    };
    as_integer(raw).map(|mask| (mask & 0xFF) as u8)
}

/// Station `i` is open when bit `i` (LSB first) is set.
pub fn stations(mask: u8) -> [bool; STATION_COUNT] {
    std::array::from_fn(|i| mask & (1 << i) != 0)
}

/// Whole minutes from `now` until `resume`, truncated toward zero.
/// No resume time, or one already in the past, clears the delay.
pub fn rain_delay_minutes(resume: Option<DateTime<Local>>, now: DateTime<Local>) -> i64 {
    match resume {
        // Past times clamp to 0 rather than sending the firmware negative minutes
        Some(resume) => ((resume - now).num_seconds() / 60).max(0),
        None => 0,
    }
}
