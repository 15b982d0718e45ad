use chrono::{DateTime, Utc};

use crate::Error;

/// 100ns intervals between 1582-10-15 and 1970-01-01
const GREGORIAN_TO_UNIX_100NS: i64 = 122_192_928_000_000_000;
const INTERVALS_PER_SECOND: i64 = 10_000_000;

fn parse_field(field: &str, bits: u32, uuid: &str) -> Result<i64, Error> {
    if field.is_empty() || field.len() > (bits / 4) as usize {
        return Err(Error::InvalidUuidFormat(uuid.to_string()));
    }

    i64::from_str_radix(field, 16).map_err(|_| Error::InvalidUuidFormat(uuid.to_string()))
}

/// Recovers the creation time embedded in a version 1 uuid as fractional
/// unix seconds.
///
/// Only the layout is checked, the version nibble is masked off without
/// validation, so other versions give a meaningless but stable value.
pub fn timestamp_from_uuid(uuid: &str) -> Result<f64, Error> {
    let parts = uuid.split('-').collect::<Vec<&str>>();
    let [time_low, time_mid, time_hi_and_version, _, _] = parts.as_slice() else {
        return Err(Error::InvalidUuidFormat(uuid.to_string()));
    };

    let time_low = parse_field(time_low, 32, uuid)?;
    let time_mid = parse_field(time_mid, 16, uuid)?;
    let time_hi = parse_field(time_hi_and_version, 16, uuid)? & 0x0fff;

    let intervals = (time_hi << 48) | (time_mid << 32) | time_low;
    let unix_intervals = intervals - GREGORIAN_TO_UNIX_100NS;

    let seconds = (unix_intervals / INTERVALS_PER_SECOND) as f64;
    let fraction = (unix_intervals % INTERVALS_PER_SECOND) as f64 / INTERVALS_PER_SECOND as f64;

    Ok(seconds + fraction)
}

/// Converts fractional unix seconds into a date, `None` if out of range.
pub fn to_datetime(timestamp: f64) -> Option<DateTime<Utc>> {
    let seconds = timestamp.floor();
    let nanos = ((timestamp - seconds) * 1e9).round().min(999_999_999.0) as u32;

    DateTime::from_timestamp(seconds as i64, nanos)
}
