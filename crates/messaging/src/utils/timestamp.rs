//! Wire format of timestamps.
//!
//! The service exchanges instants as epoch seconds with a fractional part
//! carrying millisecond precision. Anything finer is dropped on
//! serialization, so an instant read back from a payload is truncated to
//! its millisecond.

use chrono::{DateTime, Utc};

/// Convert an instant to fractional epoch seconds, truncated to the millisecond
pub fn to_epoch_seconds(instant: &DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / 1000.0
}

/// Convert fractional epoch seconds to an instant, rounding to the millisecond
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}

/// Serde adapter for `Option<DateTime<Utc>>` fields
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_f64(super::to_epoch_seconds(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<f64>::deserialize(deserializer)? {
            Some(seconds) => super::from_epoch_seconds(seconds)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", seconds))),
            None => Ok(None),
        }
    }
}
