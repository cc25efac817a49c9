//! Human-readable rendering of shapes.
//!
//! Shapes render as `{Label: value, ...}` using their wire labels. Absent
//! fields are skipped, nested shapes render recursively. Timestamps render
//! as RFC 3339 instants rather than epoch seconds.

use std::fmt;

use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::Value;

use super::timestamp::from_epoch_seconds;

/// Render a serializable shape
pub fn write_shape<T: Serialize>(shape: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let value = serde_json::to_value(shape).map_err(|_| fmt::Error)?;
    write_value(&value, f)
}

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => Ok(()),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Number(n) => write!(f, "{}", n),
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_value(item, f)?;
            }
            f.write_str("]")
        }
        Value::Object(fields) => {
            f.write_str("{")?;
            let mut first = true;
            for (label, field) in fields.iter().filter(|(_, v)| !v.is_null()) {
                if !first {
                    f.write_str(", ")?;
                }
                first = false;
                write!(f, "{}: ", label)?;
                match field {
                    Value::Number(n) if is_timestamp_label(label) => write_instant(n, f)?,
                    _ => write_value(field, f)?,
                }
            }
            f.write_str("}")
        }
    }
}

fn is_timestamp_label(label: &str) -> bool {
    label.ends_with("Timestamp") || label == "NotBefore" || label == "NotAfter"
}

fn write_instant(seconds: &serde_json::Number, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match seconds.as_f64().and_then(from_epoch_seconds) {
        Some(instant) => f.write_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => write!(f, "{}", seconds),
    }
}

/// Implement `Display` for shapes through [`write_shape`]
macro_rules! impl_display {
    ($($shape:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $shape {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    $crate::utils::display::write_shape(self, f)
                }
            }
        )+
    };
}

pub(crate) use impl_display;
