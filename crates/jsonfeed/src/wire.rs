// ABOUTME: Serde field hooks shared by the feed model.
// ABOUTME: Treats JSON null as the zero value and writes unset dates as the zero timestamp.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire form of an unset date.
pub const ZERO_TIMESTAMP: &str = "0001-01-01T00:00:00Z";

/// Unix seconds of [`ZERO_TIMESTAMP`].
const ZERO_TIMESTAMP_SECS: i64 = -62_135_596_800;

/// Deserializes a field, mapping JSON `null` to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Serializes a date, writing [`ZERO_TIMESTAMP`] when it is unset.
pub fn serialize_date<S>(
    date: &Option<DateTime<FixedOffset>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(dt) => dt.serialize(serializer),
        None => serializer.serialize_str(ZERO_TIMESTAMP),
    }
}

/// True for the zero instant, `0001-01-01T00:00:00Z`.
pub fn is_zero_date(dt: &DateTime<FixedOffset>) -> bool {
    dt.timestamp() == ZERO_TIMESTAMP_SECS && dt.timestamp_subsec_nanos() == 0
}
