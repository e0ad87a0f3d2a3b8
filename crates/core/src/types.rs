use chrono::SecondsFormat;
use serde::Serializer;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Serialize as RFC 3339 with microsecond precision and a trailing `Z`.
pub fn serialize_micros<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Micros, true))
}
