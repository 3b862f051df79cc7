//! ISO-8601 timestamps.
//!
//! Output is always RFC 3339 in UTC (`2024-05-01T10:15:30.250Z`). Input accepts
//! RFC 3339 with any offset, or an offset-less local date-time
//! (`2024-05-01T10:15:30`) which is read as UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Invalid ISO-8601 date-time '{input}': {source}")]
pub struct TimestampError {
    pub input: String,
    #[source]
    pub source: chrono::ParseError,
}

pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Absent input formats to absent output.
pub fn format_optional_date_time(value: Option<&DateTime<Utc>>) -> Option<String> {
    value.map(format_date_time)
}

/// Parse an ISO-8601 date-time.
///
/// Blank input (empty or whitespace only) yields `Ok(None)`.
pub fn parse_date_time(value: &str) -> Result<Option<DateTime<Utc>>, TimestampError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(with_offset.with_timezone(&Utc)));
    }

    trimmed
        .parse::<NaiveDateTime>()
        .map(|local| Some(local.and_utc()))
        .map_err(|source| TimestampError {
            input: trimmed.to_string(),
            source,
        })
}

/// Serde adapter for `DateTime<Utc>` fields using the formats above.
///
/// ```ignore
/// #[serde(with = "core_common::time::iso8601")]
/// pub created_at: DateTime<Utc>,
/// ```
pub mod iso8601 {
    use super::{format_date_time, parse_date_time};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date_time(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date_time(&raw)
            .map_err(de::Error::custom)?
            .ok_or_else(|| de::Error::custom("date-time must not be blank"))
    }

    /// Same as the parent module for `Option<DateTime<Utc>>`; blank strings read as `None`.
    pub mod option {
        use super::super::{format_date_time, parse_date_time};
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer, de};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => serializer.serialize_some(&format_date_time(value)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => parse_date_time(&raw).map_err(de::Error::custom),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    #[test]
    fn test_format_uses_utc_designator() {
        let value = Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 30).unwrap();
        assert_eq!(format_date_time(&value), "2024-05-01T10:15:30Z");
    }

    #[test]
    fn test_format_optional_none() {
        assert_eq!(format_optional_date_time(None), None);
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert!(parse_date_time("").unwrap().is_none());
        assert!(parse_date_time("   ").unwrap().is_none());
    }

    #[test]
    fn test_parse_local_date_time_as_utc() {
        let parsed = parse_date_time("2024-05-01T10:15:30").unwrap().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_local_date_time_with_fraction() {
        let parsed = parse_date_time("2024-05-01T10:15:30.123456").unwrap().unwrap();
        assert_eq!(parsed.timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn test_parse_converts_offset_to_utc() {
        let parsed = parse_date_time("2024-05-01T12:15:30+02:00").unwrap().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_date_time("yesterday").unwrap_err();
        assert_eq!(err.input, "yesterday");
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_format_then_parse_keeps_instant() {
        let now = Utc::now();
        let parsed = parse_date_time(&format_date_time(&now)).unwrap().unwrap();
        assert_eq!(parsed, now);
    }

    #[derive(Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "iso8601")]
        at: DateTime<Utc>,
        #[serde(default, with = "iso8601::option")]
        maybe: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_serde_adapter_accepts_local_and_blank() {
        let stamped: Stamped =
            serde_json::from_str(r#"{"at":"2024-05-01T10:15:30","maybe":""}"#).unwrap();
        assert_eq!(stamped.at, Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 30).unwrap());
        assert!(stamped.maybe.is_none());

        let json = serde_json::to_value(&stamped).unwrap();
        assert_eq!(json["at"], "2024-05-01T10:15:30Z");
        assert!(json["maybe"].is_null());
    }

    #[test]
    fn test_serde_adapter_rejects_blank_required() {
        let result: Result<Stamped, _> = serde_json::from_str(r#"{"at":" "}"#);
        assert!(result.is_err());
    }
}
